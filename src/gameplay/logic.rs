//! Per-frame game logic: physics, spawning, scrolling, scoring, termination.

use super::types::{EndReason, Gameplay};
use rand::Rng;

/// Input actions during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space or Up.
    Jump,
    /// Esc.
    Quit,
}

/// Something notable that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    Spawned { gap_y: f32 },
    Scored { score: u32 },
    Ended(EndReason),
}

/// Apply player input. Ignored once the run has ended.
pub fn process_input(game: &mut Gameplay, input: GameInput) {
    if !game.is_running() {
        return;
    }

    match input {
        GameInput::Jump => {
            // Velocity override, not additive.
            game.player.velocity = game.config.jump_impulse;
        }
        GameInput::Quit => game.end(EndReason::Quit),
    }
}

/// Advance the run by one frame that took `dt_ms` of wall time.
///
/// Physics is per frame; only the spawn timer uses `dt_ms`.
pub fn process_tick<R: Rng>(game: &mut Gameplay, dt_ms: u64, rng: &mut R) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if !game.is_running() {
        return events;
    }
    game.frame_count += 1;

    // Physics
    game.player.velocity += game.config.gravity;
    game.player.y += game.player.velocity;

    // Spawn
    game.elapsed_ms += dt_ms;
    if game.elapsed_ms - game.last_spawn_ms > game.config.spawn_delay_ms {
        game.last_spawn_ms = game.elapsed_ms;
        let gap_y = game.spawn_obstacle(rng).gap_y();
        events.push(TickEvent::Spawned { gap_y });
    }

    // Scroll
    let speed = game.config.obstacle_speed;
    for pair in &mut game.obstacles {
        pair.shift_left(speed);
    }

    // Score each pair once, when its right edge is behind the dragon
    let player_x = game.player.x;
    for pair in &mut game.obstacles {
        if !pair.passed && pair.right() < player_x {
            pair.passed = true;
            game.score += 1;
            events.push(TickEvent::Scored { score: game.score });
        }
    }

    // Drop pairs that have fully left the screen
    game.obstacles.retain(|pair| pair.right() > 0.0);

    // Termination
    let hitbox = game.player.rect();
    if game.obstacles.iter().any(|pair| pair.collides_with(&hitbox)) {
        game.end(EndReason::Collision);
    } else if game.player.y < 0.0
        || game.player.y + game.player.height > game.config.world_height as f32
    {
        game.end(EndReason::OutOfBounds);
    }

    if let Some(reason) = game.end_reason() {
        events.push(TickEvent::Ended(reason));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::gameplay::types::{ObstaclePair, RunState};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const FRAME_MS: u64 = 16;

    fn new_game() -> Gameplay {
        Gameplay::new(GameConfig::default())
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_one_tick_from_rest() {
        let mut game = new_game();
        let mut rng = rng();
        process_tick(&mut game, FRAME_MS, &mut rng);
        assert!((game.player.velocity - 0.5).abs() < f32::EPSILON);
        assert!((game.player.y - 300.5).abs() < f32::EPSILON);
        assert!(game.is_running());
    }

    #[test]
    fn test_gravity_accumulates_each_frame() {
        let mut game = new_game();
        let mut rng = rng();
        let mut previous = game.player.velocity;
        for _ in 0..10 {
            process_tick(&mut game, FRAME_MS, &mut rng);
            assert!((game.player.velocity - (previous + 0.5)).abs() < 1e-5);
            previous = game.player.velocity;
        }
    }

    #[test]
    fn test_jump_overrides_velocity() {
        for prior in [-20.0, -9.0, 0.0, 3.5, 14.0] {
            let mut game = new_game();
            game.player.velocity = prior;
            process_input(&mut game, GameInput::Jump);
            assert_eq!(game.player.velocity, -9.0);
        }
    }

    #[test]
    fn test_jump_then_tick() {
        let mut game = new_game();
        let mut rng = rng();
        game.player.velocity = 6.0;
        process_input(&mut game, GameInput::Jump);
        process_tick(&mut game, FRAME_MS, &mut rng);
        assert!((game.player.velocity - (-8.5)).abs() < f32::EPSILON);
        assert!((game.player.y - 291.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_quit_ends_run() {
        let mut game = new_game();
        process_input(&mut game, GameInput::Quit);
        assert_eq!(game.state, RunState::Ended(EndReason::Quit));
    }

    #[test]
    fn test_input_ignored_after_end() {
        let mut game = new_game();
        game.end(EndReason::Collision);
        game.player.velocity = 2.0;
        process_input(&mut game, GameInput::Jump);
        assert_eq!(game.player.velocity, 2.0);
        process_input(&mut game, GameInput::Quit);
        assert_eq!(game.state, RunState::Ended(EndReason::Collision));
    }

    #[test]
    fn test_tick_after_end_is_noop() {
        let mut game = new_game();
        let mut rng = rng();
        game.end(EndReason::Quit);
        let y = game.player.y;
        let events = process_tick(&mut game, FRAME_MS, &mut rng);
        assert!(events.is_empty());
        assert_eq!(game.player.y, y);
        assert_eq!(game.frame_count, 0);
    }

    #[test]
    fn test_no_spawn_until_delay_strictly_exceeded() {
        let mut game = new_game();
        let mut rng = rng();
        let events = process_tick(&mut game, 1500, &mut rng);
        assert!(game.obstacles.is_empty());
        assert!(!events.iter().any(|e| matches!(e, TickEvent::Spawned { .. })));

        let events = process_tick(&mut game, 1, &mut rng);
        assert_eq!(game.obstacles.len(), 1);
        assert!(events.iter().any(|e| matches!(e, TickEvent::Spawned { .. })));
        assert_eq!(game.last_spawn_ms, 1501);
    }

    #[test]
    fn test_spawned_pair_moves_on_its_first_frame() {
        let mut game = new_game();
        let mut rng = rng();
        game.elapsed_ms = 1500;
        process_tick(&mut game, FRAME_MS, &mut rng);
        assert_eq!(game.obstacles.len(), 1);
        assert_eq!(game.obstacles[0].x(), 796.0);
    }

    #[test]
    fn test_obstacles_scroll_by_speed() {
        let mut game = new_game();
        let mut rng = rng();
        game.obstacles.push(ObstaclePair::new(500.0, 400.0, 170.0, 70.0, 300.0));
        process_tick(&mut game, FRAME_MS, &mut rng);
        assert_eq!(game.obstacles[0].top.x, 496.0);
        assert_eq!(game.obstacles[0].bottom.x, 496.0);
    }

    #[test]
    fn test_score_once_when_right_edge_passes_player() {
        let mut game = new_game();
        let mut rng = rng();
        // Right edge at 135 moves to 131 (< 133) on the first tick.
        game.obstacles.push(ObstaclePair::new(65.0, 600.0, 170.0, 70.0, 300.0));
        game.obstacles[0].top.y = -1000.0;
        game.obstacles[0].bottom.y = 1000.0;

        let events = process_tick(&mut game, FRAME_MS, &mut rng);
        assert_eq!(game.score, 1);
        assert!(game.obstacles[0].passed);
        assert!(events.contains(&TickEvent::Scored { score: 1 }));

        for _ in 0..5 {
            process_input(&mut game, GameInput::Jump);
            process_tick(&mut game, FRAME_MS, &mut rng);
        }
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_right_edge_equal_to_player_x_does_not_score() {
        let mut game = new_game();
        let mut rng = rng();
        // Right edge lands exactly on 133 after scrolling.
        game.obstacles.push(ObstaclePair::new(67.0, 2000.0, 170.0, 70.0, 300.0));
        game.obstacles[0].top.y = -1000.0;
        process_tick(&mut game, FRAME_MS, &mut rng);
        assert_eq!(game.obstacles[0].right(), 133.0);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_offscreen_pair_removed() {
        let mut game = new_game();
        let mut rng = rng();
        game.obstacles.push(ObstaclePair::new(-66.0, 400.0, 170.0, 70.0, 300.0));
        game.obstacles.push(ObstaclePair::new(600.0, 400.0, 170.0, 70.0, 300.0));
        game.obstacles[0].passed = true;
        process_tick(&mut game, FRAME_MS, &mut rng);
        assert_eq!(game.obstacles.len(), 1);
        assert_eq!(game.obstacles[0].x(), 596.0);
    }

    #[test]
    fn test_collision_ends_run() {
        let mut game = new_game();
        let mut rng = rng();
        // Bottom rectangle starts above the dragon's feet.
        game.obstacles.push(ObstaclePair::new(150.0, 320.0, 170.0, 70.0, 300.0));
        let events = process_tick(&mut game, FRAME_MS, &mut rng);
        assert_eq!(game.state, RunState::Ended(EndReason::Collision));
        assert!(events.contains(&TickEvent::Ended(EndReason::Collision)));
    }

    #[test]
    fn test_flying_through_gap_survives() {
        let mut game = new_game();
        let mut rng = rng();
        game.obstacles.push(ObstaclePair::new(150.0, 420.0, 170.0, 70.0, 300.0));
        process_tick(&mut game, FRAME_MS, &mut rng);
        assert!(game.is_running());
    }

    #[test]
    fn test_falling_below_floor_ends_run() {
        let mut game = new_game();
        let mut rng = rng();
        game.player.y = 560.0;
        game.player.velocity = 0.0;
        process_tick(&mut game, FRAME_MS, &mut rng);
        assert_eq!(game.state, RunState::Ended(EndReason::OutOfBounds));
    }

    #[test]
    fn test_resting_on_floor_is_in_bounds() {
        let mut game = new_game();
        let mut rng = rng();
        game.player.y = 559.5;
        game.player.velocity = 0.0;
        process_tick(&mut game, FRAME_MS, &mut rng);
        assert_eq!(game.player.y, 560.0);
        assert!(game.is_running());
    }

    #[test]
    fn test_rising_above_ceiling_ends_run() {
        let mut game = new_game();
        let mut rng = rng();
        game.player.y = 5.0;
        process_input(&mut game, GameInput::Jump);
        process_tick(&mut game, FRAME_MS, &mut rng);
        assert_eq!(game.state, RunState::Ended(EndReason::OutOfBounds));
    }

    #[test]
    fn test_collision_reported_before_out_of_bounds() {
        let mut game = new_game();
        let mut rng = rng();
        game.player.y = 580.0;
        game.obstacles.push(ObstaclePair::new(150.0, 320.0, 170.0, 70.0, 300.0));
        process_tick(&mut game, FRAME_MS, &mut rng);
        assert_eq!(game.end_reason(), Some(EndReason::Collision));
    }
}
