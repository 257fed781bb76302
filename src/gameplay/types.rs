//! Dragon Flap data structures.
//!
//! All positions are in world pixels with y growing downward.

use crate::core::config::GameConfig;
use crate::core::geometry::Rect;
use rand::Rng;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The dragon hit an obstacle.
    Collision,
    /// The dragon left the top or bottom of the world.
    OutOfBounds,
    /// The player pressed Esc.
    Quit,
}

/// Run state machine. `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Ended(EndReason),
}

/// The player-controlled dragon.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Fixed horizontal position (left edge).
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Pixels per frame, positive = downward.
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A top/bottom rectangle pair with an opening between them.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePair {
    pub top: Rect,
    pub bottom: Rect,
    /// Set once the dragon has flown past; the pair never scores again.
    pub passed: bool,
}

impl ObstaclePair {
    /// Build a pair at `x` whose bottom rectangle starts at `gap_y`.
    ///
    /// The top rectangle ends `gap_size` pixels above `gap_y`.
    pub fn new(x: f32, gap_y: f32, gap_size: f32, width: f32, height: f32) -> Self {
        Self {
            top: Rect::new(x, gap_y - gap_size - height, width, height),
            bottom: Rect::new(x, gap_y, width, height),
            passed: false,
        }
    }

    pub fn x(&self) -> f32 {
        self.top.x
    }

    pub fn right(&self) -> f32 {
        self.top.right()
    }

    /// Top edge of the bottom rectangle.
    pub fn gap_y(&self) -> f32 {
        self.bottom.y
    }

    pub fn shift_left(&mut self, dx: f32) {
        self.top.translate_x(-dx);
        self.bottom.translate_x(-dx);
    }

    pub fn collides_with(&self, rect: &Rect) -> bool {
        rect.intersects(&self.top) || rect.intersects(&self.bottom)
    }
}

/// State of a single playthrough.
#[derive(Debug, Clone)]
pub struct Gameplay {
    pub config: GameConfig,
    pub state: RunState,
    pub player: Player,
    /// In spawn order, which is also left-to-right screen order.
    pub obstacles: Vec<ObstaclePair>,
    pub score: u32,

    // Timing
    /// Game time accumulated from frame deltas.
    pub elapsed_ms: u64,
    /// `elapsed_ms` at the most recent spawn (0 at start).
    pub last_spawn_ms: u64,
    pub frame_count: u64,
}

impl Gameplay {
    /// Start a run: dragon at (width/6, height/2), at rest, no obstacles.
    pub fn new(config: GameConfig) -> Self {
        let player = Player {
            x: config.player_start_x(),
            y: config.player_start_y(),
            velocity: 0.0,
            width: config.player_width,
            height: config.player_height,
        };
        Self {
            config,
            state: RunState::Running,
            player,
            obstacles: Vec::new(),
            score: 0,
            elapsed_ms: 0,
            last_spawn_ms: 0,
            frame_count: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.state {
            RunState::Running => None,
            RunState::Ended(reason) => Some(reason),
        }
    }

    /// Move to `Ended`. The first reason wins.
    pub fn end(&mut self, reason: EndReason) {
        if self.is_running() {
            self.state = RunState::Ended(reason);
        }
    }

    /// Spawn a pair at the right edge with a uniformly random gap position.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) -> &ObstaclePair {
        let gap_y = rng.gen_range(self.config.gap_range());
        self.spawn_obstacle_at(gap_y as f32)
    }

    /// Spawn a pair at the right edge with a fixed gap position.
    pub fn spawn_obstacle_at(&mut self, gap_y: f32) -> &ObstaclePair {
        let pair = ObstaclePair::new(
            self.config.world_width as f32,
            gap_y,
            self.config.gap_size as f32,
            self.config.obstacle_width,
            self.config.obstacle_height,
        );
        self.obstacles.push(pair);
        &self.obstacles[self.obstacles.len() - 1]
    }
}
