//! Screen flow: menu, intro, a run, and the pause after it.

use crate::core::context::AppContext;
use crate::gameplay::{process_input, process_tick, EndReason, Gameplay, TickEvent};
use crate::input::{is_global_quit, map_game_key, map_menu_key};
use crate::menu::{process_intro_input, MainMenu, MenuAction};
use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub enum Screen {
    Menu,
    Intro,
    Play(Gameplay),
    /// The final frame of a run stays up until `remaining_ms` runs out.
    GameOver { game: Gameplay, remaining_ms: u64 },
}

pub struct App {
    pub screen: Screen,
    pub menu: MainMenu,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    /// `seed` makes obstacle gaps reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            screen: Screen::Menu,
            menu: MainMenu::new(),
            should_quit: false,
            rng,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, ctx: &AppContext) {
        if is_global_quit(&key) {
            tracing::info!("Quit requested");
            self.should_quit = true;
            return;
        }

        if let Screen::Play(game) = &mut self.screen {
            if let Some(input) = map_game_key(&key) {
                process_input(game, input);
            }
            return;
        }

        let action = match self.screen {
            Screen::Menu => map_menu_key(&key).map(|input| self.menu.process_input(input)),
            Screen::Intro => map_menu_key(&key).map(process_intro_input),
            // Keys are ignored while the final frame is shown.
            Screen::Play(_) | Screen::GameOver { .. } => None,
        };
        if let Some(action) = action {
            self.apply_menu_action(action, ctx);
        }
    }

    fn apply_menu_action(&mut self, action: MenuAction, ctx: &AppContext) {
        match action {
            MenuAction::None => {}
            MenuAction::StartGame => self.start_run(ctx),
            MenuAction::ShowIntro => self.screen = Screen::Intro,
            MenuAction::ShowMenu => self.screen = Screen::Menu,
            MenuAction::Quit => self.should_quit = true,
        }
    }

    pub fn start_run(&mut self, ctx: &AppContext) {
        tracing::info!("Run started");
        self.screen = Screen::Play(Gameplay::new(ctx.config.clone()));
    }

    /// Advance whatever is on screen by one frame of `dt_ms`.
    pub fn update(&mut self, dt_ms: u64, ctx: &AppContext) {
        let mut run_over = false;
        let mut pause_over = false;
        match &mut self.screen {
            Screen::Play(game) => {
                for event in process_tick(game, dt_ms, &mut self.rng) {
                    log_tick_event(&event);
                }
                run_over = !game.is_running();
            }
            Screen::GameOver { remaining_ms, .. } => {
                *remaining_ms = remaining_ms.saturating_sub(dt_ms);
                pause_over = *remaining_ms == 0;
            }
            Screen::Menu | Screen::Intro => {}
        }

        if run_over {
            self.finish_run(ctx);
        } else if pause_over {
            self.screen = Screen::Menu;
        }
    }

    fn finish_run(&mut self, ctx: &AppContext) {
        let screen = std::mem::replace(&mut self.screen, Screen::Menu);
        if let Screen::Play(game) = screen {
            log_run_end(&game);
            self.screen = Screen::GameOver {
                game,
                remaining_ms: ctx.config.game_over_pause_ms,
            };
        }
    }

    pub fn current_run(&self) -> Option<&Gameplay> {
        match &self.screen {
            Screen::Play(game) | Screen::GameOver { game, .. } => Some(game),
            _ => None,
        }
    }
}

fn log_tick_event(event: &TickEvent) {
    match event {
        TickEvent::Spawned { gap_y } => {
            tracing::debug!("Spawned obstacle pair with gap at y={}", gap_y)
        }
        TickEvent::Scored { score } => tracing::debug!("Scored, now {}", score),
        // Logged once by finish_run, which also sees Esc.
        TickEvent::Ended(_) => {}
    }
}

fn log_run_end(game: &Gameplay) {
    let why = match game.end_reason() {
        Some(EndReason::Collision) => "collision",
        Some(EndReason::OutOfBounds) => "out of bounds",
        Some(EndReason::Quit) => "quit",
        None => "running",
    };
    tracing::info!(
        "Run ended ({}) with score {} after {} frames",
        why,
        game.score,
        game.frame_count
    );
}
