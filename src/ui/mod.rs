pub mod ascii_scaler;
pub mod hud;
pub mod menu_scene;
pub mod play_scene;
pub mod responsive;

use crate::app::{App, Screen};
use crate::core::context::AppContext;
use ratatui::Frame;
use responsive::{render_too_small, LayoutContext};

/// Draw whichever screen the app is on.
pub fn draw(frame: &mut Frame, app: &App, ctx: &AppContext) {
    let layout_ctx = LayoutContext::from_frame(frame);
    if layout_ctx.is_too_small() {
        render_too_small(frame, &layout_ctx);
        return;
    }

    let area = frame.size();
    match &app.screen {
        Screen::Menu => menu_scene::render_menu(frame, area, &app.menu, &ctx.assets),
        Screen::Intro => menu_scene::render_intro(frame, area, &ctx.assets),
        Screen::Play(game) | Screen::GameOver { game, .. } => {
            play_scene::render_play(frame, area, game, &ctx.assets, &layout_ctx)
        }
    }
}
