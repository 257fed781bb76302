//! State shared by every screen, owned by the main loop.

use super::config::GameConfig;
use crate::assets::Assets;

pub struct AppContext {
    pub config: GameConfig,
    pub assets: Assets,
    /// Last known terminal size (cols, rows). Cosmetic only: the world keeps
    /// its configured size no matter how the terminal is resized.
    pub viewport: (u16, u16),
}

impl AppContext {
    pub fn new(config: GameConfig, assets: Assets) -> Self {
        Self {
            config,
            assets,
            viewport: (0, 0),
        }
    }

    /// Record a resize. Returns true if the size actually changed.
    pub fn resize(&mut self, cols: u16, rows: u16) -> bool {
        let changed = self.viewport != (cols, rows);
        self.viewport = (cols, rows);
        changed
    }
}
