//! Configuration, geometry and loop plumbing shared by the game.

pub mod clock;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod geometry;

pub use config::GameConfig;
pub use context::AppContext;
pub use error::{GameError, Result};
pub use geometry::Rect;
