//! Dragon Flap - a terminal arcade game.
//!
//! This module exposes the game logic for testing and external use.

pub mod app;
pub mod assets;
pub mod build_info;
pub mod core;
pub mod gameplay;
pub mod input;
pub mod logging;
pub mod menu;
pub mod ui;

pub use crate::core::{AppContext, GameConfig, GameError};
pub use gameplay::{EndReason, GameInput, Gameplay, ObstaclePair, RunState, TickEvent};
