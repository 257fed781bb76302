//! Dragon Flap gameplay.
//!
//! The dragon sits at a fixed column while obstacle pairs scroll in from the
//! right. Gravity pulls it down every frame, a jump sets its velocity straight
//! upward, and touching an obstacle or leaving the screen ends the run.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
