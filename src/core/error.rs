//! Error types for configuration and startup.
//!
//! The gameplay logic itself never fails; only loading the outside world does.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Dragon Flap.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
