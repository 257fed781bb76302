//! Text-art sprites loaded from the assets directory.
//!
//! A missing sprite never stops the game: it is replaced by a solid red block
//! and a warning is logged.

use crate::core::constants::{BACKGROUND_SPRITE, DRAGON_SPRITE, OBSTACLE_SPRITE};
use ratatui::style::Color;
use std::fs;
use std::io;
use std::path::Path;

/// Color used for placeholder blocks.
pub const PLACEHOLDER_COLOR: Color = Color::Red;
const PLACEHOLDER_CHAR: &str = "█";

/// A multi-line sprite drawn in a single color. Spaces are transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub lines: Vec<String>,
    pub color: Color,
    /// True when the file could not be loaded.
    pub placeholder: bool,
}

impl Sprite {
    pub fn from_text(text: &str, color: Color) -> Self {
        Self {
            lines: text.lines().map(|l| l.trim_end().to_string()).collect(),
            color,
            placeholder: false,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            lines: vec![PLACEHOLDER_CHAR.to_string()],
            color: PLACEHOLDER_COLOR,
            placeholder: true,
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest line, in chars.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }
}

/// Load `file_name` from `dir`, substituting a placeholder on any failure.
pub fn load_sprite(dir: &Path, file_name: &str, color: Color) -> Sprite {
    let path = dir.join(file_name);
    match fs::read_to_string(&path) {
        Ok(text) => {
            let sprite = Sprite::from_text(&text, color);
            if sprite.is_blank() {
                tracing::warn!("'{}' is empty, using red box instead", path.display());
                Sprite::placeholder()
            } else {
                tracing::debug!(
                    "Loaded sprite '{}' ({}x{})",
                    path.display(),
                    sprite.width(),
                    sprite.height()
                );
                sprite
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("'{}' not found, using red box instead", path.display());
            Sprite::placeholder()
        }
        Err(e) => {
            tracing::warn!(
                "Could not read '{}': {}, using red box instead",
                path.display(),
                e
            );
            Sprite::placeholder()
        }
    }
}

/// Every sprite the game draws.
#[derive(Debug, Clone)]
pub struct Assets {
    pub dragon: Sprite,
    pub obstacle: Sprite,
    pub background: Sprite,
}

impl Assets {
    pub fn load(dir: &Path) -> Self {
        Self {
            dragon: load_sprite(dir, DRAGON_SPRITE, Color::Yellow),
            obstacle: load_sprite(dir, OBSTACLE_SPRITE, Color::Green),
            background: load_sprite(dir, BACKGROUND_SPRITE, Color::Blue),
        }
    }

    pub fn placeholders() -> Self {
        Self {
            dragon: Sprite::placeholder(),
            obstacle: Sprite::placeholder(),
            background: Sprite::placeholder(),
        }
    }

    pub fn missing_count(&self) -> usize {
        [&self.dragon, &self.obstacle, &self.background]
            .iter()
            .filter(|s| s.placeholder)
            .count()
    }
}
