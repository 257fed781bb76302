//! Game tuning loaded from `~/.dragonflap/config.json`.
//!
//! Every field is optional in the file; anything left out keeps its default.

use super::constants::*;
use super::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Tunables for one run of the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical world size in pixels. Rendering scales this onto the terminal.
    pub world_width: u32,
    pub world_height: u32,

    /// Target frame rate of the loop.
    pub fps: u32,

    /// Velocity added every frame (positive = downward).
    pub gravity: f32,
    /// Velocity assigned on jump. Must be negative (upward).
    pub jump_impulse: f32,

    pub player_width: f32,
    pub player_height: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,

    /// Pixels per frame obstacles move left.
    pub obstacle_speed: f32,
    /// Vertical opening between the top and bottom rectangle.
    pub gap_size: u32,
    pub gap_margin: u32,
    pub spawn_delay_ms: u64,

    /// How long the final frame stays up before returning to the menu.
    pub game_over_pause_ms: u64,

    pub assets_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            fps: TARGET_FPS,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_speed: OBSTACLE_SPEED,
            gap_size: GAP_SIZE,
            gap_margin: GAP_MARGIN,
            spawn_delay_ms: SPAWN_DELAY_MS,
            game_over_pause_ms: GAME_OVER_PAUSE_MS,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl GameConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: GameConfig =
            serde_json::from_str(&json).map_err(|source| GameError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit path, or fall back to `~/.dragonflap/config.json`.
    ///
    /// An explicit path must exist. The default location is optional and
    /// yields the built-in defaults when absent.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.world_width == 0 || self.world_height == 0 {
            return Err(invalid("world size must be non-zero"));
        }
        if self.fps == 0 {
            return Err(invalid("fps must be non-zero"));
        }
        if !self.jump_impulse.is_finite() || self.jump_impulse >= 0.0 {
            return Err(invalid(format!(
                "jump_impulse must be negative (upward), got {}",
                self.jump_impulse
            )));
        }
        // is_finite also catches NaN
        let positives = [
            ("gravity", self.gravity),
            ("obstacle_speed", self.obstacle_speed),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
        ];
        for (name, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if self.gap_size == 0 {
            return Err(invalid("gap_size must be non-zero"));
        }
        let lowest = self.gap_margin.checked_add(self.gap_size).ok_or_else(|| {
            invalid(format!(
                "gap_margin + gap_size overflows ({} + {})",
                self.gap_margin, self.gap_size
            ))
        })?;
        let highest = self.world_height.saturating_sub(self.gap_margin);
        if lowest > highest {
            return Err(invalid(format!(
                "gap range is empty: gap_margin + gap_size ({}) exceeds world_height - gap_margin ({})",
                lowest, highest
            )));
        }
        Ok(())
    }

    /// Range the gap position (top edge of the bottom rectangle) is drawn from.
    pub fn gap_range(&self) -> RangeInclusive<u32> {
        let lowest = self.gap_margin.saturating_add(self.gap_size);
        lowest..=self.world_height.saturating_sub(self.gap_margin)
    }

    pub fn player_start_x(&self) -> f32 {
        (self.world_width / 6) as f32
    }

    pub fn player_start_y(&self) -> f32 {
        (self.world_height / 2) as f32
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / self.fps.max(1) as u64)
    }
}

fn invalid(message: impl Into<String>) -> GameError {
    GameError::InvalidConfig(message.into())
}

/// `~/.dragonflap/`, if a home directory can be determined.
pub fn dragonflap_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".dragonflap"))
}

pub fn default_config_path() -> Option<PathBuf> {
    dragonflap_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dragonflap_config_{}_{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.world_width, 800);
        assert_eq!(config.world_height, 600);
        assert_eq!(config.fps, 60);
        assert!((config.gravity - 0.5).abs() < f32::EPSILON);
        assert!((config.jump_impulse - (-9.0)).abs() < f32::EPSILON);
        assert_eq!(config.gap_size, 170);
        assert_eq!(config.spawn_delay_ms, 1500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_positions() {
        let config = GameConfig::default();
        assert_eq!(config.player_start_x(), 133.0);
        assert_eq!(config.player_start_y(), 300.0);
        assert_eq!(config.frame_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_gap_range_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.gap_range(), 320..=450);
    }

    #[test]
    fn test_empty_gap_range_rejected() {
        let config = GameConfig {
            world_height: 400,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
        assert!(err.to_string().contains("gap range is empty"));
    }

    #[test]
    fn test_gap_overflow_rejected() {
        let config = GameConfig {
            gap_margin: u32::MAX,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn test_huge_gap_margin_in_file_is_an_error() {
        let path = temp_file("overflow", r#"{ "gap_margin": 4294967295 }"#);
        let result = GameConfig::load(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        for speed in [0.0, -4.0, f32::NAN, f32::INFINITY] {
            let config = GameConfig {
                obstacle_speed: speed,
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("obstacle_speed"), "{}", speed);
        }
    }

    #[test]
    fn test_non_positive_gravity_rejected() {
        for gravity in [0.0, -0.5, f32::NAN] {
            let config = GameConfig {
                gravity,
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("gravity"), "{}", gravity);
        }
    }

    #[test]
    fn test_nan_sizes_rejected() {
        let config = GameConfig {
            player_height: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            obstacle_width: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_jump_rejected() {
        let config = GameConfig {
            jump_impulse: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_positive_jump_rejected() {
        let config = GameConfig {
            jump_impulse: 9.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_fps_rejected() {
        let config = GameConfig {
            fps: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_file("partial", r#"{ "gravity": 0.8, "gap_size": 150 }"#);
        let config = GameConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!((config.gravity - 0.8).abs() < f32::EPSILON);
        assert_eq!(config.gap_size, 150);
        assert_eq!(config.world_width, 800);
        assert_eq!(config.spawn_delay_ms, 1500);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = temp_file("malformed", "{ gravity: ");
        let err = GameConfig::load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, GameError::ConfigParse { .. }));
    }

    #[test]
    fn test_invalid_values_in_file_rejected() {
        let path = temp_file("invalid", r#"{ "jump_impulse": 3.0 }"#);
        let err = GameConfig::load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let path = std::env::temp_dir().join("dragonflap_definitely_missing_98765.json");
        let err = GameConfig::load_or_default(Some(&path)).unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
    }
}
