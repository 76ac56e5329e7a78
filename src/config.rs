//! # Configuration
//!
//! Compile-time defaults and the runtime configuration loaded from JSON.

use crate::{DelveError, DelveResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default map width in tiles
pub const DEFAULT_MAP_WIDTH: usize = 80;

/// Default map height in tiles
pub const DEFAULT_MAP_HEIGHT: usize = 22;

/// Lowest result any clamped die roll may produce before its own floor applies
pub const MINIMUM_DIE_ROLL: i32 = -1000;

/// Highest result any clamped die roll may produce before its own ceiling applies
pub const MAXIMUM_DIE_ROLL: i32 = 1000;

/// Number of unread messages buffered before a flush is forced
pub const MAX_MESSAGE_BUFFER: usize = 20;

/// Absolute clamp applied to every clamped roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollLimits {
    pub min: i32,
    pub max: i32,
}

impl Default for RollLimits {
    fn default() -> Self {
        Self {
            min: MINIMUM_DIE_ROLL,
            max: MAXIMUM_DIE_ROLL,
        }
    }
}

/// Which visibility algorithm runs after each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FovMode {
    /// Octant cone shadowcasting
    #[default]
    Cone,
    /// Slope based recursive shadowcasting
    Slope,
    /// Everything is visible
    Off,
}

/// Runtime configuration.
///
/// # Examples
///
/// ```
/// use delve::{FovMode, GameConfig};
///
/// let config = GameConfig::from_json_str(r#"{ "fov": "slope", "message_capacity": 5 }"#).unwrap();
/// assert_eq!(config.fov, FovMode::Slope);
/// assert_eq!(config.message_capacity, 5);
/// assert_eq!(config.roll_limits.max, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Random seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
    /// Absolute clamp for clamped rolls
    pub roll_limits: RollLimits,
    /// Unread message capacity
    pub message_capacity: usize,
    /// Visibility algorithm
    pub fov: FovMode,
    /// Start with the alternate key bindings
    pub alt_keys: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            roll_limits: RollLimits::default(),
            message_capacity: MAX_MESSAGE_BUFFER,
            fov: FovMode::default(),
            alt_keys: false,
        }
    }
}

impl GameConfig {
    /// Creates a configuration with a fixed seed, otherwise defaults.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> DelveResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> DelveResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    /// Rejects values the engine cannot run with.
    pub fn validate(&self) -> DelveResult<()> {
        if self.roll_limits.min > self.roll_limits.max {
            return Err(DelveError::InvalidConfig(format!(
                "roll_limits.min ({}) exceeds roll_limits.max ({})",
                self.roll_limits.min, self.roll_limits.max
            )));
        }
        if self.message_capacity == 0 {
            return Err(DelveError::InvalidConfig(
                "message_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
