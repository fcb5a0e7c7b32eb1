use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::input::Direction;
use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// A `size` by `size` grid.
    #[must_use]
    pub const fn square(size: u16) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the centre cell, rounding towards the origin.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

/// Default cells per side of the play field.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Default terminal columns per grid cell.
pub const DEFAULT_BLOCK_SIZE: u16 = 2;

/// Default starting snake length.
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Amount the tick interval shrinks per level.
pub const DEFAULT_INTERVAL_DECREMENT_MS: u64 = 10;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Apples needed per level increase.
pub const APPLES_PER_LEVEL: u32 = 5;

/// Constructor-time game configuration.
///
/// Every field has a default, so a config file only needs to list the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_size: u16,
    /// Rendering only: terminal columns per cell.
    pub block_size: u16,
    pub initial_capacity: usize,
    pub initial_interval_ms: u64,
    pub interval_decrement_ms: u64,
    pub apples_per_level: u32,
    pub interval_floor_ms: u64,
    /// Spawn cell; the grid centre when absent.
    pub start: Option<Position>,
    /// Heading before the first key press; `None` keeps the snake still.
    pub initial_direction: Option<Direction>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            block_size: DEFAULT_BLOCK_SIZE,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            initial_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            interval_decrement_ms: DEFAULT_INTERVAL_DECREMENT_MS,
            apples_per_level: APPLES_PER_LEVEL,
            interval_floor_ms: MIN_TICK_INTERVAL_MS,
            start: None,
            initial_direction: None,
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file and validates it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the simulation cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid("grid_size must be at least 1".into()));
        }
        if self.block_size == 0 {
            return Err(ConfigError::Invalid("block_size must be at least 1".into()));
        }
        if self.initial_capacity == 0 {
            return Err(ConfigError::Invalid(
                "initial_capacity must be at least 1".into(),
            ));
        }
        if self.initial_capacity >= self.grid().total_cells() {
            return Err(ConfigError::Invalid(format!(
                "initial_capacity {} leaves no room for food on a {}x{} grid",
                self.initial_capacity, self.grid_size, self.grid_size
            )));
        }
        if self.apples_per_level == 0 {
            return Err(ConfigError::Invalid(
                "apples_per_level must be at least 1".into(),
            ));
        }
        if self.initial_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "initial_interval_ms must be at least 1".into(),
            ));
        }
        if self.interval_floor_ms > self.initial_interval_ms {
            return Err(ConfigError::Invalid(format!(
                "interval_floor_ms {} is above initial_interval_ms {}",
                self.interval_floor_ms, self.initial_interval_ms
            )));
        }
        if !self.start_position().is_within_bounds(self.grid()) {
            return Err(ConfigError::Invalid(format!(
                "start {:?} lies outside the {}x{} grid",
                self.start_position(),
                self.grid_size,
                self.grid_size
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize::square(self.grid_size)
    }

    #[must_use]
    pub fn start_position(&self) -> Position {
        self.start.unwrap_or_else(|| self.grid().center())
    }

    #[must_use]
    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms)
    }

    #[must_use]
    pub fn interval_decrement(&self) -> Duration {
        Duration::from_millis(self.interval_decrement_ms)
    }

    #[must_use]
    pub fn interval_floor(&self) -> Duration {
        Duration::from_millis(self.interval_floor_ms)
    }
}
