//! Board and timing configuration.

use thiserror::Error;

use super::{
    BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_DELAY, INITIAL_LENGTH, MAX_DELAY, MIN_DELAY, Position,
    SPEED_STEP, UNIT_SIZE,
};

/// Configuration rejected by [`GameConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unit size must be positive, got {0}")]
    UnitSize(i32),
    #[error("board {width}x{height} is not a positive multiple of unit size {unit}")]
    BoardSize { width: i32, height: i32, unit: i32 },
    #[error("initial snake length must be at least 1")]
    InitialLength,
    #[error("speed step must be positive")]
    SpeedStep,
    #[error("delays must satisfy 0 < min ({min}) <= default ({default}) <= max ({max})")]
    DelayBounds { min: u64, default: u64, max: u64 },
}

/// Configuration for the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in pixels
    pub width: i32,
    /// Board height in pixels
    pub height: i32,
    /// Side of one grid cell in pixels
    pub unit: i32,
    pub initial_length: usize,
    /// Fastest tick delay in milliseconds
    pub min_delay: u64,
    pub default_delay: u64,
    /// Slowest tick delay in milliseconds
    pub max_delay: u64,
    /// Delay change per speed key press
    pub speed_step: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            unit: UNIT_SIZE,
            initial_length: INITIAL_LENGTH,
            min_delay: MIN_DELAY,
            default_delay: DEFAULT_DELAY,
            max_delay: MAX_DELAY,
            speed_step: SPEED_STEP,
        }
    }
}

impl GameConfig {
    /// Create a validated configuration with a custom board size.
    pub fn new(width: i32, height: i32, unit: i32) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            unit,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unit <= 0 {
            return Err(ConfigError::UnitSize(self.unit));
        }
        if self.width <= 0
            || self.height <= 0
            || self.width % self.unit != 0
            || self.height % self.unit != 0
        {
            return Err(ConfigError::BoardSize {
                width: self.width,
                height: self.height,
                unit: self.unit,
            });
        }
        if self.initial_length == 0 {
            return Err(ConfigError::InitialLength);
        }
        if self.speed_step == 0 {
            return Err(ConfigError::SpeedStep);
        }
        if self.min_delay == 0
            || self.min_delay > self.default_delay
            || self.default_delay > self.max_delay
        {
            return Err(ConfigError::DelayBounds {
                min: self.min_delay,
                default: self.default_delay,
                max: self.max_delay,
            });
        }
        Ok(())
    }

    /// Number of grid columns.
    pub fn columns(&self) -> i32 {
        self.width / self.unit
    }

    /// Number of grid rows.
    pub fn rows(&self) -> i32 {
        self.height / self.unit
    }

    pub fn cell_count(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    /// Whether `pos` lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Iterates over every cell of the board in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.columns()).map(move |col| Position::new(col * self.unit, row * self.unit))
        })
    }
}
