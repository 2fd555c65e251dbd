use std::ops::RangeInclusive;
use std::time::Duration;

use ratatui::style::Color;
use thiserror::Error;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default board width in cells.
pub const DEFAULT_BOARD_WIDTH: u16 = 20;

/// Default board height in cells.
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Default milliseconds the snake takes to advance one cell.
pub const DEFAULT_MOVE_INTERVAL_MS: u64 = 200;

/// Accepted board dimension range, per axis.
pub const BOARD_DIM_RANGE: RangeInclusive<u16> = 4..=100;

/// Accepted move interval range in milliseconds.
pub const MOVE_INTERVAL_RANGE_MS: RangeInclusive<u64> = 40..=2000;

/// Validated gameplay configuration derived from CLI arguments.
///
/// Immutable for the lifetime of a session; a new board size or speed
/// requires a new [`crate::game::GameState`].
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub grid: GridSize,
    /// Seconds the snake takes to advance one cell.
    pub move_interval_secs: f32,
}

impl GameConfig {
    /// Validates raw CLI values into a usable configuration.
    pub fn new(width: u16, height: u16, interval_ms: u64) -> Result<Self, ConfigError> {
        if !BOARD_DIM_RANGE.contains(&width) || !BOARD_DIM_RANGE.contains(&height) {
            return Err(ConfigError::BoardOutOfRange { width, height });
        }

        if !MOVE_INTERVAL_RANGE_MS.contains(&interval_ms) {
            return Err(ConfigError::IntervalOutOfRange(interval_ms));
        }

        Ok(Self {
            grid: GridSize { width, height },
            move_interval_secs: Duration::from_millis(interval_ms).as_secs_f32(),
        })
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error(
        "board {width}x{height} is unsupported; each axis must be {}..={} cells",
        BOARD_DIM_RANGE.start(),
        BOARD_DIM_RANGE.end()
    )]
    BoardOutOfRange { width: u16, height: u16 },
    #[error(
        "move interval {0} ms is unsupported; expected {}..={} ms",
        MOVE_INTERVAL_RANGE_MS.start(),
        MOVE_INTERVAL_RANGE_MS.end()
    )]
    IntervalOutOfRange(u64),
}

/// Solid block glyph for snake cells.
pub const GLYPH_SNAKE: &str = "█";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Snake body color.
pub const COLOR_SNAKE: Color = Color::Green;

/// Snake head color while alive.
pub const COLOR_SNAKE_HEAD: Color = Color::LightGreen;

/// Snake head color after a collision.
pub const COLOR_SNAKE_DEAD: Color = Color::Gray;

/// Food color.
pub const COLOR_FOOD: Color = Color::Red;

/// Board border color.
pub const COLOR_BORDER: Color = Color::White;

/// Dim hint-text color.
pub const COLOR_HINT: Color = Color::DarkGray;
