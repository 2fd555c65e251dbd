use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Attempt budget for one food placement.
///
/// Matches the default 20x20 board's cell count; on a nearly saturated
/// board this bounds the work done in a single tick.
pub const MAX_PLACE_ATTEMPTS: u32 = 400;

/// The single food cell currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Places food in a random cell the snake does not occupy.
    ///
    /// Rejection sampling: up to [`MAX_PLACE_ATTEMPTS`] uniform draws,
    /// accepting the first cell outside the snake (head inclusive).
    /// Returns `None` once the budget is spent. On a saturated board there
    /// is nowhere left to place food, a normal outcome the game reads as a
    /// win, not an error.
    #[must_use]
    pub fn place<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Self> {
        for _ in 0..MAX_PLACE_ATTEMPTS {
            let candidate = random_cell(rng, bounds);
            if !snake.occupies(candidate) {
                return Some(Self::at(candidate));
            }
        }

        None
    }
}

/// Returns a uniformly random cell within `bounds`.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}
