use rand::Rng;

use crate::config::GridSize;
use crate::grid;
use crate::snake::{Position, Snake};

/// The apple currently on the board.
///
/// Replaced wholesale on every pickup; never mutated in place.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates an apple at an explicit position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Places an apple on a uniformly random free cell.
    ///
    /// Sampling rejects occupied cells and draws again. The snake's
    /// capacity is below the cell count, so a free cell always exists and
    /// the loop terminates.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Self {
        debug_assert!(snake.len() < bounds.total_cells());

        loop {
            let position = Position {
                x: rng.gen_range(0..i32::from(bounds.width)),
                y: rng.gen_range(0..i32::from(bounds.height)),
            };

            if grid::is_free(position, bounds, snake) {
                return Self::at(position);
            }
        }
    }
}
