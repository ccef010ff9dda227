/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces anonymous `(u16, u16)` tuples for bounds, making width
/// vs. height unambiguous at every call site.
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

/// Fixed board width in cells.
pub const GRID_WIDTH: u16 = 16;

/// Fixed board height in cells.
pub const GRID_HEIGHT: u16 = 8;

/// Terminal columns covered by one grid cell.
///
/// Two columns per cell so a cell reads roughly square in a character
/// grid, the same role the per-cell pixel scale plays on a pixel display.
pub const CELL_COLUMNS: u16 = 2;

/// Solid block pair filling one rendered cell.
pub const GLYPH_CELL: &str = "██";

/// Upper bound on snake length; growth saturates here.
pub const SNAKE_CAPACITY: usize = 100;

/// Tick interval at the start of every game, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: f32 = 500.0;

/// Tick interval floor in milliseconds.
pub const MIN_TICK_INTERVAL_MS: f32 = 50.0;

/// Divisor applied to the tick interval on every apple eaten.
pub const TICK_INTERVAL_DIVISOR: f32 = 5.0;

/// Milliseconds spent on the game-over screen before an automatic restart.
pub const RESTART_DELAY_MS: u64 = 1000;

#[cfg(test)]
mod tests {
    use super::{GRID_HEIGHT, GRID_WIDTH, GridSize, SNAKE_CAPACITY};

    #[test]
    fn total_cells_multiplies_dimensions() {
        let bounds = GridSize {
            width: 16,
            height: 8,
        };

        assert_eq!(bounds.total_cells(), 128);
    }

    #[test]
    fn capacity_leaves_room_for_the_apple() {
        // Apple placement resamples until it lands on a free cell, which
        // only terminates while at least one cell stays free.
        let bounds = GridSize {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
        };

        assert!(SNAKE_CAPACITY < bounds.total_cells());
    }
}
