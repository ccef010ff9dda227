//! Board occupancy queries.

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Returns true when `position` is on the board and not covered by the
/// snake. This is the validity test shared by route planning and apple
/// placement.
#[must_use]
pub fn is_free(position: Position, bounds: GridSize, snake: &Snake) -> bool {
    position.is_within_bounds(bounds) && !snake.occupies(position)
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::snake::{Direction, Position, Snake};

    use super::is_free;

    #[test]
    fn free_cell_is_reported_free() {
        let bounds = GridSize {
            width: 16,
            height: 8,
        };
        let snake = Snake::starting();

        assert!(is_free(Position { x: 5, y: 5 }, bounds, &snake));
    }

    #[test]
    fn snake_cells_and_out_of_bounds_are_not_free() {
        let bounds = GridSize {
            width: 16,
            height: 8,
        };
        let snake = Snake::from_segments(
            vec![Position { x: 2, y: 2 }, Position { x: 2, y: 1 }],
            Direction::Down,
        );

        assert!(!is_free(Position { x: 2, y: 2 }, bounds, &snake));
        assert!(!is_free(Position { x: 2, y: 1 }, bounds, &snake));
        assert!(!is_free(Position { x: -1, y: 0 }, bounds, &snake));
        assert!(!is_free(Position { x: 16, y: 0 }, bounds, &snake));
        assert!(!is_free(Position { x: 0, y: 8 }, bounds, &snake));
    }
}
