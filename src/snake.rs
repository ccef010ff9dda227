use std::collections::VecDeque;

use crate::config::{GridSize, SNAKE_CAPACITY};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring position one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Canonical movement directions on the 4-connected grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in fixed expansion order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the unit cell delta for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Outcome of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Advance {
    /// The snake moved; the new head position is included.
    Moved(Position),
    /// The step would have left the board or hit the body; nothing moved.
    Collided,
}

/// Snake body and heading, mutated once per tick.
///
/// Segments are stored head-first. While the game is running no two
/// segments overlap.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    vacated: Option<Position>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
            vacated: None,
        }
    }

    /// Creates the snake in its fixed starting pose: head at (3, 3) over a
    /// single tail segment, heading right.
    #[must_use]
    pub fn starting() -> Self {
        Self::from_segments(
            vec![Position { x: 3, y: 3 }, Position { x: 3, y: 2 }],
            Direction::Right,
        )
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Derives the heading for this tick from a planned route.
    ///
    /// The route starts at the head, so the first step away from it is the
    /// route's second cell. With no route, or a route already standing on
    /// its goal, the snake keeps its current heading and carries straight
    /// on. Steering by the second cell rather than re-deriving a move from
    /// the full route is long-standing behavior, kept as-is.
    #[must_use]
    pub fn direction_toward(&self, route: Option<&[Position]>) -> Direction {
        let Some(step) = route.and_then(|route| route.get(1)) else {
            return self.direction;
        };

        let head = self.head();
        match (step.x - head.x, step.y - head.y) {
            (0, -1) => Direction::Up,
            (0, 1) => Direction::Down,
            (-1, 0) => Direction::Left,
            (1, 0) => Direction::Right,
            _ => self.direction,
        }
    }

    /// Moves the snake one cell in `direction`.
    ///
    /// The move collides when the new head would leave the board or land on
    /// a segment that is still there after the step; the tail cell vacates
    /// as the head advances, so it does not block. A collided snake is left
    /// exactly as it was.
    pub fn advance(&mut self, direction: Direction, bounds: GridSize) -> Advance {
        let next = self.head().step(direction);

        if !next.is_within_bounds(bounds) || self.blocks_move(next) {
            return Advance::Collided;
        }

        self.direction = direction;
        self.body.push_front(next);
        self.vacated = self.body.pop_back();
        Advance::Moved(next)
    }

    /// Extends the body by one segment, restoring the tail cell vacated by
    /// the latest move. Growth saturates silently at capacity.
    pub fn grow(&mut self) {
        if self.body.len() >= SNAKE_CAPACITY {
            return;
        }

        if let Some(tail) = self.vacated.take() {
            self.body.push_back(tail);
        }
    }

    fn blocks_move(&self, position: Position) -> bool {
        let tail_index = self.body.len() - 1;
        self.body
            .iter()
            .enumerate()
            .any(|(index, segment)| *segment == position && index != tail_index)
    }
}
