use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    GridSize, INITIAL_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, RESTART_DELAY_MS,
    TICK_INTERVAL_DIVISOR,
};
use crate::food::Food;
use crate::grid;
use crate::path;
use crate::snake::{Advance, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Complete mutable game state for one session.
///
/// The caller owns timing: it passes a monotonic millisecond reading into
/// [`GameState::step`] once per elapsed tick interval, and this type does
/// the rest — route planning, movement, scoring, speed-up, and the
/// game-over/restart cycle.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    /// Difficulty tier; reset with the game but not yet driven by play.
    pub level: u32,
    pub tick_interval_ms: f32,
    pub status: GameStatus,
    game_over_at_ms: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a state with entropy-seeded apple placement.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::starting();
        let food = Food::spawn(&mut rng, bounds, &snake);

        Self {
            snake,
            food,
            score: 0,
            level: 1,
            tick_interval_ms: INITIAL_TICK_INTERVAL_MS,
            status: GameStatus::Playing,
            game_over_at_ms: 0,
            bounds,
            rng,
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the current tick interval as a duration.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f32(self.tick_interval_ms / 1000.0)
    }

    /// Advances the game by one step at clock reading `now_ms`.
    ///
    /// While playing this runs one gameplay tick. After a collision it
    /// idles on the game-over screen until the restart delay has elapsed,
    /// then starts a fresh game.
    pub fn step(&mut self, now_ms: u64) {
        match self.status {
            GameStatus::Playing => self.tick(now_ms),
            GameStatus::GameOver => {
                if now_ms.saturating_sub(self.game_over_at_ms) >= RESTART_DELAY_MS {
                    self.reset();
                }
            }
        }
    }

    /// Restores the fixed starting configuration and resumes play.
    pub fn reset(&mut self) {
        self.snake = Snake::starting();
        self.food = Food::spawn(&mut self.rng, self.bounds, &self.snake);
        self.score = 0;
        self.level = 1;
        self.tick_interval_ms = INITIAL_TICK_INTERVAL_MS;
        self.status = GameStatus::Playing;
    }

    fn tick(&mut self, now_ms: u64) {
        // Plan against a snapshot of the current occupancy; nothing moves
        // while the search runs.
        let route = path::find_route(self.snake.head(), self.food.position, self.bounds, |cell| {
            grid::is_free(cell, self.bounds, &self.snake)
        });
        // With no route (the body can wall the apple off) the snake keeps
        // its heading and carries on; whatever follows is regular play.
        let direction = self.snake.direction_toward(route.as_deref());

        match self.snake.advance(direction, self.bounds) {
            Advance::Collided => {
                self.status = GameStatus::GameOver;
                self.game_over_at_ms = now_ms;
            }
            Advance::Moved(head) => {
                if head == self.food.position {
                    self.eat();
                }
            }
        }
    }

    fn eat(&mut self) {
        self.snake.grow();
        self.score += 1;
        self.tick_interval_ms =
            (self.tick_interval_ms / TICK_INTERVAL_DIVISOR).max(MIN_TICK_INTERVAL_MS);
        self.food = Food::spawn(&mut self.rng, self.bounds, &self.snake);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{
        GridSize, INITIAL_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, RESTART_DELAY_MS,
    };
    use crate::food::Food;
    use crate::grid;
    use crate::snake::{Direction, Position, Snake};

    use super::{GameState, GameStatus};

    fn bounds() -> GridSize {
        GridSize {
            width: 16,
            height: 8,
        }
    }

    #[test]
    fn snake_steers_itself_onto_the_apple() {
        let mut state = GameState::new_with_seed(bounds(), 1);
        state.food = Food::at(Position { x: 5, y: 3 });

        state.step(0);
        assert_eq!(state.snake.head(), Position { x: 4, y: 3 });
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 2);

        state.step(500);
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn eating_shrinks_the_tick_interval_to_its_floor() {
        let mut state = GameState::new_with_seed(bounds(), 2);
        state.snake = Snake::from_segments(
            vec![Position { x: 0, y: 0 }, Position { x: 0, y: 1 }],
            Direction::Right,
        );
        state.food = Food::at(Position { x: 1, y: 0 });

        state.step(0);

        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 3);
        // 500 / 5, still above the floor.
        assert!((state.tick_interval_ms - 100.0).abs() < f32::EPSILON);

        // Two more pickups pin the interval at the minimum.
        for _ in 0..2 {
            let ahead = state.snake.head().step(state.snake.direction());
            state.food = Food::at(ahead);
            state.step(0);
        }

        assert!((state.tick_interval_ms - MIN_TICK_INTERVAL_MS).abs() < f32::EPSILON);
    }

    #[test]
    fn new_apple_lands_on_a_free_cell_after_growth() {
        let mut state = GameState::new_with_seed(bounds(), 3);
        state.food = Food::at(Position { x: 4, y: 3 });

        state.step(0);

        assert_eq!(state.score, 1);
        assert!(grid::is_free(state.food.position, bounds(), &state.snake));
    }

    /// State whose next tick must crash into the right wall: the head faces
    /// the wall at (15,0) and the body fences the corner apple off, so the
    /// planner finds no route and the fallback keeps the snake heading
    /// right.
    fn doomed_state(seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(bounds(), seed);

        let mut segments: Vec<Position> = (2..=15)
            .rev()
            .map(|x| Position { x, y: 0 })
            .collect();
        segments.push(Position { x: 1, y: 0 });
        segments.push(Position { x: 1, y: 1 });
        segments.push(Position { x: 0, y: 1 });

        state.snake = Snake::from_segments(segments, Direction::Right);
        state.food = Food::at(Position { x: 0, y: 0 });
        state
    }

    #[test]
    fn wall_collision_ends_the_game_and_freezes_the_body() {
        let mut state = doomed_state(4);
        let before: Vec<Position> = state.snake.segments().copied().collect();

        state.step(1234);

        assert_eq!(state.status, GameStatus::GameOver);
        let after: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(before, after);
        assert_eq!(state.food.position, Position { x: 0, y: 0 });
    }

    #[test]
    fn unreachable_apple_keeps_the_snake_on_its_heading() {
        let mut state = GameState::new_with_seed(bounds(), 5);
        // The body fences the corner apple off; the head is elsewhere.
        state.snake = Snake::from_segments(
            vec![
                Position { x: 3, y: 0 },
                Position { x: 2, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
                Position { x: 0, y: 1 },
            ],
            Direction::Right,
        );
        state.food = Food::at(Position { x: 0, y: 0 });

        state.step(0);

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.snake.head(), Position { x: 4, y: 0 });
        assert_eq!(state.score, 0);
        assert_eq!(state.food.position, Position { x: 0, y: 0 });
    }

    #[test]
    fn game_restarts_after_the_delay() {
        let mut state = doomed_state(6);

        state.step(2000);
        assert_eq!(state.status, GameStatus::GameOver);

        // Before the delay runs out nothing changes.
        state.step(2000 + RESTART_DELAY_MS - 1);
        assert_eq!(state.status, GameStatus::GameOver);

        state.step(2000 + RESTART_DELAY_MS);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.head(), Position { x: 3, y: 3 });
        assert_eq!(state.snake.direction(), Direction::Right);
        assert!((state.tick_interval_ms - INITIAL_TICK_INTERVAL_MS).abs() < f32::EPSILON);
        assert!(grid::is_free(state.food.position, bounds(), &state.snake));
    }
}
