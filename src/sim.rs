//! Headless autopilot runs on a synthetic clock.
//!
//! Useful for watching how the planner behaves over many games without a
//! terminal: the simulator steps the controller tick by tick, advancing a
//! millisecond counter by the current tick interval, and tallies the run.

use serde::Serialize;

use crate::config::{GRID_HEIGHT, GRID_WIDTH, GridSize};
use crate::game::{GameState, GameStatus};

/// Aggregate outcome of a headless run, printed as JSON by the binary.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct RunSummary {
    /// Controller steps executed.
    pub ticks: u64,
    /// Games ended by a collision during the run.
    pub games_played: u32,
    /// Apples eaten across all games.
    pub food_eaten: u32,
    /// Highest score reached in any single game.
    pub best_score: u32,
    /// Score of the game in progress when the run stopped.
    pub final_score: u32,
}

/// Runs the autopilot for `ticks` steps on the fixed board and returns the
/// tally. The same seed always produces the same summary.
#[must_use]
pub fn simulate(seed: u64, ticks: u64) -> RunSummary {
    let bounds = GridSize {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
    };
    let mut state = GameState::new_with_seed(bounds, seed);

    let mut now_ms: u64 = 0;
    let mut games_played = 0;
    let mut food_eaten = 0;
    let mut best_score = 0;

    for _ in 0..ticks {
        now_ms += u64::try_from(state.tick_interval().as_millis()).unwrap_or(u64::MAX);

        let was_playing = state.status == GameStatus::Playing;
        let score_before = state.score;

        state.step(now_ms);

        food_eaten += state.score.saturating_sub(score_before);
        best_score = best_score.max(state.score);
        if was_playing && state.status == GameStatus::GameOver {
            games_played += 1;
        }
    }

    RunSummary {
        ticks,
        games_played,
        food_eaten,
        best_score,
        final_score: state.score,
    }
}
