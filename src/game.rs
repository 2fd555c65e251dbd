use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GridSize;
use crate::food::{self, Food};
use crate::input::{Delta, filter_steer, vertical_priority};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// Waiting for the first directional input after a reset.
    Idle,
    Playing,
    /// Terminal until a reset: the board filled up.
    Won,
    /// Terminal until a reset: wall or self collision.
    Lost,
}

/// Complete mutable game state for one session.
///
/// Owned exclusively by the surrounding loop and advanced one `tick` at a
/// time; the core never blocks or polls, it only consumes the elapsed time
/// and the directional sample handed to each call.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    /// `None` exactly when placement exhausted its budget (board full).
    pub food: Option<Food>,
    pub score: u32,
    pub status: GameStatus,
    direction: Delta,
    buffered: Delta,
    move_timer: f32,
    move_interval: f32,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize, move_interval_secs: f32) -> Self {
        Self::from_rng(bounds, move_interval_secs, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, move_interval_secs: f32, seed: u64) -> Self {
        Self::from_rng(bounds, move_interval_secs, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: GridSize, move_interval_secs: f32, rng: StdRng) -> Self {
        let mut state = Self {
            snake: Snake::new(Position { x: 0, y: 0 }),
            food: None,
            score: 0,
            status: GameStatus::Idle,
            direction: Delta::ZERO,
            buffered: Delta::ZERO,
            move_timer: 0.0,
            move_interval: move_interval_secs,
            bounds,
            rng,
        };
        state.reset();
        state
    }

    /// Restarts the session in place.
    ///
    /// New one-cell snake at a random cell, fresh food, zero score, timer
    /// cleared, status back to [`GameStatus::Idle`].
    pub fn reset(&mut self) {
        self.snake = Snake::new(food::random_cell(&mut self.rng, self.bounds));
        self.food = Food::place(&mut self.rng, self.bounds, &self.snake);
        self.score = 0;
        self.status = GameStatus::Idle;
        self.direction = Delta::ZERO;
        self.buffered = Delta::ZERO;
        self.move_timer = 0.0;
    }

    /// Returns the immutable board bounds.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Advances the session by one frame.
    ///
    /// `elapsed_secs` is wall-clock time since the previous call; `steer`
    /// is this frame's raw directional sample. The snake moves at most one
    /// cell per call, gated by the move timer; won and lost sessions stay
    /// inert until [`GameState::reset`].
    pub fn tick(&mut self, elapsed_secs: f32, steer: Delta) {
        match self.status {
            GameStatus::Idle => self.try_start(steer),
            GameStatus::Playing => self.tick_playing(elapsed_secs, steer),
            GameStatus::Won | GameStatus::Lost => {}
        }
    }

    /// Leaves `Idle` on the first usable directional sample.
    ///
    /// The sample becomes both the buffered and the active direction, so
    /// the first in-game sample is already filtered against a non-zero
    /// current direction.
    fn try_start(&mut self, steer: Delta) {
        let steer = vertical_priority(steer);
        if steer.is_zero() {
            return;
        }

        self.buffered = steer;
        self.direction = steer;
        self.status = GameStatus::Playing;
    }

    fn tick_playing(&mut self, elapsed_secs: f32, steer: Delta) {
        let steer = filter_steer(steer, self.direction);
        if !steer.is_zero() {
            self.buffered = steer;
        }

        self.move_timer -= elapsed_secs;
        if self.move_timer > 0.0 {
            return;
        }

        if !self.buffered.is_zero() {
            self.direction = self.buffered;
            self.buffered = Delta::ZERO;
        }

        let new_head = self.snake.head().stepped(self.direction);
        let ate = self.food.is_some_and(|food| food.position == new_head);

        self.snake.advance(new_head, ate);

        let mut board_full = false;
        if ate {
            self.score += 1;
            self.food = Food::place(&mut self.rng, self.bounds, &self.snake);
            board_full = self.food.is_none();
        }

        // Keep the fractional leftover instead of resetting, so the move
        // cadence does not drift with the frame rate.
        self.move_timer += self.move_interval;

        if !new_head.is_within_bounds(self.bounds) || self.snake.head_overlaps_body() {
            self.status = GameStatus::Lost;
        } else if board_full {
            self.status = GameStatus::Won;
        }
    }
}
