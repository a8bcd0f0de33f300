use std::collections::HashSet;

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::{BoardError, BoardGeometry, Cell};
use crate::food::FoodState;
use crate::input::Direction;
use crate::snake::SnakeState;

/// What one tick changed, for the renderer and the score display.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickResult {
    /// Number of this tick, starting at 1.
    pub tick: u64,
    pub ate: bool,
    pub collided: bool,
    pub score: u32,
    /// Head after the tick; the board center after a reset.
    pub head: Cell,
    /// Tail cell freed by a plain move. `None` on growth or reset.
    pub vacated: Option<Cell>,
}

impl TickResult {
    /// True when the board changed beyond the head/tail delta.
    #[must_use]
    pub fn needs_full_redraw(&self) -> bool {
        self.collided
    }
}

/// Complete mutable game state for one session.
///
/// There is no paused or game-over state: a collision resets the snake
/// within the same tick.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub snake: SnakeState,
    pub food: FoodState,
    pub score: u32,
    pub tick_count: u64,
    /// Self-collisions since the engine was created.
    pub resets: u64,
    board: BoardGeometry,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an engine seeded from system entropy.
    pub fn new(board: BoardGeometry) -> Result<Self, BoardError> {
        Self::with_rng(board, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible runs.
    pub fn new_with_seed(board: BoardGeometry, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(board, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: BoardGeometry, mut rng: StdRng) -> Result<Self, BoardError> {
        let snake = SnakeState::new(board);
        let food = FoodState::spawn(&mut rng, board, &occupied_cells(&snake))?;

        Ok(Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            resets: 0,
            board,
            rng,
        })
    }

    #[must_use]
    pub fn board(&self) -> BoardGeometry {
        self.board
    }

    /// Buffers a turn for the next tick.
    pub fn turn(&mut self, direction: Direction) {
        self.snake.turn(direction);
    }

    /// Advances the simulation by one step.
    ///
    /// Fails only when food cannot be placed because the snake covers the
    /// whole board.
    pub fn tick(&mut self) -> Result<TickResult, BoardError> {
        self.tick_count += 1;

        let candidate = self.snake.peek_head(self.board);
        if candidate == self.food.position {
            let head = self.snake.grow(self.board);
            self.score += 1;
            self.relocate_food()?;
            debug!(
                "tick {}: ate at ({}, {}), score {}, length {}",
                self.tick_count,
                head.x,
                head.y,
                self.score,
                self.snake.len()
            );

            return Ok(self.result(true, false, head, None));
        }

        let tail = self.snake.tail();
        let head = self.snake.advance(self.board);
        if self.snake.is_self_collision() {
            debug!(
                "tick {}: self-collision at ({}, {}) with length {}, resetting",
                self.tick_count,
                head.x,
                head.y,
                self.snake.len()
            );
            self.snake.reset(self.board);
            self.score = 0;
            self.resets += 1;
            self.relocate_food()?;

            return Ok(self.result(false, true, self.snake.head(), None));
        }

        // Chasing its own tail, the head moves onto the cell the tail just left.
        let vacated = (tail != head).then_some(tail);
        Ok(self.result(false, false, head, vacated))
    }

    fn relocate_food(&mut self) -> Result<(), BoardError> {
        let occupied = occupied_cells(&self.snake);
        self.food
            .relocate(&mut self.rng, self.board, &occupied)
            .inspect_err(|error| warn!("food relocation failed: {error}"))
    }

    fn result(&self, ate: bool, collided: bool, head: Cell, vacated: Option<Cell>) -> TickResult {
        TickResult {
            tick: self.tick_count,
            ate,
            collided,
            score: self.score,
            head,
            vacated,
        }
    }
}

fn occupied_cells(snake: &SnakeState) -> HashSet<Cell> {
    snake.segments().copied().collect()
}
