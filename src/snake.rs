use std::collections::VecDeque;

use crate::board::{BoardGeometry, Cell};
use crate::config::MIN_GRID_EDGE;
use crate::input::{Direction, direction_change_is_valid};

/// Segments nearest the head that the head may overlap without counting as
/// a self-collision.
pub const SELF_COLLISION_GRACE: usize = 4;

const _: () = assert!(MIN_GRID_EDGE as usize >= SELF_COLLISION_GRACE);

/// Direction a fresh or reset snake moves in.
pub const START_HEADING: Direction = Direction::Right;

/// Snake body plus heading and a single-slot turn buffer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SnakeState {
    body: VecDeque<Cell>,
    heading: Direction,
    pending_heading: Option<Direction>,
}

impl SnakeState {
    /// Creates a one-cell snake at the board center heading right.
    #[must_use]
    pub fn new(board: BoardGeometry) -> Self {
        Self::at(board.center(), START_HEADING)
    }

    /// Creates a one-cell snake at `start` with the provided heading.
    #[must_use]
    pub fn at(start: Cell, heading: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            heading,
            pending_heading: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, heading: Direction) -> Self {
        assert!(!segments.is_empty(), "snake body needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            heading,
            pending_heading: None,
        }
    }

    /// Buffers `direction` for the next tick, overwriting any earlier turn.
    ///
    /// A reversal of the current heading is ignored.
    pub fn turn(&mut self, direction: Direction) {
        if direction_change_is_valid(self.heading, direction) {
            self.pending_heading = Some(direction);
        }
    }

    /// Returns the head the next step would produce, without moving.
    #[must_use]
    pub fn peek_head(&self, board: BoardGeometry) -> Cell {
        board.step(self.head(), self.next_heading())
    }

    /// Moves one cell forward, keeping the length. Returns the new head.
    pub fn advance(&mut self, board: BoardGeometry) -> Cell {
        self.step(board, false)
    }

    /// Moves one cell forward and keeps the tail, growing by one segment.
    /// Returns the new head.
    pub fn grow(&mut self, board: BoardGeometry) -> Cell {
        self.step(board, true)
    }

    fn step(&mut self, board: BoardGeometry, keep_tail: bool) -> Cell {
        if let Some(next) = self.pending_heading.take() {
            self.heading = next;
        }

        let next_head = board.step(self.head(), self.heading);
        self.body.push_front(next_head);
        if !keep_tail {
            let _ = self.body.pop_back();
        }

        next_head
    }

    /// Returns true if the head sits on a segment outside the grace zone.
    #[must_use]
    pub fn is_self_collision(&self) -> bool {
        let head = self.head();
        self.body
            .iter()
            .skip(SELF_COLLISION_GRACE)
            .any(|segment| *segment == head)
    }

    /// Shrinks back to a single cell at the board center heading right.
    pub fn reset(&mut self, board: BoardGeometry) {
        *self = Self::new(board);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
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

    /// Heading used by the most recent step.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    #[must_use]
    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending_heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    fn next_heading(&self) -> Direction {
        self.pending_heading.unwrap_or(self.heading)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{BoardGeometry, Cell};
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::SnakeState;

    fn board() -> BoardGeometry {
        BoardGeometry::new(GridSize {
            width: 32,
            height: 24,
        })
        .expect("test board should be valid")
    }

    #[test]
    fn new_snake_starts_centered_heading_right() {
        let snake = SnakeState::new(board());

        assert_eq!(snake.head(), Cell::new(16, 12));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.heading(), Direction::Right);
        assert_eq!(snake.pending_heading(), None);
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = SnakeState::at(Cell::new(5, 5), Direction::Right);

        let head = snake.advance(board());

        assert_eq!(head, Cell::new(6, 5));
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_wraps_at_left_edge() {
        let mut snake = SnakeState::at(Cell::new(0, 7), Direction::Left);

        assert_eq!(snake.advance(board()), Cell::new(31, 7));
    }

    #[test]
    fn grow_keeps_previous_tail() {
        let mut snake = SnakeState::at(Cell::new(5, 5), Direction::Right);

        snake.grow(board());

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.tail(), Cell::new(5, 5));
    }

    #[test]
    fn turn_rejects_reverse() {
        let mut snake = SnakeState::at(Cell::new(5, 5), Direction::Up);

        snake.turn(Direction::Down);
        assert_eq!(snake.pending_heading(), None);

        snake.advance(board());
        assert_eq!(snake.head(), Cell::new(5, 4));
    }

    #[test]
    fn turn_accepts_perpendicular_and_applies_on_next_step() {
        let mut snake = SnakeState::at(Cell::new(5, 5), Direction::Right);

        snake.turn(Direction::Down);
        assert_eq!(snake.pending_heading(), Some(Direction::Down));
        assert_eq!(snake.heading(), Direction::Right);

        snake.advance(board());
        assert_eq!(snake.head(), Cell::new(5, 6));
        assert_eq!(snake.heading(), Direction::Down);
        assert_eq!(snake.pending_heading(), None);
    }

    #[test]
    fn later_turn_overwrites_earlier_one() {
        let mut snake = SnakeState::at(Cell::new(5, 5), Direction::Right);

        snake.turn(Direction::Up);
        snake.turn(Direction::Down);
        snake.advance(board());

        assert_eq!(snake.head(), Cell::new(5, 6));
    }

    #[test]
    fn reversal_is_judged_against_heading_not_pending_turn() {
        let mut snake = SnakeState::at(Cell::new(5, 5), Direction::Right);

        // Up is buffered; Left still reverses the current heading.
        snake.turn(Direction::Up);
        snake.turn(Direction::Left);

        assert_eq!(snake.pending_heading(), Some(Direction::Up));
    }

    #[test]
    fn repeated_turn_is_idempotent() {
        let mut once = SnakeState::at(Cell::new(5, 5), Direction::Right);
        let mut twice = once.clone();

        once.turn(Direction::Up);
        twice.turn(Direction::Up);
        twice.turn(Direction::Up);

        assert_eq!(once, twice);
    }

    #[test]
    fn peek_head_does_not_mutate() {
        let mut snake = SnakeState::at(Cell::new(5, 5), Direction::Right);
        snake.turn(Direction::Up);

        let before = snake.clone();
        assert_eq!(snake.peek_head(board()), Cell::new(5, 4));
        assert_eq!(snake, before);
    }

    #[test]
    fn head_on_body_index_five_is_a_collision() {
        let snake = SnakeState::from_segments(
            vec![
                Cell::new(2, 2),
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 3),
                Cell::new(1, 3),
                Cell::new(2, 2),
            ],
            Direction::Up,
        );

        assert!(snake.is_self_collision());
    }

    #[test]
    fn head_on_body_index_three_is_within_grace() {
        let snake = SnakeState::from_segments(
            vec![
                Cell::new(2, 2),
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 2),
                Cell::new(1, 2),
                Cell::new(0, 2),
            ],
            Direction::Up,
        );

        assert!(!snake.is_self_collision());
    }

    #[test]
    fn reset_restores_single_centered_cell() {
        let mut snake = SnakeState::from_segments(
            vec![Cell::new(1, 1), Cell::new(2, 1), Cell::new(3, 1)],
            Direction::Left,
        );
        snake.turn(Direction::Up);

        snake.reset(board());

        assert_eq!(snake, SnakeState::new(board()));
    }
}
