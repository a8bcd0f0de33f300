//! Toroidal board geometry.
//!
//! Cells live in `0..width` × `0..height`; stepping off one edge re-enters
//! from the opposite edge.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::config::{GridSize, MIN_GRID_EDGE};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the top-left pixel of this cell on a screen of `cell_size`
    /// pixel cells.
    #[must_use]
    pub fn to_pixels(self, cell_size: u16) -> (i32, i32) {
        let size = i32::from(cell_size);
        (self.x * size, self.y * size)
    }

    /// Returns the cell containing the pixel `(px, py)`.
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is zero.
    #[must_use]
    pub fn from_pixels(px: i32, py: i32, cell_size: u16) -> Self {
        let size = i32::from(cell_size);
        Self {
            x: px.div_euclid(size),
            y: py.div_euclid(size),
        }
    }

    /// Returns this cell shifted by `(dx, dy)` without wrapping.
    #[must_use]
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Errors raised by board construction and cell sampling.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BoardError {
    /// Below this edge length the head can wrap onto the segments the
    /// self-collision check deliberately skips.
    #[error("board must be at least {min}x{min} cells, got {width}x{height}")]
    TooSmall { width: u16, height: u16, min: u16 },
    /// Every cell is excluded. The board is never meant to fill up, so this
    /// means state was corrupted upstream.
    #[error("no free cell left on the {width}x{height} board")]
    Exhausted { width: u16, height: u16 },
}

/// Fixed board dimensions plus wrap-around arithmetic.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BoardGeometry {
    size: GridSize,
}

impl BoardGeometry {
    /// Creates a board, refusing edges shorter than `MIN_GRID_EDGE`.
    pub fn new(size: GridSize) -> Result<Self, BoardError> {
        if size.width < MIN_GRID_EDGE || size.height < MIN_GRID_EDGE {
            return Err(BoardError::TooSmall {
                width: size.width,
                height: size.height,
                min: MIN_GRID_EDGE,
            });
        }

        Ok(Self { size })
    }

    #[must_use]
    pub fn size(self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn width(self) -> i32 {
        i32::from(self.size.width)
    }

    #[must_use]
    pub fn height(self) -> i32 {
        i32::from(self.size.height)
    }

    #[must_use]
    pub fn total_cells(self) -> usize {
        self.size.total_cells()
    }

    /// Cell the snake starts on after construction and after every reset.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell::new(self.width() / 2, self.height() / 2)
    }

    /// Returns true when the cell lies inside the board.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        (0..self.width()).contains(&cell.x) && (0..self.height()).contains(&cell.y)
    }

    /// Reduces both coordinates modulo the board dimensions.
    #[must_use]
    pub fn wrap(self, cell: Cell) -> Cell {
        Cell {
            x: cell.x.rem_euclid(self.width()),
            y: cell.y.rem_euclid(self.height()),
        }
    }

    /// Returns the neighbour of `cell` in `direction`, wrapped.
    #[must_use]
    pub fn step(self, cell: Cell, direction: Direction) -> Cell {
        self.wrap(cell.offset(direction.delta()))
    }

    /// Draws a cell uniformly from the cells not in `exclude`, retrying until
    /// one is free.
    pub fn random_cell<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        exclude: &HashSet<Cell>,
    ) -> Result<Cell, BoardError> {
        let blocked = exclude.iter().filter(|cell| self.contains(**cell)).count();
        if blocked >= self.total_cells() {
            return Err(BoardError::Exhausted {
                width: self.size.width,
                height: self.size.height,
            });
        }

        loop {
            let candidate = Cell {
                x: rng.gen_range(0..self.width()),
                y: rng.gen_range(0..self.height()),
            };
            if !exclude.contains(&candidate) {
                return Ok(candidate);
            }
        }
    }
}
