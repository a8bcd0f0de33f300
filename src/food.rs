use std::collections::HashSet;

use rand::Rng;

use crate::board::{BoardError, BoardGeometry, Cell};

/// Food item currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodState {
    pub position: Cell,
}

impl FoodState {
    /// Places food at a fixed cell.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Spawns food on a random cell outside `exclude`.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        board: BoardGeometry,
        exclude: &HashSet<Cell>,
    ) -> Result<Self, BoardError> {
        board.random_cell(rng, exclude).map(Self::at)
    }

    /// Moves the food to a random cell outside `exclude`.
    ///
    /// On error the previous position is kept.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: BoardGeometry,
        exclude: &HashSet<Cell>,
    ) -> Result<(), BoardError> {
        self.position = board.random_cell(rng, exclude)?;
        Ok(())
    }
}
