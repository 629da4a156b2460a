use super::session_rng::SessionRng;
use super::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Uniform over all cells of the board.
    pub fn random_cell(&self, rng: &mut SessionRng) -> Cell {
        let x = rng.random_range(0..self.width);
        let y = rng.random_range(0..self.height);
        Cell::new(x, y)
    }
}
