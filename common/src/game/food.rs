use super::grid::Grid;
use super::session_rng::SessionRng;
use super::snake::Snake;
use super::types::{Cell, FoodKind};

const SPAWN_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
    pub kind: FoodKind,
}

impl Food {
    /// Places food on a cell the snake does not occupy, with a random
    /// category. Random sampling is tried first; once the board gets
    /// crowded a scan over the remaining free cells settles it. `None`
    /// only when the snake covers the whole board.
    pub fn spawn(grid: &Grid, snake: &Snake, rng: &mut SessionRng) -> Option<Food> {
        let kind = FoodKind::ALL[rng.random_range(0..FoodKind::ALL.len())];

        for _ in 0..SPAWN_ATTEMPTS {
            let cell = grid.random_cell(rng);
            if !snake.occupies(&cell) {
                return Some(Food { cell, kind });
            }
        }

        let free: Vec<Cell> = (0..grid.height)
            .flat_map(|y| (0..grid.width).map(move |x| Cell::new(x, y)))
            .filter(|cell| !snake.occupies(cell))
            .collect();

        if free.is_empty() {
            return None;
        }

        let cell = free[rng.random_range(0..free.len())];
        Some(Food { cell, kind })
    }
}
