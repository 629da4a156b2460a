use std::collections::{HashSet, VecDeque};

use super::types::{Cell, Direction};

/// Snake body with head at the front. `body_set` mirrors `body` for O(1)
/// occupancy checks; the two must never disagree.
#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Cell>,
    pub body_set: HashSet<Cell>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    /// A new snake is a single segment; it grows by eating.
    pub fn new(start: Cell, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        body.push_back(start);
        body_set.insert(start);

        Self {
            body,
            body_set,
            direction,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, cell: &Cell) -> bool {
        self.body_set.contains(cell)
    }

    /// Buffers a turn for the next tick. A reversal of the current heading
    /// is rejected; later valid turns overwrite earlier ones.
    pub fn buffer_turn(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Consumes the buffered turn, if any. Called exactly once per tick.
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Growth move: the head advances and the tail stays.
    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
        self.body_set.insert(cell);
    }

    /// Plain move: tail leaves before the head lands, so stepping into the
    /// just-vacated tail cell keeps `body_set` exact.
    pub fn step_to(&mut self, cell: Cell) {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
        self.body.push_front(cell);
        self.body_set.insert(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_is_one_segment() {
        let snake = Snake::new(Cell::new(10, 10), Direction::Up);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(10, 10));
        assert_eq!(snake.tail(), Cell::new(10, 10));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Up);
        snake.buffer_turn(Direction::Down);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_last_valid_turn_wins() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Up);
        snake.buffer_turn(Direction::Left);
        snake.buffer_turn(Direction::Right);
        assert_eq!(snake.pending_direction, Some(Direction::Right));

        snake.apply_pending_direction();
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_reversal_after_valid_turn_is_still_rejected() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Up);
        snake.buffer_turn(Direction::Left);
        // Down reverses the heading in use this tick, not the buffered one.
        snake.buffer_turn(Direction::Down);
        assert_eq!(snake.pending_direction, Some(Direction::Left));
    }

    #[test]
    fn test_step_keeps_length_and_set() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Up);
        snake.push_head(Cell::new(5, 4));
        snake.push_head(Cell::new(5, 3));

        snake.step_to(Cell::new(5, 2));
        assert_eq!(snake.len(), 3);
        assert!(snake.occupies(&Cell::new(5, 2)));
        assert!(!snake.occupies(&Cell::new(5, 5)));
        assert_eq!(snake.body_set.len(), snake.body.len());
    }

    #[test]
    fn test_step_into_vacated_tail_cell() {
        // 2x2 loop: head chases its own tail.
        let mut snake = Snake::new(Cell::new(0, 0), Direction::Up);
        snake.push_head(Cell::new(1, 0));
        snake.push_head(Cell::new(1, 1));
        snake.push_head(Cell::new(0, 1));

        snake.step_to(Cell::new(0, 0));
        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(&Cell::new(0, 0)));
        assert_eq!(snake.body_set.len(), snake.body.len());
    }
}
