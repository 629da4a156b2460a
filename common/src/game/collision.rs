use super::grid::Grid;
use super::snake::Snake;
use super::types::{Cell, Direction, LossReason, TailRule};

/// Where the head lands this tick, or why it cannot. The body is evaluated
/// pre-move; under `TailRule::Blocks` even the cell the tail is about to
/// vacate counts as occupied.
pub fn calculate_next_head(
    grid: &Grid,
    snake: &Snake,
    tail_rule: TailRule,
) -> Result<Cell, LossReason> {
    let head = snake.head();

    let next_head = match snake.direction {
        Direction::Up => {
            if head.y == 0 {
                return Err(LossReason::WallCollision);
            }
            Cell::new(head.x, head.y - 1)
        }
        Direction::Down => {
            if head.y >= grid.height - 1 {
                return Err(LossReason::WallCollision);
            }
            Cell::new(head.x, head.y + 1)
        }
        Direction::Left => {
            if head.x == 0 {
                return Err(LossReason::WallCollision);
            }
            Cell::new(head.x - 1, head.y)
        }
        Direction::Right => {
            if head.x >= grid.width - 1 {
                return Err(LossReason::WallCollision);
            }
            Cell::new(head.x + 1, head.y)
        }
    };

    let blocked = match tail_rule {
        TailRule::Blocks => snake.occupies(&next_head),
        TailRule::Vacates => snake.occupies(&next_head) && next_head != snake.tail(),
    };
    if blocked {
        return Err(LossReason::SelfCollision);
    }

    Ok(next_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_with_body(cells: &[(usize, usize)], direction: Direction) -> Snake {
        let (first, rest) = cells.split_first().expect("body must not be empty");
        let mut snake = Snake::new(Cell::new(first.0, first.1), direction);
        for &(x, y) in rest {
            snake.body.push_back(Cell::new(x, y));
            snake.body_set.insert(Cell::new(x, y));
        }
        snake
    }

    #[test]
    fn test_step_up_decrements_y() {
        let grid = Grid::new(20, 20);
        let snake = snake_with_body(&[(10, 10)], Direction::Up);
        let next = calculate_next_head(&grid, &snake, TailRule::Blocks);
        assert_eq!(next, Ok(Cell::new(10, 9)));
    }

    #[test]
    fn test_left_at_west_edge_is_wall() {
        let grid = Grid::new(20, 20);
        let snake = snake_with_body(&[(0, 5)], Direction::Left);
        let next = calculate_next_head(&grid, &snake, TailRule::Blocks);
        assert_eq!(next, Err(LossReason::WallCollision));
    }

    #[test]
    fn test_every_edge_is_a_wall() {
        let grid = Grid::new(10, 10);

        let up = snake_with_body(&[(4, 0)], Direction::Up);
        assert_eq!(
            calculate_next_head(&grid, &up, TailRule::Blocks),
            Err(LossReason::WallCollision)
        );

        let down = snake_with_body(&[(4, 9)], Direction::Down);
        assert_eq!(
            calculate_next_head(&grid, &down, TailRule::Blocks),
            Err(LossReason::WallCollision)
        );

        let right = snake_with_body(&[(9, 4)], Direction::Right);
        assert_eq!(
            calculate_next_head(&grid, &right, TailRule::Blocks),
            Err(LossReason::WallCollision)
        );
    }

    #[test]
    fn test_body_cell_is_self_collision() {
        let grid = Grid::new(20, 20);
        // Hook shape: turning right into the neck.
        let snake = snake_with_body(&[(5, 5), (5, 6), (6, 6), (6, 5)], Direction::Down);
        let next = calculate_next_head(&grid, &snake, TailRule::Blocks);
        assert_eq!(next, Err(LossReason::SelfCollision));
    }

    #[test]
    fn test_tail_cell_blocks_by_default() {
        let grid = Grid::new(20, 20);
        // Square loop: the head's next cell is the current tail.
        let snake = snake_with_body(&[(5, 5), (5, 6), (6, 6), (6, 5)], Direction::Right);
        let next = calculate_next_head(&grid, &snake, TailRule::Blocks);
        assert_eq!(next, Err(LossReason::SelfCollision));
    }

    #[test]
    fn test_tail_cell_is_free_under_vacates_rule() {
        let grid = Grid::new(20, 20);
        let snake = snake_with_body(&[(5, 5), (5, 6), (6, 6), (6, 5)], Direction::Right);
        let next = calculate_next_head(&grid, &snake, TailRule::Vacates);
        assert_eq!(next, Ok(Cell::new(6, 5)));
    }

    #[test]
    fn test_free_cell_is_no_collision() {
        let grid = Grid::new(20, 20);
        let snake = snake_with_body(&[(5, 5), (5, 6), (5, 7)], Direction::Up);
        let next = calculate_next_head(&grid, &snake, TailRule::Blocks);
        assert_eq!(next, Ok(Cell::new(5, 4)));
    }
}
