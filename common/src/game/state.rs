use crate::log;

use super::collision::calculate_next_head;
use super::food::Food;
use super::grid::Grid;
use super::score::ScoreBoard;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Cell, Direction, FoodKind, GameOutcome, SessionStatus, TailRule, WinReason};

/// What happened during one tick, for the render sink and the event feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    FoodCollected {
        kind: FoodKind,
        points: u32,
        cell: Cell,
    },
    FoodSpawned {
        kind: FoodKind,
        cell: Cell,
    },
    SessionEnded {
        outcome: GameOutcome,
    },
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Food,
    pub score: ScoreBoard,
    pub status: SessionStatus,
    pub tail_rule: TailRule,
}

impl GameState {
    pub fn new(settings: &GameSettings, rng: &mut SessionRng) -> Self {
        let grid = Grid::new(settings.field_width, settings.field_height);
        let snake = Snake::new(grid.center(), Direction::Up);
        let food = Food::spawn(&grid, &snake, rng)
            .expect("A fresh board always has a free cell for food");

        Self {
            grid,
            snake,
            food,
            score: ScoreBoard::new(settings.target_score),
            status: SessionStatus::NotStarted,
            tail_rule: settings.tail_rule,
        }
    }

    pub fn start(&mut self) {
        if self.status == SessionStatus::NotStarted {
            self.status = SessionStatus::Running;
        }
    }

    /// Fresh snake, food and score on the same board; the session goes
    /// straight back to Running.
    pub fn restart(&mut self, rng: &mut SessionRng) {
        self.snake = Snake::new(self.grid.center(), Direction::Up);
        self.food = Food::spawn(&self.grid, &self.snake, rng)
            .expect("A fresh board always has a free cell for food");
        self.score.reset();
        self.status = SessionStatus::Running;
    }

    /// Buffers a turn for the next tick. Ignored unless the session is
    /// running; reversals are rejected against the current heading.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.status.is_running() {
            self.snake.buffer_turn(direction);
        }
    }

    /// One simulation tick. On a terminal or not-yet-started session this
    /// is a no-op: the board stays frozen.
    pub fn step(&mut self, rng: &mut SessionRng) -> Vec<TickEvent> {
        if !self.status.is_running() {
            return Vec::new();
        }

        let mut events = Vec::new();
        self.snake.apply_pending_direction();

        let next_head = match calculate_next_head(&self.grid, &self.snake, self.tail_rule) {
            Ok(cell) => cell,
            Err(reason) => {
                let outcome = GameOutcome::Lost(reason);
                self.status = SessionStatus::Ended(outcome);
                log!("Session lost: {:?}", reason);
                events.push(TickEvent::SessionEnded { outcome });
                return events;
            }
        };

        if next_head == self.food.cell {
            let kind = self.food.kind;
            let points = kind.points();
            self.snake.push_head(next_head);
            self.score.record(kind, points);
            log!(
                "Collected {} at ({}, {}). Score: {}",
                kind.label(),
                next_head.x,
                next_head.y,
                self.score.total()
            );
            events.push(TickEvent::FoodCollected {
                kind,
                points,
                cell: next_head,
            });

            match Food::spawn(&self.grid, &self.snake, rng) {
                Some(food) => {
                    self.food = food;
                    log!("Food spawned at ({}, {})", food.cell.x, food.cell.y);
                    events.push(TickEvent::FoodSpawned {
                        kind: food.kind,
                        cell: food.cell,
                    });
                }
                None => {
                    let outcome = GameOutcome::Won(WinReason::BoardFilled);
                    self.status = SessionStatus::Ended(outcome);
                    log!("Board filled, nowhere left to spawn food");
                    events.push(TickEvent::SessionEnded { outcome });
                    return events;
                }
            }
        } else {
            self.snake.step_to(next_head);
        }

        // The win lands on the same tick that granted the points.
        if self.status.is_running() && self.score.target_reached() {
            let outcome = GameOutcome::Won(WinReason::TargetReached);
            self.status = SessionStatus::Ended(outcome);
            log!("Target score {} reached", self.score.target());
            events.push(TickEvent::SessionEnded { outcome });
        }

        events
    }
}
