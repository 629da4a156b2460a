use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Heading of the snake. `Up` decrements y: the origin is the top-left
/// corner of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

/// The four food categories. Every category is worth the same number of
/// points; the category itself is tracked only for the collection tally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Sunny,
    Rainy,
    Cold,
    Stormy,
}

impl FoodKind {
    pub const ALL: [FoodKind; 4] = [
        FoodKind::Sunny,
        FoodKind::Rainy,
        FoodKind::Cold,
        FoodKind::Stormy,
    ];

    pub fn points(&self) -> u32 {
        5
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FoodKind::Sunny => "☀",
            FoodKind::Rainy => "🌧",
            FoodKind::Cold => "❄",
            FoodKind::Stormy => "🌩",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FoodKind::Sunny => "Sunny",
            FoodKind::Rainy => "Rainy",
            FoodKind::Cold => "Cold",
            FoodKind::Stormy => "Stormy",
        }
    }
}

/// Whether the cell currently holding the tail blocks the head this tick.
/// `Blocks` treats the full pre-move body as occupied even though the tail
/// vacates on a non-growth move. `Vacates` exempts the tail cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TailRule {
    Blocks,
    Vacates,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LossReason {
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinReason {
    TargetReached,
    /// The snake covered every cell, so there was nowhere left to put food.
    BoardFilled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Won(WinReason),
    Lost(LossReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    Running,
    Ended(GameOutcome),
}

impl SessionStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, SessionStatus::Running)
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, SessionStatus::Ended(_))
    }
}
