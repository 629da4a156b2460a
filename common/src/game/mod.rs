mod collision;
mod food;
mod grid;
mod score;
mod session;
mod session_rng;
mod settings;
mod snake;
mod state;
mod types;

pub use collision::calculate_next_head;
pub use food::Food;
pub use grid::Grid;
pub use score::ScoreBoard;
pub use session::{
    GameBroadcaster, GameSnapshot, Session, SessionCommand, SessionState, SessionSummary,
};
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use snake::Snake;
pub use state::{GameState, TickEvent};
pub use types::{
    Cell, Direction, FoodKind, GameOutcome, LossReason, SessionStatus, TailRule, WinReason,
};
