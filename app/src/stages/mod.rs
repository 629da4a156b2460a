mod alarm;
mod broadcaster;
mod game;
mod wakeup;

pub use alarm::run_alarm_stage;
pub use broadcaster::LocalBroadcaster;
pub use game::run_game_stage;
pub use wakeup::run_wakeup_stage;

use common::game::SessionSummary;

/// Which screen the app shows next. The won session's summary rides
/// along into the wake-up screen.
#[derive(Debug)]
pub enum Stage {
    Alarm,
    Game,
    WakeUp(SessionSummary),
    Exit,
}
