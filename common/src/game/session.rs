use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::log;

use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::state::{GameState, TickEvent};
use super::types::{Cell, Direction, FoodKind, GameOutcome, SessionStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Turn(Direction),
}

/// Everything a render sink needs to draw one frame of the board.
#[derive(Clone, Debug)]
pub struct GameSnapshot {
    pub tick: u64,
    pub field_width: usize,
    pub field_height: usize,
    pub snake_body: Vec<Cell>,
    pub food_cell: Cell,
    pub food_kind: FoodKind,
    pub score: u32,
    pub target_score: u32,
    pub collected: Vec<(FoodKind, u32)>,
    pub status: SessionStatus,
    pub events: Vec<TickEvent>,
}

/// Final figures of a finished session.
#[derive(Clone, Debug)]
pub struct SessionSummary {
    pub outcome: GameOutcome,
    pub score: u32,
    pub collected: Vec<(FoodKind, u32)>,
    pub ticks: u64,
    pub seed: u64,
}

/// Sink for per-tick snapshots and the end-of-session summary. Must not
/// block: the tick loop awaits each broadcast before the next tick.
pub trait GameBroadcaster: Send + Sync + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;
    fn broadcast_session_over(&self, summary: SessionSummary) -> impl Future<Output = ()> + Send;
}

/// Shared handles onto one game session. Cheap to clone; the tick loop,
/// the input side and the render side all hold the same state.
#[derive(Clone)]
pub struct SessionState {
    pub game_state: Arc<Mutex<GameState>>,
    pub tick: Arc<Mutex<u64>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub tick_interval: Duration,
    pub seed: u64,
}

impl SessionState {
    pub fn create(settings: &GameSettings, seed: u64) -> Self {
        let mut rng = SessionRng::new(seed);
        let game_state = GameState::new(settings, &mut rng);
        Self {
            game_state: Arc::new(Mutex::new(game_state)),
            tick: Arc::new(Mutex::new(0)),
            rng: Arc::new(Mutex::new(rng)),
            tick_interval: settings.tick_interval(),
            seed,
        }
    }

    pub async fn handle_command(&self, command: SessionCommand) {
        match command {
            SessionCommand::Turn(direction) => {
                let mut game_state = self.game_state.lock().await;
                game_state.set_direction(direction);
            }
        }
    }

    /// Puts a fresh board in place. The caller is responsible for the
    /// tick loop: stop the old one first, then start a new one.
    pub async fn restart(&self) {
        let mut game_state = self.game_state.lock().await;
        let mut rng = self.rng.lock().await;
        let mut tick = self.tick.lock().await;
        game_state.restart(&mut rng);
        *tick = 0;
    }

    /// Current board state outside the tick loop, for the first paint.
    pub async fn snapshot(&self) -> GameSnapshot {
        let game_state = self.game_state.lock().await;
        let tick = self.tick.lock().await;
        build_snapshot(&game_state, *tick, Vec::new())
    }
}

pub struct Session;

impl Session {
    /// Drives the session at a fixed tick rate until it ends, pushing a
    /// snapshot to the broadcaster after every tick. Returns the summary;
    /// the caller decides what to do with it exactly once.
    pub async fn run<TBroadcaster: GameBroadcaster>(
        state: SessionState,
        broadcaster: TBroadcaster,
    ) -> SessionSummary {
        {
            let mut game_state = state.game_state.lock().await;
            game_state.start();
            log!(
                "Session started: {}x{} board, target score {}",
                game_state.grid.width,
                game_state.grid.height,
                game_state.score.target()
            );
        }

        let mut interval = tokio::time::interval(state.tick_interval);
        // The first interval tick completes immediately; swallow it so the
        // snake moves a full period after start.
        interval.tick().await;

        let outcome = loop {
            interval.tick().await;

            let snapshot = {
                let mut game_state = state.game_state.lock().await;
                let mut rng = state.rng.lock().await;
                let mut tick = state.tick.lock().await;

                let events = game_state.step(&mut rng);
                *tick += 1;
                build_snapshot(&game_state, *tick, events)
            };

            let status = snapshot.status;
            broadcaster.broadcast_state(snapshot).await;

            if let SessionStatus::Ended(outcome) = status {
                break outcome;
            }
        };

        let summary = {
            let game_state = state.game_state.lock().await;
            let tick = state.tick.lock().await;
            SessionSummary {
                outcome,
                score: game_state.score.total(),
                collected: game_state.score.collected_counts(),
                ticks: *tick,
                seed: state.seed,
            }
        };
        log!(
            "Session over after {} ticks: {:?}, score {}",
            summary.ticks,
            summary.outcome,
            summary.score
        );

        summary
    }
}

fn build_snapshot(game_state: &GameState, tick: u64, events: Vec<TickEvent>) -> GameSnapshot {
    GameSnapshot {
        tick,
        field_width: game_state.grid.width,
        field_height: game_state.grid.height,
        snake_body: game_state.snake.body.iter().copied().collect(),
        food_cell: game_state.food.cell,
        food_kind: game_state.food.kind,
        score: game_state.score.total(),
        target_score: game_state.score.target(),
        collected: game_state.score.collected_counts(),
        status: game_state.status,
        events,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use super::super::types::LossReason;
    use super::*;

    #[derive(Clone, Default)]
    struct RecordingBroadcaster {
        snapshots: Arc<StdMutex<Vec<GameSnapshot>>>,
        summaries: Arc<StdMutex<Vec<SessionSummary>>>,
    }

    impl GameBroadcaster for RecordingBroadcaster {
        async fn broadcast_state(&self, snapshot: GameSnapshot) {
            self.snapshots.lock().unwrap().push(snapshot);
        }

        async fn broadcast_session_over(&self, summary: SessionSummary) {
            self.summaries.lock().unwrap().push(summary);
        }
    }

    fn fast_settings() -> GameSettings {
        GameSettings {
            field_width: 10,
            field_height: 10,
            tick_interval_ms: 10,
            ..GameSettings::default()
        }
    }

    #[tokio::test]
    async fn test_session_runs_to_the_wall() {
        let state = SessionState::create(&fast_settings(), 7);
        let broadcaster = RecordingBroadcaster::default();

        let summary = Session::run(state, broadcaster.clone()).await;

        // Heading up from the center of a 10x10 board: five moves to the
        // top row, the sixth hits the wall.
        assert_eq!(
            summary.outcome,
            GameOutcome::Lost(LossReason::WallCollision)
        );
        assert_eq!(summary.ticks, 6);

        let snapshots = broadcaster.snapshots.lock().unwrap();
        assert_eq!(snapshots.len(), 6);
        let last = snapshots.last().unwrap();
        assert!(last.status.is_ended());
        assert!(
            last.events
                .contains(&TickEvent::SessionEnded {
                    outcome: GameOutcome::Lost(LossReason::WallCollision)
                })
        );
    }

    #[tokio::test]
    async fn test_turn_commands_reach_the_board() {
        let state = SessionState::create(&fast_settings(), 7);
        {
            let mut game_state = state.game_state.lock().await;
            game_state.start();
        }

        state
            .handle_command(SessionCommand::Turn(Direction::Left))
            .await;

        let game_state = state.game_state.lock().await;
        assert_eq!(game_state.snake.pending_direction, Some(Direction::Left));
    }

    #[tokio::test]
    async fn test_commands_before_start_are_dropped() {
        let state = SessionState::create(&fast_settings(), 7);

        state
            .handle_command(SessionCommand::Turn(Direction::Left))
            .await;

        let game_state = state.game_state.lock().await;
        assert_eq!(game_state.snake.pending_direction, None);
    }

    #[tokio::test]
    async fn test_restart_after_a_finished_run() {
        let state = SessionState::create(&fast_settings(), 7);
        let broadcaster = RecordingBroadcaster::default();

        let summary = Session::run(state.clone(), broadcaster.clone()).await;
        broadcaster.broadcast_session_over(summary).await;
        assert_eq!(broadcaster.summaries.lock().unwrap().len(), 1);

        state.restart().await;
        {
            let game_state = state.game_state.lock().await;
            assert!(game_state.status.is_running());
            assert_eq!(game_state.snake.head(), Cell::new(5, 5));
            assert_eq!(game_state.score.total(), 0);
        }
        assert_eq!(*state.tick.lock().await, 0);

        // A restarted board runs a full session again.
        let summary = Session::run(state, broadcaster.clone()).await;
        assert_eq!(
            summary.outcome,
            GameOutcome::Lost(LossReason::WallCollision)
        );
        assert_eq!(broadcaster.snapshots.lock().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_aborted_driver_stops_broadcasting() {
        let settings = GameSettings {
            tick_interval_ms: 50,
            ..GameSettings::default()
        };
        let state = SessionState::create(&settings, 7);
        let broadcaster = RecordingBroadcaster::default();

        // Ten ticks to the wall at 50ms each; abort well before that.
        let handle = tokio::spawn(Session::run(state, broadcaster.clone()));
        tokio::time::sleep(Duration::from_millis(140)).await;
        handle.abort();
        assert!(handle.await.is_err());

        let count = broadcaster.snapshots.lock().unwrap().len();
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(broadcaster.snapshots.lock().unwrap().len(), count);
    }

    #[tokio::test]
    async fn test_first_snapshot_lands_after_one_period() {
        let state = SessionState::create(&fast_settings(), 7);
        let initial = state.snapshot().await;
        assert_eq!(initial.tick, 0);
        assert_eq!(initial.snake_body, vec![Cell::new(5, 5)]);
        assert!(initial.events.is_empty());
    }
}
