use common::game::{
    GameBroadcaster, GameOutcome, GameSnapshot, LossReason, SessionSummary, TickEvent, WinReason,
};

use crate::ui::view::SharedView;

/// Feeds session snapshots into the shared render state and turns tick
/// events into feed lines.
#[derive(Clone)]
pub struct LocalBroadcaster {
    view: SharedView,
}

impl LocalBroadcaster {
    pub fn new(view: SharedView) -> Self {
        Self { view }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        for event in &snapshot.events {
            match event {
                TickEvent::FoodCollected { kind, points, .. } => {
                    self.view
                        .push_event(format!("{} {} +{}", kind.icon(), kind.label(), points));
                }
                TickEvent::SessionEnded { outcome } => {
                    let line = match outcome {
                        GameOutcome::Won(WinReason::TargetReached) => "Target reached!",
                        GameOutcome::Won(WinReason::BoardFilled) => "The whole board is snake!",
                        GameOutcome::Lost(LossReason::WallCollision) => "Hit the wall",
                        GameOutcome::Lost(LossReason::SelfCollision) => "Ran into yourself",
                    };
                    self.view.push_event(line.to_string());
                }
                TickEvent::FoodSpawned { .. } => {}
            }
        }
        self.view.set_snapshot(snapshot);
    }

    async fn broadcast_session_over(&self, summary: SessionSummary) {
        self.view.push_event(format!(
            "Session over: score {} in {} ticks",
            summary.score, summary.ticks
        ));
    }
}
