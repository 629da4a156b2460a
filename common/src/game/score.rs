use std::collections::HashMap;

use super::types::FoodKind;

/// Running total plus a per-category tally of what was eaten. The total
/// never decreases within a session; `reset` starts a fresh one.
#[derive(Clone, Debug)]
pub struct ScoreBoard {
    total: u32,
    collected: HashMap<FoodKind, u32>,
    target: u32,
}

impl ScoreBoard {
    pub fn new(target: u32) -> Self {
        Self {
            total: 0,
            collected: HashMap::new(),
            target,
        }
    }

    pub fn record(&mut self, kind: FoodKind, points: u32) {
        self.total += points;
        *self.collected.entry(kind).or_insert(0) += 1;
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn target_reached(&self) -> bool {
        self.total >= self.target
    }

    pub fn collected_count(&self, kind: FoodKind) -> u32 {
        self.collected.get(&kind).copied().unwrap_or(0)
    }

    /// Tally in the fixed category order, for display.
    pub fn collected_counts(&self) -> Vec<(FoodKind, u32)> {
        FoodKind::ALL
            .iter()
            .map(|kind| (*kind, self.collected_count(*kind)))
            .collect()
    }

    pub fn reset(&mut self) {
        self.total = 0;
        self.collected.clear();
    }
}
