use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Validate;

use super::types::TailRule;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub tick_interval_ms: u64,
    pub target_score: u32,
    pub tail_rule: TailRule,
}

impl GameSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            tick_interval_ms: 150,
            target_score: 25,
            tail_rule: TailRule::Blocks,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 10 || self.field_width > 100 {
            return Err("Field width must be between 10 and 100".to_string());
        }
        if self.field_height < 10 || self.field_height > 100 {
            return Err("Field height must be between 10 and 100".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.target_score < 5 || self.target_score > 500 {
            return Err("Target score must be between 5 and 500".to_string());
        }
        Ok(())
    }
}
