//! SaveOutcome - Result of a saving throw

use crate::types::Quality;
use serde::{Deserialize, Serialize};

/// Result of a saving throw, with the rolls that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    /// `roll + bonus > target`
    pub success: bool,
    pub quality: Option<Quality>,
    /// The d100 kept after advantage/disadvantage
    pub roll: i64,
    /// Ability score added to the roll
    pub bonus: i64,
    /// Crit die plus luck
    pub crit_roll: i64,
    pub target: i64,
}

impl SaveOutcome {
    pub fn is_critical(&self) -> bool {
        self.quality == Some(Quality::CriticalSuccess)
    }
}
