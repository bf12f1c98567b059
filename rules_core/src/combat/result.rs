//! Combat outcomes and errors

use crate::resolution::SaveOutcome;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attack refused by the room
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("combat is not allowed here")]
    CombatNotAllowed,
    #[error("characters cannot fight each other here")]
    PvpNotAllowed,
}

/// What happened to a defeated actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefeatOutcome {
    Died,
    /// Knocked out and restored to full health
    Collapsed,
}

/// Result of one attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub throw: SaveOutcome,
    /// Damage dealt, `None` on a miss
    pub damage: Option<i64>,
    /// Set when the hit brought the defender to 0 hp or below
    pub defeat: Option<DefeatOutcome>,
}

impl AttackOutcome {
    pub fn hit(&self) -> bool {
        self.damage.is_some()
    }
}

/// Coins moved by a loot action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootOutcome {
    /// Steal die result, the most that could be taken
    pub rolled: i64,
    pub stolen: i64,
}
