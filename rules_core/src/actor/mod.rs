//! Actors: the capability the rules read and mutate, and its two kinds

mod character;
mod npc;
mod sheet;

pub use character::{Character, INVENTORY_KEY};
pub use npc::Npc;
pub use sheet::{CharacterSheet, ChargenError};

use crate::equipment::{bare_hands, ItemRef};
use crate::types::{Ability, HealthTier};
use serde::{Deserialize, Serialize};

/// Which set of defeat/death/loot rules applies to an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Character,
    Npc,
}

/// Anything that can make saving throws, fight and carry coins
///
/// Hosts own actor lifecycle. The rules only go through these accessors.
pub trait Actor {
    /// Stable identifier, used in logs and for ordering two-party changes
    fn key(&self) -> &str;

    fn kind(&self) -> ActorKind;

    /// Score for `ability`, `None` when the actor has no such score
    fn ability(&self, ability: Ability) -> Option<i64>;

    fn hp(&self) -> i64;

    fn set_hp(&mut self, hp: i64);

    fn hp_max(&self) -> i64;

    fn coins(&self) -> i64;

    fn set_coins(&mut self, coins: i64);

    fn morale(&self) -> Option<i64> {
        None
    }

    /// Whether being defeated where the actor stands is lethal
    fn allows_lethal(&self) -> bool {
        false
    }

    fn weapon(&self) -> ItemRef {
        bare_hands()
    }

    fn health_tier(&self) -> HealthTier {
        HealthTier::from_hp(self.hp(), self.hp_max())
    }
}
