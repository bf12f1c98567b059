//! rules_core - Tabletop rules resolution for game servers
//!
//! This library provides:
//! - DiceRoller: `XdY` dice, advantage/disadvantage and random tables
//! - ResolutionEngine: Saving throws, opposed throws and morale checks
//! - DamageResolver: Damage rolls inside a `min-max` range
//! - EquipmentManager: Slot capacity and wield rules over an actor's items
//! - CombatBehavior: Healing, payment, damage, defeat, looting and attacks
//!
//! Randomness is always injected through `RandomSource`, and actor state is
//! read and written through a host-provided `AttributeStore`.

pub mod actor;
pub mod combat;
pub mod config;
pub mod damage;
pub mod dice;
pub mod equipment;
pub mod prelude;
pub mod resolution;
pub mod rng;
pub mod room;
pub mod store;
pub mod types;

// Re-export core types for convenience
pub use actor::{Actor, ActorKind, Character, CharacterSheet, ChargenError, Npc};
pub use combat::{
    AttackOutcome, CombatBehavior, CombatError, CombatHooks, DefeatOutcome, LootOutcome,
};
pub use config::{default_items, default_rules, default_tables, ConfigError, RulesConstants};
pub use damage::{DamageResolver, BARE_HANDS_DAMAGE};
pub use dice::{
    DamageRange, DiceRoller, FormatError, RandomTable, RollSpec, TableError, TableRegistry,
};
pub use equipment::{
    Carrier, EquipmentError, EquipmentManager, EquipmentState, Item, ItemCatalog, ItemId,
    ItemRef, PrototypeCatalog,
};
pub use resolution::{ResolutionEngine, SaveOutcome};
pub use rng::{RandomSource, StdRandom};
#[cfg(any(test, feature = "test-support"))]
pub use rng::ScriptedSource;
pub use room::RoomRules;
pub use store::{AttributeStore, AttributeStoreExt, MemoryStore, StoreError};
pub use types::{Ability, Allegiance, HealthTier, ObjType, Quality, WieldLocation};
