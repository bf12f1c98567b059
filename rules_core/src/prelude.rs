//! Prelude module for convenient imports
//!
//! ```rust
//! use rules_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Ability, Allegiance, HealthTier, ObjType, Quality, WieldLocation};

// Actors
pub use crate::actor::{Actor, ActorKind, Character, CharacterSheet, Npc};
pub use crate::room::RoomRules;
pub use crate::store::{AttributeStore, AttributeStoreExt, MemoryStore};

// Dice and checks
pub use crate::dice::{DiceRoller, RandomTable, RollSpec, TableRegistry};
pub use crate::resolution::{ResolutionEngine, SaveOutcome};
pub use crate::rng::{RandomSource, StdRandom};

// Equipment
pub use crate::equipment::{bare_hands, Carrier, EquipmentManager, Item, ItemRef, PrototypeCatalog};

// Combat
pub use crate::combat::{AttackOutcome, CombatBehavior, DefeatOutcome, LootOutcome};
pub use crate::damage::DamageResolver;

// Config
pub use crate::config::{default_items, default_rules, default_tables};
