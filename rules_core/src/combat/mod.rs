//! Combat - Health, coins, defeat and attacks applied to actors

mod behavior;
mod health;
mod hooks;
mod result;

pub use behavior::CombatBehavior;
pub use health::{heal, pay, take_damage};
pub use hooks::{CharacterHooks, CombatHooks, NpcHooks};
pub use result::{AttackOutcome, CombatError, DefeatOutcome, LootOutcome};
