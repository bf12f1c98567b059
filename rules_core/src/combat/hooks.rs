//! Per-kind defeat, death and loot rules

use super::health::pay;
use super::result::DefeatOutcome;
use crate::actor::Actor;
use tracing::info;

/// Rules that differ between kinds of actor
///
/// Hosts register their own implementation per `ActorKind` to react to
/// death, e.g. by removing the actor from the world.
pub trait CombatHooks: Send + Sync {
    /// Actor dropped to 0 hp or below where death is allowed only if
    /// `lethal`. Survivors are restored to max hp.
    fn resolve_defeat(&self, actor: &mut dyn Actor, lethal: bool) -> DefeatOutcome {
        if lethal {
            self.die(actor);
            return DefeatOutcome::Died;
        }
        let hp_max = actor.hp_max();
        actor.set_hp(hp_max);
        info!(actor = actor.key(), "collapsed");
        DefeatOutcome::Collapsed
    }

    fn die(&self, actor: &mut dyn Actor) {
        info!(actor = actor.key(), "died");
    }

    /// `looted` is robbed of up to `max_steal` coins. Returns the amount taken.
    fn looted_by(&self, looted: &mut dyn Actor, _looter: &dyn Actor, max_steal: i64) -> i64 {
        pay(looted, max_steal)
    }
}

/// Characters die only where the room allows death
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterHooks;

impl CombatHooks for CharacterHooks {}

/// NPCs always die when defeated
#[derive(Debug, Clone, Copy, Default)]
pub struct NpcHooks;

impl CombatHooks for NpcHooks {
    fn resolve_defeat(&self, actor: &mut dyn Actor, _lethal: bool) -> DefeatOutcome {
        self.die(actor);
        DefeatOutcome::Died
    }
}
