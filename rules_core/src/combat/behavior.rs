//! CombatBehavior - Attacks, defeat and looting between actors

use super::health;
use super::hooks::{CharacterHooks, CombatHooks, NpcHooks};
use super::result::{AttackOutcome, CombatError, DefeatOutcome, LootOutcome};
use crate::actor::{Actor, ActorKind};
use crate::config::{LootConstants, RulesConstants};
use crate::damage::{DamageResolver, BARE_HANDS_DAMAGE};
use crate::equipment::Item;
use crate::resolution::ResolutionEngine;
use crate::room::RoomRules;
use crate::rng::RandomSource;
use crate::types::Ability;
use std::collections::HashMap;
use tracing::{debug, info};

static FALLBACK_HOOKS: CharacterHooks = CharacterHooks;

/// Applies combat rules to actors
///
/// Two-party operations take both actors by mutable reference, so callers
/// must already hold whatever lock orders access to the pair.
pub struct CombatBehavior<R> {
    resolution: ResolutionEngine<R>,
    loot: LootConstants,
    hooks: HashMap<ActorKind, Box<dyn CombatHooks>>,
}

impl<R: RandomSource> CombatBehavior<R> {
    pub fn new(rng: R) -> Self {
        Self::with_rules(rng, &RulesConstants::default())
    }

    pub fn with_rules(rng: R, rules: &RulesConstants) -> Self {
        let mut hooks: HashMap<ActorKind, Box<dyn CombatHooks>> = HashMap::new();
        hooks.insert(ActorKind::Character, Box::new(CharacterHooks));
        hooks.insert(ActorKind::Npc, Box::new(NpcHooks));
        CombatBehavior {
            resolution: ResolutionEngine::with_constants(rng, rules.checks.clone()),
            loot: rules.loot.clone(),
            hooks,
        }
    }

    /// Replace the rules used for one kind of actor
    pub fn set_hooks(&mut self, kind: ActorKind, hooks: Box<dyn CombatHooks>) {
        self.hooks.insert(kind, hooks);
    }

    pub fn resolution_mut(&mut self) -> &mut ResolutionEngine<R> {
        &mut self.resolution
    }

    fn hooks_for(&self, kind: ActorKind) -> &dyn CombatHooks {
        self.hooks
            .get(&kind)
            .map(Box::as_ref)
            .unwrap_or(&FALLBACK_HOOKS)
    }

    pub fn heal(&self, actor: &mut dyn Actor, amount: i64) -> i64 {
        health::heal(actor, amount)
    }

    pub fn pay(&self, actor: &mut dyn Actor, amount: i64) -> i64 {
        health::pay(actor, amount)
    }

    pub fn take_damage(&self, actor: &mut dyn Actor, amount: i64) -> i64 {
        health::take_damage(actor, amount)
    }

    /// Defeat where the actor currently stands
    pub fn resolve_defeat(&self, actor: &mut dyn Actor) -> DefeatOutcome {
        let lethal = actor.allows_lethal();
        self.defeat(actor, lethal)
    }

    /// Defeat inside `room`, whatever location the actor has recorded
    pub fn resolve_defeat_in(&self, actor: &mut dyn Actor, room: &RoomRules) -> DefeatOutcome {
        self.defeat(actor, room.allow_death)
    }

    fn defeat(&self, actor: &mut dyn Actor, lethal: bool) -> DefeatOutcome {
        let outcome = self.hooks_for(actor.kind()).resolve_defeat(actor, lethal);
        info!(actor = actor.key(), lethal, ?outcome, "defeated");
        outcome
    }

    pub fn die(&self, actor: &mut dyn Actor) {
        self.hooks_for(actor.kind()).die(actor);
    }

    /// `looter` takes up to one steal roll's worth of coins from `looted`
    pub fn loot(&mut self, looter: &mut dyn Actor, looted: &mut dyn Actor) -> LootOutcome {
        let rolled = self.resolution.dice_mut().roll_spec(self.loot.steal_die);
        let stolen = self
            .hooks_for(looted.kind())
            .looted_by(looted, &*looter, rolled);
        looter.set_coins(looter.coins() + stolen);
        info!(
            looter = looter.key(),
            looted = looted.key(),
            rolled,
            stolen,
            "looted"
        );
        LootOutcome { rolled, stolen }
    }

    /// One attack with the attacker's weapon against the defender's armor
    ///
    /// A hit rolls the weapon's damage range (bare hands without one) and a
    /// defender left at 0 hp or below is defeated.
    pub fn attack(
        &mut self,
        attacker: &mut dyn Actor,
        defender: &mut dyn Actor,
        room: &RoomRules,
    ) -> Result<AttackOutcome, CombatError> {
        if !room.allow_combat {
            return Err(CombatError::CombatNotAllowed);
        }
        let pvp = attacker.kind() == ActorKind::Character && defender.kind() == ActorKind::Character;
        if pvp && !room.allow_pvp {
            return Err(CombatError::PvpNotAllowed);
        }

        let weapon = attacker.weapon();
        let throw = self.resolution.opposed_saving_throw(
            &*attacker,
            &*defender,
            weapon.attack_ability(),
            Ability::Armor,
            false,
            false,
        );
        if !throw.success {
            debug!(attacker = attacker.key(), defender = defender.key(), "attack missed");
            return Ok(AttackOutcome {
                throw,
                damage: None,
                defeat: None,
            });
        }

        let range = weapon.damage_range().unwrap_or(BARE_HANDS_DAMAGE);
        let damage = DamageResolver::new(self.resolution.dice_mut().source_mut()).damage_range(range);
        let hp = health::take_damage(defender, damage);
        info!(
            attacker = attacker.key(),
            defender = defender.key(),
            weapon = weapon.key(),
            damage,
            hp,
            "attack hit"
        );
        let defeat = (hp <= 0).then(|| self.resolve_defeat_in(defender, room));
        Ok(AttackOutcome {
            throw,
            damage: Some(damage),
            defeat,
        })
    }
}
