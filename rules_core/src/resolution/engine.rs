//! ResolutionEngine - Ability checks against target numbers

use super::outcome::SaveOutcome;
use crate::actor::Actor;
use crate::config::CheckConstants;
use crate::dice::DiceRoller;
use crate::rng::RandomSource;
use crate::types::{Ability, Quality};
use tracing::debug;

/// Makes saving throws for actors
///
/// Owns a dice roller over an injected randomness source. Missing ability
/// scores count as the configured default bonus.
#[derive(Debug, Clone)]
pub struct ResolutionEngine<R> {
    dice: DiceRoller<R>,
    checks: CheckConstants,
}

impl<R: RandomSource> ResolutionEngine<R> {
    pub fn new(rng: R) -> Self {
        Self::with_constants(rng, CheckConstants::default())
    }

    pub fn with_constants(rng: R, checks: CheckConstants) -> Self {
        ResolutionEngine {
            dice: DiceRoller::new(rng),
            checks,
        }
    }

    pub fn constants(&self) -> &CheckConstants {
        &self.checks
    }

    pub fn dice_mut(&mut self) -> &mut DiceRoller<R> {
        &mut self.dice
    }

    /// Roll d100 plus the actor's `ability` against `target`
    ///
    /// The main roll comes first, then an independent crit roll plus luck.
    /// Beating the target with the crit roll marks a critical success
    /// whether or not the throw itself succeeded.
    pub fn saving_throw(
        &mut self,
        actor: &dyn Actor,
        ability: Ability,
        target: i64,
        advantage: bool,
        disadvantage: bool,
    ) -> SaveOutcome {
        let roll = self
            .dice
            .roll_spec_with_mode(self.checks.save_die, advantage, disadvantage);
        let luck = actor
            .ability(Ability::Luck)
            .unwrap_or(self.checks.default_bonus);
        let crit_roll = self.dice.roll_spec(self.checks.crit_die) + luck;
        let quality = (crit_roll > target).then_some(Quality::CriticalSuccess);
        let bonus = actor.ability(ability).unwrap_or(self.checks.default_bonus);
        let success = roll + bonus > target;

        debug!(
            actor = actor.key(),
            ?ability,
            roll,
            bonus,
            crit_roll,
            target,
            success,
            "saving throw"
        );
        SaveOutcome {
            success,
            quality,
            roll,
            bonus,
            crit_roll,
            target,
        }
    }

    /// Saving throw whose target is the defender's `defense` score
    pub fn opposed_saving_throw(
        &mut self,
        attacker: &dyn Actor,
        defender: &dyn Actor,
        attack: Ability,
        defense: Ability,
        advantage: bool,
        disadvantage: bool,
    ) -> SaveOutcome {
        let target = defender
            .ability(defense)
            .unwrap_or(self.checks.default_bonus);
        self.saving_throw(attacker, attack, target, advantage, disadvantage)
    }

    /// Whether the defender holds its nerve
    pub fn morale_check(&mut self, defender: &dyn Actor) -> bool {
        let morale = defender.morale().unwrap_or(self.checks.default_morale);
        let roll = self.dice.roll_spec(self.checks.morale_die);
        debug!(actor = defender.key(), roll, morale, "morale check");
        roll <= morale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{Character, Npc};
    use crate::rng::{ScriptedSource, StdRandom};
    use crate::store::MemoryStore;

    fn character(strength: i64) -> Character {
        let mut character = Character::new("hero", MemoryStore::new());
        character.set_ability(Ability::Strength, strength);
        character
    }

    #[test]
    fn test_saving_throw_uses_roll_and_bonus() {
        // d100 = 50, crit d50 = 10
        let mut engine = ResolutionEngine::new(ScriptedSource::new([50, 10]));
        let outcome = engine.saving_throw(&character(5), Ability::Strength, 54, false, false);

        assert!(outcome.success);
        assert_eq!(outcome.roll, 50);
        assert_eq!(outcome.bonus, 5);
        assert_eq!(outcome.crit_roll, 11);
        assert_eq!(outcome.quality, None);
    }

    #[test]
    fn test_saving_throw_fails_on_tie() {
        let mut engine = ResolutionEngine::new(ScriptedSource::new([50, 10]));
        let outcome = engine.saving_throw(&character(5), Ability::Strength, 55, false, false);
        assert!(!outcome.success);
    }

    #[test]
    fn test_crit_independent_of_success() {
        // d100 = 1 fails, crit 50 + luck 1 beats 20
        let mut engine = ResolutionEngine::new(ScriptedSource::new([1, 50]));
        let outcome = engine.saving_throw(&character(1), Ability::Strength, 20, false, false);
        assert!(!outcome.success);
        assert!(outcome.is_critical());
    }

    #[test]
    fn test_missing_ability_uses_default_bonus() {
        let npc = Npc::new("rat", MemoryStore::new());
        let mut engine = ResolutionEngine::new(ScriptedSource::new([10, 5]));
        let outcome = engine.saving_throw(&npc, Ability::Luck, 30, false, false);
        assert_eq!(outcome.bonus, 1);
        // luck defaults to 1 as well
        assert_eq!(outcome.crit_roll, 6);
    }

    #[test]
    fn test_advantage_keeps_better_roll() {
        let mut engine = ResolutionEngine::new(ScriptedSource::new([20, 80, 1]));
        let outcome = engine.saving_throw(&character(1), Ability::Strength, 50, true, false);
        assert_eq!(outcome.roll, 80);

        let mut engine = ResolutionEngine::new(ScriptedSource::new([20, 80, 1]));
        let outcome = engine.saving_throw(&character(1), Ability::Strength, 50, false, true);
        assert_eq!(outcome.roll, 20);
    }

    #[test]
    fn test_opposed_targets_defender_armor() {
        let mut defender = Npc::new("guard", MemoryStore::new());
        defender.set_armor(7);
        let mut engine = ResolutionEngine::new(ScriptedSource::new([6, 1]));
        let outcome = engine.opposed_saving_throw(
            &character(1),
            &defender,
            Ability::Strength,
            Ability::Armor,
            false,
            false,
        );
        assert_eq!(outcome.target, 7);
        assert!(!outcome.success);
    }

    #[test]
    fn test_success_monotonic_in_bonus() {
        for seed in 0..50 {
            let mut results = vec![];
            for strength in [0, 5, 10, 20, 40] {
                let mut engine = ResolutionEngine::new(StdRandom::seeded(seed));
                let outcome = engine.saving_throw(&character(strength), Ability::Strength, 60, false, false);
                results.push(outcome.success);
            }
            // once a throw succeeds, a higher bonus never fails it
            let first_success = results.iter().position(|&ok| ok).unwrap_or(results.len());
            assert!(results[first_success..].iter().all(|&ok| ok), "seed {seed}");
        }
    }

    #[test]
    fn test_morale_check() {
        let npc = Npc::new("rat", MemoryStore::new());
        let mut engine = ResolutionEngine::new(ScriptedSource::new([4, 5]));
        assert!(engine.morale_check(&npc));

        let mut brave = Npc::new("knight", MemoryStore::new());
        brave.set_morale(3);
        let mut engine = ResolutionEngine::new(ScriptedSource::new([2, 2]));
        assert!(!engine.morale_check(&brave));
    }
}
