//! CharacterSheet - Rolled starting stats for a new character

use super::character::Character;
use super::Actor;
use crate::config::ChargenConstants;
use crate::dice::{DiceRoller, TableError, TableRegistry};
use crate::equipment::{EquipmentError, PrototypeCatalog};
use crate::rng::RandomSource;
use crate::store::AttributeStore;
use crate::types::Ability;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Character generation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChargenError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Equipment(#[from] EquipmentError),
    #[error("abilities can only be swapped once")]
    AlreadySwapped,
    #[error("{0:?} cannot be swapped")]
    NotSwappable(Ability),
    #[error("unknown ability '{0}'")]
    UnknownAbility(String),
}

/// Freshly rolled character stats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSheet {
    pub name: String,
    pub physique: String,
    pub abilities: HashMap<Ability, i64>,
    pub hp_max: i64,
    swapped: bool,
}

impl CharacterSheet {
    /// Roll every ability as the lowest of several dice, hp with a floor,
    /// and a name and physique from the named tables
    pub fn roll<R: RandomSource>(
        dice: &mut DiceRoller<R>,
        tables: &TableRegistry,
        constants: &ChargenConstants,
    ) -> Result<Self, ChargenError> {
        let abilities = Ability::base()
            .iter()
            .map(|&ability| {
                let score = dice.roll_lowest_of(constants.ability_die, constants.ability_rolls);
                (ability, score)
            })
            .collect();
        let hp_max = dice.roll_spec(constants.hp_die).max(constants.min_hp);

        let names = tables.require(&constants.name_table)?;
        let name = dice
            .roll_random_table(&constants.name_die.to_string(), names)?
            .clone();
        let physiques = tables.require(&constants.physique_table)?;
        let physique = dice
            .roll_random_table(&constants.physique_die.to_string(), physiques)?
            .clone();

        debug!(%name, hp_max, "rolled character sheet");
        Ok(CharacterSheet {
            name,
            physique,
            abilities,
            hp_max,
            swapped: false,
        })
    }

    pub fn ability(&self, ability: Ability) -> Option<i64> {
        self.abilities.get(&ability).copied()
    }

    /// Whether the one allowed swap has been used
    pub fn has_swapped(&self) -> bool {
        self.swapped
    }

    /// Exchange the scores of two rolled abilities. Allowed once per sheet.
    pub fn swap_abilities(&mut self, a: Ability, b: Ability) -> Result<(), ChargenError> {
        if self.swapped {
            return Err(ChargenError::AlreadySwapped);
        }
        for ability in [a, b] {
            if !Ability::base().contains(&ability) {
                return Err(ChargenError::NotSwappable(ability));
            }
        }
        let first = self.ability(a).unwrap_or_default();
        let second = self.ability(b).unwrap_or_default();
        self.abilities.insert(a, second);
        self.abilities.insert(b, first);
        self.swapped = true;
        debug!(?a, ?b, "swapped abilities");
        Ok(())
    }

    /// `swap_abilities` from the short names players type, e.g. "str" "con"
    pub fn swap_named(&mut self, a: &str, b: &str) -> Result<(), ChargenError> {
        let parse = |name: &str| {
            Ability::from_short(name.trim())
                .ok_or_else(|| ChargenError::UnknownAbility(name.to_string()))
        };
        self.swap_abilities(parse(a)?, parse(b)?)
    }

    /// Write the sheet into `character` at full health and hand out the
    /// starting gear. Gear is equipped where it belongs; the backpack list
    /// is added as-is. Unknown prototype keys are skipped.
    pub fn apply<S: AttributeStore>(
        &self,
        character: &mut Character<S>,
        catalog: &mut PrototypeCatalog,
        constants: &ChargenConstants,
    ) -> Result<(), ChargenError> {
        character.set_name(&self.name);
        character.set_description(&self.physique);
        for (&ability, &score) in &self.abilities {
            character.set_ability(ability, score);
        }
        character.set_hp_max(self.hp_max);
        character.set_hp(self.hp_max);

        for key in &constants.starting_gear {
            match catalog.spawn(key) {
                Some(item) => {
                    character.equipment().move_item(item)?;
                }
                None => warn!(item = %key, "unknown starting gear"),
            }
        }
        for key in &constants.starting_backpack {
            match catalog.spawn(key) {
                Some(item) => {
                    character.equipment().add(item)?;
                }
                None => warn!(item = %key, "unknown starting backpack item"),
            }
        }
        info!(character = character.key(), name = %self.name, "character created");
        Ok(())
    }
}
