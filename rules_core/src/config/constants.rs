//! Rules constants configuration

use super::ConfigError;
use crate::dice::RollSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable rules constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConstants {
    #[serde(default)]
    pub checks: CheckConstants,
    #[serde(default)]
    pub equipment: EquipmentConstants,
    #[serde(default)]
    pub loot: LootConstants,
    #[serde(default)]
    pub chargen: ChargenConstants,
    #[serde(default)]
    pub npc: NpcConstants,
}

impl RulesConstants {
    /// Reject values the engines cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chargen.ability_rolls == 0 {
            return Err(ConfigError::ValidationError(
                "chargen.ability_rolls must be at least 1".to_string(),
            ));
        }
        if self.chargen.min_hp < 1 {
            return Err(ConfigError::ValidationError(
                "chargen.min_hp must be at least 1".to_string(),
            ));
        }
        if self.equipment.capacity_bonus < 0 {
            return Err(ConfigError::ValidationError(
                "equipment.capacity_bonus cannot be negative".to_string(),
            ));
        }
        if self.npc.hp_multiplier < 1 {
            return Err(ConfigError::ValidationError(
                "npc.hp_multiplier must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConstants {
    /// Main saving throw die
    #[serde(default = "default_save_die")]
    pub save_die: RollSpec,
    /// Independent die for the critical success check
    #[serde(default = "default_crit_die")]
    pub crit_die: RollSpec,
    #[serde(default = "default_morale_die")]
    pub morale_die: RollSpec,
    /// Bonus used when an actor lacks the ability being tested
    #[serde(default = "default_bonus")]
    pub default_bonus: i64,
    #[serde(default = "default_morale")]
    pub default_morale: i64,
}

impl Default for CheckConstants {
    fn default() -> Self {
        CheckConstants {
            save_die: default_save_die(),
            crit_die: default_crit_die(),
            morale_die: default_morale_die(),
            default_bonus: default_bonus(),
            default_morale: default_morale(),
        }
    }
}

fn default_save_die() -> RollSpec {
    RollSpec::die(1, 100)
}
fn default_crit_die() -> RollSpec {
    RollSpec::die(1, 50)
}
fn default_morale_die() -> RollSpec {
    RollSpec::die(2, 6)
}
fn default_bonus() -> i64 {
    1
}
fn default_morale() -> i64 {
    9
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentConstants {
    /// Slots carried on top of constitution
    #[serde(default = "default_capacity_bonus")]
    pub capacity_bonus: i64,
}

impl Default for EquipmentConstants {
    fn default() -> Self {
        EquipmentConstants {
            capacity_bonus: default_capacity_bonus(),
        }
    }
}

fn default_capacity_bonus() -> i64 {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootConstants {
    /// Most coins a looter can take in one go
    #[serde(default = "default_steal_die")]
    pub steal_die: RollSpec,
}

impl Default for LootConstants {
    fn default() -> Self {
        LootConstants {
            steal_die: default_steal_die(),
        }
    }
}

fn default_steal_die() -> RollSpec {
    RollSpec::die(1, 10)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargenConstants {
    /// Each ability is the lowest of `ability_rolls` rolls of this die
    #[serde(default = "default_ability_die")]
    pub ability_die: RollSpec,
    #[serde(default = "default_ability_rolls")]
    pub ability_rolls: u32,
    #[serde(default = "default_hp_die")]
    pub hp_die: RollSpec,
    #[serde(default = "default_min_hp")]
    pub min_hp: i64,
    #[serde(default = "default_name_table")]
    pub name_table: String,
    #[serde(default = "default_table_die")]
    pub name_die: RollSpec,
    #[serde(default = "default_physique_table")]
    pub physique_table: String,
    #[serde(default = "default_table_die")]
    pub physique_die: RollSpec,
    /// Item prototype keys handed to a new character
    #[serde(default)]
    pub starting_gear: Vec<String>,
    #[serde(default)]
    pub starting_backpack: Vec<String>,
}

impl Default for ChargenConstants {
    fn default() -> Self {
        ChargenConstants {
            ability_die: default_ability_die(),
            ability_rolls: default_ability_rolls(),
            hp_die: default_hp_die(),
            min_hp: default_min_hp(),
            name_table: default_name_table(),
            name_die: default_table_die(),
            physique_table: default_physique_table(),
            physique_die: default_table_die(),
            starting_gear: Vec::new(),
            starting_backpack: Vec::new(),
        }
    }
}

fn default_ability_die() -> RollSpec {
    RollSpec::die(1, 6)
}
fn default_ability_rolls() -> u32 {
    3
}
fn default_hp_die() -> RollSpec {
    RollSpec::die(1, 8)
}
fn default_min_hp() -> i64 {
    5
}
fn default_name_table() -> String {
    "name".to_string()
}
fn default_physique_table() -> String {
    "physique".to_string()
}
fn default_table_die() -> RollSpec {
    RollSpec::die(1, 20)
}

/// Defaults for NPCs spawned without explicit stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcConstants {
    /// Max hp per hit die
    #[serde(default = "default_hp_multiplier")]
    pub hp_multiplier: i64,
    #[serde(default = "default_hit_dice")]
    pub hit_dice: i64,
    #[serde(default = "default_npc_armor")]
    pub armor: i64,
    #[serde(default = "default_npc_coins")]
    pub coins: i64,
}

impl Default for NpcConstants {
    fn default() -> Self {
        NpcConstants {
            hp_multiplier: default_hp_multiplier(),
            hit_dice: default_hit_dice(),
            armor: default_npc_armor(),
            coins: default_npc_coins(),
        }
    }
}

fn default_hp_multiplier() -> i64 {
    4
}
fn default_hit_dice() -> i64 {
    1
}
fn default_npc_armor() -> i64 {
    1
}
fn default_npc_coins() -> i64 {
    1
}

/// Load rules constants from a TOML file
pub fn load_rules(path: &Path) -> Result<RulesConstants, ConfigError> {
    let rules: RulesConstants = super::load_toml(path)?;
    rules.validate()?;
    Ok(rules)
}

/// Load rules constants from a TOML string
pub fn parse_rules(content: &str) -> Result<RulesConstants, ConfigError> {
    let rules: RulesConstants = super::parse_toml(content)?;
    rules.validate()?;
    Ok(rules)
}

/// Rules shipped with the crate
pub fn default_rules() -> RulesConstants {
    let toml = include_str!("../../config/rules.toml");
    parse_rules(toml).unwrap_or_default()
}
