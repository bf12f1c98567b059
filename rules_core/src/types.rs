//! Core enums shared by the rules engine

use serde::{Deserialize, Serialize};

/// Ability scores and derived values a saving throw can draw on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
    Luck,
    Armor,
}

impl Ability {
    /// The seven rolled abilities (everything except armor)
    pub fn base() -> &'static [Ability] {
        &[
            Ability::Strength,
            Ability::Dexterity,
            Ability::Constitution,
            Ability::Intelligence,
            Ability::Wisdom,
            Ability::Charisma,
            Ability::Luck,
        ]
    }

    /// Attribute key used when the value is persisted on an actor
    pub fn key(&self) -> &'static str {
        match self {
            Ability::Strength => "strength",
            Ability::Dexterity => "dexterity",
            Ability::Constitution => "constitution",
            Ability::Intelligence => "intelligence",
            Ability::Wisdom => "wisdom",
            Ability::Charisma => "charisma",
            Ability::Luck => "luck",
            Ability::Armor => "armor",
        }
    }

    /// Parse the three-letter abbreviation players type ("str", "dex", ...)
    pub fn from_short(short: &str) -> Option<Ability> {
        match short.to_ascii_lowercase().as_str() {
            "str" => Some(Ability::Strength),
            "dex" => Some(Ability::Dexterity),
            "con" => Some(Ability::Constitution),
            "int" => Some(Ability::Intelligence),
            "wis" => Some(Ability::Wisdom),
            "cha" => Some(Ability::Charisma),
            "lck" => Some(Ability::Luck),
            _ => None,
        }
    }
}

/// Secondary quality marker on a saving throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    CriticalSuccess,
}

/// Where an item is meant to be carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WieldLocation {
    #[default]
    Backpack,
    MainHand,
    OffHand,
    TwoHands,
    Body,
    Head,
}

impl WieldLocation {
    /// The five single-occupant slots, in scan order
    pub fn fixed() -> &'static [WieldLocation] {
        &[
            WieldLocation::MainHand,
            WieldLocation::OffHand,
            WieldLocation::TwoHands,
            WieldLocation::Body,
            WieldLocation::Head,
        ]
    }

    /// Held in one or both hands
    pub fn is_wielded(&self) -> bool {
        matches!(
            self,
            WieldLocation::MainHand | WieldLocation::OffHand | WieldLocation::TwoHands
        )
    }

    /// Worn on the body or head
    pub fn is_worn(&self) -> bool {
        matches!(self, WieldLocation::Body | WieldLocation::Head)
    }
}

/// Broad item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjType {
    Weapon,
    Armor,
    Shield,
    Helmet,
    Consumable,
    #[default]
    Gear,
    Magic,
    Quest,
    Treasure,
}

/// How an NPC relates to player characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allegiance {
    #[default]
    Hostile,
    Neutral,
    Friendly,
}

/// Coarse description of how hurt an actor is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    Perfect,
    Scraped,
    Bruised,
    Hurt,
    Wounded,
    BadlyWounded,
    BarelyHangingOn,
    Collapsed,
}

impl HealthTier {
    /// Classify current hp as a percentage of max hp
    pub fn from_hp(hp: i64, hp_max: i64) -> HealthTier {
        if hp_max <= 0 || hp <= 0 {
            return HealthTier::Collapsed;
        }
        let percent = (100.0 * hp as f64 / hp_max as f64).clamp(0.0, 100.0);
        match percent {
            p if p > 95.0 => HealthTier::Perfect,
            p if p > 80.0 => HealthTier::Scraped,
            p if p > 60.0 => HealthTier::Bruised,
            p if p > 45.0 => HealthTier::Hurt,
            p if p > 30.0 => HealthTier::Wounded,
            p if p > 15.0 => HealthTier::BadlyWounded,
            _ => HealthTier::BarelyHangingOn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_short_names() {
        assert_eq!(Ability::from_short("STR"), Some(Ability::Strength));
        assert_eq!(Ability::from_short("lck"), Some(Ability::Luck));
        assert_eq!(Ability::from_short("armor"), None);
    }

    #[test]
    fn test_wield_location_groups() {
        assert!(WieldLocation::TwoHands.is_wielded());
        assert!(!WieldLocation::Body.is_wielded());
        assert!(WieldLocation::Head.is_worn());
        assert!(!WieldLocation::Backpack.is_worn());
        assert_eq!(WieldLocation::fixed().len(), 5);
    }

    #[test]
    fn test_health_tiers() {
        assert_eq!(HealthTier::from_hp(8, 8), HealthTier::Perfect);
        assert_eq!(HealthTier::from_hp(7, 8), HealthTier::Scraped);
        assert_eq!(HealthTier::from_hp(4, 8), HealthTier::Hurt);
        assert_eq!(HealthTier::from_hp(1, 100), HealthTier::BarelyHangingOn);
        assert_eq!(HealthTier::from_hp(0, 8), HealthTier::Collapsed);
        assert_eq!(HealthTier::from_hp(-3, 8), HealthTier::Collapsed);
    }

    #[test]
    fn test_wield_location_serde_names() {
        let json = serde_json::to_string(&WieldLocation::TwoHands).unwrap();
        assert_eq!(json, "\"two_hands\"");
    }
}
