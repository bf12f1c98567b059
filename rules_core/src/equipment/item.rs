//! Item capability and the items this crate ships with

use crate::actor::Actor;
use crate::damage::{DamageRange, BARE_HANDS_DAMAGE};
use crate::types::{Ability, ObjType, WieldLocation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Host-assigned item identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Reserved for the bare-hands sentinel
    pub const BARE_HANDS: ItemId = ItemId(0);
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the equipment and combat rules need to know about an item
///
/// Items belong to the host; equipment only holds shared references and
/// compares them by `id`.
pub trait Item: fmt::Debug + Send + Sync {
    fn id(&self) -> ItemId;

    fn key(&self) -> &str;

    /// Slots the item takes up
    fn size(&self) -> u32 {
        1
    }

    /// Bonus added to the wearer's armor while equipped
    fn armor(&self) -> i64 {
        0
    }

    fn wield_location(&self) -> WieldLocation {
        WieldLocation::Backpack
    }

    /// Whether the item can go into equipment at all
    fn is_equippable(&self) -> bool {
        true
    }

    fn is_usable_by(&self, _user: &dyn Actor) -> bool {
        false
    }

    /// Damage dealt when attacking with this item
    fn damage_range(&self) -> Option<DamageRange> {
        None
    }

    /// Ability the attack roll is made with
    fn attack_ability(&self) -> Ability {
        Ability::Strength
    }
}

/// Shared handle to a host-owned item
pub type ItemRef = Arc<dyn Item>;

/// Same host object
pub fn same_item(a: &dyn Item, b: &dyn Item) -> bool {
    a.id() == b.id()
}

/// Weapon used when nothing is wielded
#[derive(Debug, Clone, Copy, Default)]
pub struct BareHands;

impl Item for BareHands {
    fn id(&self) -> ItemId {
        ItemId::BARE_HANDS
    }

    fn key(&self) -> &str {
        "bare hands"
    }

    fn size(&self) -> u32 {
        0
    }

    fn wield_location(&self) -> WieldLocation {
        WieldLocation::TwoHands
    }

    fn is_equippable(&self) -> bool {
        false
    }

    fn damage_range(&self) -> Option<DamageRange> {
        Some(BARE_HANDS_DAMAGE)
    }
}

/// Shared bare-hands sentinel
pub fn bare_hands() -> ItemRef {
    static BARE_HANDS: OnceLock<ItemRef> = OnceLock::new();
    BARE_HANDS.get_or_init(|| Arc::new(BareHands)).clone()
}

/// Data-driven item template, loaded from configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPrototype {
    pub key: String,
    #[serde(default)]
    pub obj_type: ObjType,
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default)]
    pub armor: i64,
    #[serde(default)]
    pub wield_location: WieldLocation,
    #[serde(default)]
    pub damage: Option<DamageRange>,
    #[serde(default = "default_attack_ability")]
    pub attack_ability: Ability,
    /// Remaining uses for consumables
    #[serde(default)]
    pub uses: Option<u32>,
}

fn default_size() -> u32 {
    1
}

fn default_attack_ability() -> Ability {
    Ability::Strength
}

impl ItemPrototype {
    pub fn new(key: impl Into<String>) -> Self {
        ItemPrototype {
            key: key.into(),
            obj_type: ObjType::default(),
            size: default_size(),
            armor: 0,
            wield_location: WieldLocation::default(),
            damage: None,
            attack_ability: default_attack_ability(),
            uses: None,
        }
    }
}

/// An item spawned from a prototype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub prototype: ItemPrototype,
}

impl GameItem {
    pub fn new(id: ItemId, prototype: ItemPrototype) -> Self {
        GameItem { id, prototype }
    }
}

impl Item for GameItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn key(&self) -> &str {
        &self.prototype.key
    }

    fn size(&self) -> u32 {
        self.prototype.size
    }

    fn armor(&self) -> i64 {
        self.prototype.armor
    }

    fn wield_location(&self) -> WieldLocation {
        self.prototype.wield_location
    }

    fn is_usable_by(&self, _user: &dyn Actor) -> bool {
        self.prototype.obj_type == ObjType::Consumable && self.prototype.uses.map_or(true, |n| n > 0)
    }

    fn damage_range(&self) -> Option<DamageRange> {
        self.prototype.damage
    }

    fn attack_ability(&self) -> Ability {
        self.prototype.attack_ability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_hands_is_shared_sentinel() {
        let a = bare_hands();
        let b = bare_hands();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.id(), ItemId::BARE_HANDS);
        assert_eq!(a.damage_range(), Some(BARE_HANDS_DAMAGE));
        assert!(!a.is_equippable());
    }

    #[test]
    fn test_prototype_defaults() {
        let proto: ItemPrototype = toml::from_str(r#"key = "torch""#).unwrap();
        assert_eq!(proto, ItemPrototype::new("torch"));
        assert_eq!(proto.size, 1);
        assert_eq!(proto.wield_location, WieldLocation::Backpack);
    }

    #[test]
    fn test_same_item_compares_ids() {
        let a = GameItem::new(ItemId(4), ItemPrototype::new("rope"));
        let b = GameItem::new(ItemId(4), ItemPrototype::new("other rope"));
        let c = GameItem::new(ItemId(5), ItemPrototype::new("rope"));
        assert!(same_item(&a, &b));
        assert!(!same_item(&a, &c));
    }
}
