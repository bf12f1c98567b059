//! EquipmentState - The five fixed slots plus the backpack

use super::catalog::ItemCatalog;
use super::item::{bare_hands, same_item, Item, ItemId, ItemRef};
use crate::types::WieldLocation;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Armor granted by an empty body slot
pub const UNARMORED_BODY: i64 = 1;

/// Equipment rule violation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquipmentError {
    #[error("{key} is not something that can be equipped")]
    NotEquippable { key: String },
}

/// Items an actor carries, by location
#[derive(Debug, Clone, Default)]
pub struct EquipmentState {
    main_hand: Option<ItemRef>,
    off_hand: Option<ItemRef>,
    two_hands: Option<ItemRef>,
    body: Option<ItemRef>,
    head: Option<ItemRef>,
    backpack: Vec<ItemRef>,
}

impl EquipmentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupant of a fixed slot; always `None` for `Backpack`
    pub fn slot(&self, location: WieldLocation) -> Option<&ItemRef> {
        match location {
            WieldLocation::MainHand => self.main_hand.as_ref(),
            WieldLocation::OffHand => self.off_hand.as_ref(),
            WieldLocation::TwoHands => self.two_hands.as_ref(),
            WieldLocation::Body => self.body.as_ref(),
            WieldLocation::Head => self.head.as_ref(),
            WieldLocation::Backpack => None,
        }
    }

    pub(crate) fn slot_mut(&mut self, location: WieldLocation) -> Option<&mut Option<ItemRef>> {
        match location {
            WieldLocation::MainHand => Some(&mut self.main_hand),
            WieldLocation::OffHand => Some(&mut self.off_hand),
            WieldLocation::TwoHands => Some(&mut self.two_hands),
            WieldLocation::Body => Some(&mut self.body),
            WieldLocation::Head => Some(&mut self.head),
            WieldLocation::Backpack => None,
        }
    }

    pub fn backpack(&self) -> &[ItemRef] {
        &self.backpack
    }

    pub(crate) fn backpack_mut(&mut self) -> &mut Vec<ItemRef> {
        &mut self.backpack
    }

    /// Every held item with its location: fixed slots first, then backpack
    pub fn all(&self) -> impl Iterator<Item = (&ItemRef, WieldLocation)> {
        WieldLocation::fixed()
            .iter()
            .filter_map(|&location| self.slot(location).map(|item| (item, location)))
            .chain(
                self.backpack
                    .iter()
                    .map(|item| (item, WieldLocation::Backpack)),
            )
    }

    /// Total size of everything held
    pub fn count_slots(&self) -> i64 {
        self.all().map(|(item, _)| i64::from(item.size())).sum()
    }

    /// Whether `item` fits next to what is already held
    pub fn check_fit(&self, item: &dyn Item, max_slots: i64) -> Result<bool, EquipmentError> {
        if !item.is_equippable() {
            return Err(EquipmentError::NotEquippable {
                key: item.key().to_string(),
            });
        }
        Ok(self.count_slots() + i64::from(item.size()) <= max_slots)
    }

    pub fn current_slot_of(&self, item: &dyn Item) -> Option<WieldLocation> {
        self.all()
            .find(|(held, _)| same_item(&***held, item))
            .map(|(_, location)| location)
    }

    /// Body armor (or the unarmored base) plus hand and head bonuses
    pub fn armor_value(&self) -> i64 {
        let bonus = |location| self.slot(location).map(|item| item.armor());
        bonus(WieldLocation::Body).unwrap_or(UNARMORED_BODY)
            + bonus(WieldLocation::MainHand).unwrap_or(0)
            + bonus(WieldLocation::OffHand).unwrap_or(0)
            + bonus(WieldLocation::Head).unwrap_or(0)
    }

    /// Two-handed weapon, else main-hand weapon, else bare hands
    pub fn weapon(&self) -> ItemRef {
        self.two_hands
            .as_ref()
            .or(self.main_hand.as_ref())
            .cloned()
            .unwrap_or_else(bare_hands)
    }

    pub fn loadout(&self) -> Loadout {
        Loadout {
            two_hands: self.two_hands.clone(),
            main_hand: self.main_hand.clone(),
            off_hand: self.off_hand.clone(),
            body: self.body.clone(),
            head: self.head.clone(),
        }
    }

    /// Persistable form: item ids by location
    pub fn to_record(&self) -> SlotRecord {
        let id = |slot: &Option<ItemRef>| slot.as_ref().map(|item| item.id());
        SlotRecord {
            main_hand: id(&self.main_hand),
            off_hand: id(&self.off_hand),
            two_hands: id(&self.two_hands),
            body: id(&self.body),
            head: id(&self.head),
            backpack: self.backpack.iter().map(|item| item.id()).collect(),
        }
    }

    /// Rebuild from a record, dropping ids the catalog no longer knows
    pub fn from_record(record: &SlotRecord, catalog: &dyn ItemCatalog) -> Self {
        let resolve = |id: ItemId| {
            let item = catalog.resolve(id);
            if item.is_none() {
                warn!(%id, "dropping unknown item from saved equipment");
            }
            item
        };
        EquipmentState {
            main_hand: record.main_hand.and_then(resolve),
            off_hand: record.off_hand.and_then(resolve),
            two_hands: record.two_hands.and_then(resolve),
            body: record.body.and_then(resolve),
            head: record.head.and_then(resolve),
            backpack: record.backpack.iter().filter_map(|&id| resolve(id)).collect(),
        }
    }
}

/// Item ids by location, as written to the attribute store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    #[serde(default)]
    pub main_hand: Option<ItemId>,
    #[serde(default)]
    pub off_hand: Option<ItemId>,
    #[serde(default)]
    pub two_hands: Option<ItemId>,
    #[serde(default)]
    pub body: Option<ItemId>,
    #[serde(default)]
    pub head: Option<ItemId>,
    #[serde(default)]
    pub backpack: Vec<ItemId>,
}

/// What an actor is wielding and wearing
#[derive(Debug, Clone, Default)]
pub struct Loadout {
    pub two_hands: Option<ItemRef>,
    pub main_hand: Option<ItemRef>,
    pub off_hand: Option<ItemRef>,
    pub body: Option<ItemRef>,
    pub head: Option<ItemRef>,
}

impl Loadout {
    /// Nothing wielded in either hand
    pub fn is_unarmed(&self) -> bool {
        self.two_hands.is_none() && self.main_hand.is_none()
    }
}

/// Slot usage against capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotUsage {
    pub used: i64,
    pub max: i64,
}

impl SlotUsage {
    pub fn free(&self) -> i64 {
        (self.max - self.used).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::item::{GameItem, ItemPrototype};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn item(id: u64, size: u32, armor: i64) -> ItemRef {
        let mut proto = ItemPrototype::new(format!("item{id}"));
        proto.size = size;
        proto.armor = armor;
        Arc::new(GameItem::new(ItemId(id), proto))
    }

    #[test]
    fn test_empty_state() {
        let state = EquipmentState::new();
        assert_eq!(state.count_slots(), 0);
        assert_eq!(state.armor_value(), UNARMORED_BODY);
        assert_eq!(state.weapon().id(), ItemId::BARE_HANDS);
        assert!(state.loadout().is_unarmed());
    }

    #[test]
    fn test_count_and_scan_order() {
        let mut state = EquipmentState::new();
        let sword = item(1, 2, 0);
        let rope = item(2, 3, 0);
        *state.slot_mut(WieldLocation::MainHand).unwrap() = Some(sword.clone());
        state.backpack_mut().push(rope.clone());

        assert_eq!(state.count_slots(), 5);
        assert_eq!(state.current_slot_of(&*sword), Some(WieldLocation::MainHand));
        assert_eq!(state.current_slot_of(&*rope), Some(WieldLocation::Backpack));
        assert_eq!(state.current_slot_of(&*item(3, 1, 0)), None);
    }

    #[test]
    fn test_armor_value_sums_slots() {
        let mut state = EquipmentState::new();
        *state.slot_mut(WieldLocation::Body).unwrap() = Some(item(1, 1, 3));
        *state.slot_mut(WieldLocation::OffHand).unwrap() = Some(item(2, 1, 1));
        *state.slot_mut(WieldLocation::Head).unwrap() = Some(item(3, 1, 1));
        assert_eq!(state.armor_value(), 5);
    }

    #[test]
    fn test_not_equippable() {
        let state = EquipmentState::new();
        assert_eq!(
            state.check_fit(&*bare_hands(), 10),
            Err(EquipmentError::NotEquippable {
                key: "bare hands".to_string()
            })
        );
    }

    #[test]
    fn test_record_round_trip_drops_unknown() {
        let mut state = EquipmentState::new();
        let axe = item(7, 2, 0);
        *state.slot_mut(WieldLocation::TwoHands).unwrap() = Some(axe.clone());
        state.backpack_mut().push(item(8, 1, 0));

        let record = state.to_record();
        assert_eq!(record.two_hands, Some(ItemId(7)));
        assert_eq!(record.backpack, vec![ItemId(8)]);

        let mut known: HashMap<ItemId, ItemRef> = HashMap::new();
        known.insert(axe.id(), axe);
        let restored = EquipmentState::from_record(&record, &known);
        assert_eq!(restored.weapon().id(), ItemId(7));
        assert!(restored.backpack().is_empty());
    }
}
