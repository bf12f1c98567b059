//! EquipmentManager - Capacity and wield rules over an actor's equipment
//!
//! The manager borrows its owner for the duration of a change. Every
//! mutation ends with the owner persisting its state, and every path
//! leaves `count_slots() <= max_slots()` and never has `TwoHands` occupied
//! alongside either single hand.

use super::item::{same_item, Item, ItemRef};
use super::state::{EquipmentError, EquipmentState, Loadout, SlotUsage};
use crate::actor::Actor;
use crate::types::{Ability, WieldLocation};
use tracing::{debug, info, warn};

/// Slots carried on top of constitution unless the owner says otherwise
pub const DEFAULT_CAPACITY_BONUS: i64 = 20;

/// An actor that carries equipment
pub trait Carrier: Actor {
    fn equipment_state(&self) -> &EquipmentState;

    fn equipment_state_mut(&mut self) -> &mut EquipmentState;

    /// Write the current equipment state to persistent storage
    fn save_equipment(&mut self);

    fn capacity_bonus(&self) -> i64 {
        DEFAULT_CAPACITY_BONUS
    }

    /// Constitution plus the capacity bonus
    fn max_slots(&self) -> i64 {
        self.ability(Ability::Constitution).unwrap_or(1) + self.capacity_bonus()
    }
}

/// What to take out of equipment
#[derive(Debug, Clone, Copy)]
pub enum Removal<'i> {
    /// Clear one fixed slot, or empty the whole backpack
    Slot(WieldLocation),
    /// Take out one specific item wherever it is
    Item(&'i dyn Item),
}

impl From<WieldLocation> for Removal<'_> {
    fn from(location: WieldLocation) -> Self {
        Removal::Slot(location)
    }
}

impl<'i> From<&'i ItemRef> for Removal<'i> {
    fn from(item: &'i ItemRef) -> Self {
        Removal::Item(&**item)
    }
}

/// Rules-enforcing view over a carrier's equipment
pub struct EquipmentManager<'a, C: Carrier> {
    owner: &'a mut C,
}

impl<'a, C: Carrier> EquipmentManager<'a, C> {
    pub fn new(owner: &'a mut C) -> Self {
        EquipmentManager { owner }
    }

    fn state(&self) -> &EquipmentState {
        self.owner.equipment_state()
    }

    fn state_mut(&mut self) -> &mut EquipmentState {
        self.owner.equipment_state_mut()
    }

    pub fn max_slots(&self) -> i64 {
        self.owner.max_slots()
    }

    pub fn count_slots(&self) -> i64 {
        self.state().count_slots()
    }

    pub fn slot_usage(&self) -> SlotUsage {
        SlotUsage {
            used: self.count_slots(),
            max: self.max_slots(),
        }
    }

    /// `Ok(false)` when the item would exceed capacity
    pub fn validate_slot_usage(&self, item: &dyn Item) -> Result<bool, EquipmentError> {
        self.state().check_fit(item, self.max_slots())
    }

    /// Put an item in the backpack. An item that does not fit is left where
    /// it is; the return value tells whether it was added.
    pub fn add(&mut self, item: ItemRef) -> Result<bool, EquipmentError> {
        if !self.validate_slot_usage(&*item)? {
            warn!(
                owner = self.owner.key(),
                item = item.key(),
                usage = self.count_slots(),
                max = self.max_slots(),
                "item does not fit"
            );
            return Ok(false);
        }
        debug!(owner = self.owner.key(), item = item.key(), "added to backpack");
        self.state_mut().backpack_mut().push(item);
        self.owner.save_equipment();
        Ok(true)
    }

    /// Take items out of equipment, returning whatever was removed
    pub fn remove<'i>(&mut self, target: impl Into<Removal<'i>>) -> Vec<ItemRef> {
        let removed = match target.into() {
            Removal::Slot(WieldLocation::Backpack) => std::mem::take(self.state_mut().backpack_mut()),
            Removal::Slot(location) => self
                .state_mut()
                .slot_mut(location)
                .and_then(Option::take)
                .into_iter()
                .collect(),
            Removal::Item(item) => self.take_item(item).into_iter().collect(),
        };
        if !removed.is_empty() {
            self.owner.save_equipment();
        }
        removed
    }

    fn take_item(&mut self, item: &dyn Item) -> Option<ItemRef> {
        let state = self.state_mut();
        for &location in WieldLocation::fixed() {
            if let Some(slot) = state.slot_mut(location) {
                if slot.as_ref().is_some_and(|held| same_item(&**held, item)) {
                    return slot.take();
                }
            }
        }
        let backpack = state.backpack_mut();
        let index = backpack
            .iter()
            .position(|held| same_item(&**held, item))?;
        Some(backpack.remove(index))
    }

    /// Move an item to where it is meant to be used
    ///
    /// The item is first taken out of equipment. If it then no longer fits it
    /// stays out and `Ok(false)` is returned. A two-handed item pushes both
    /// hands into the backpack; a one-handed item pushes the two-handed slot
    /// into the backpack. Body and head items replace the previous occupant,
    /// which is dropped, as is a previous occupant of the same hand.
    pub fn move_item(&mut self, item: ItemRef) -> Result<bool, EquipmentError> {
        self.remove(&item);
        if !self.validate_slot_usage(&*item)? {
            warn!(
                owner = self.owner.key(),
                item = item.key(),
                "item no longer fits after unequipping"
            );
            return Ok(false);
        }

        let location = item.wield_location();
        let key = item.key().to_string();
        let state = self.state_mut();
        let mut to_backpack = Vec::new();
        let mut dropped = None;
        match location {
            WieldLocation::TwoHands => {
                to_backpack.extend(state.slot_mut(WieldLocation::MainHand).and_then(Option::take));
                to_backpack.extend(state.slot_mut(WieldLocation::OffHand).and_then(Option::take));
                dropped = state.slot_mut(location).and_then(|slot| slot.replace(item));
            }
            WieldLocation::MainHand | WieldLocation::OffHand => {
                to_backpack.extend(state.slot_mut(WieldLocation::TwoHands).and_then(Option::take));
                dropped = state.slot_mut(location).and_then(|slot| slot.replace(item));
            }
            WieldLocation::Body | WieldLocation::Head => {
                dropped = state.slot_mut(location).and_then(|slot| slot.replace(item));
            }
            WieldLocation::Backpack => to_backpack.push(item),
        }
        state.backpack_mut().extend(to_backpack);

        if let Some(old) = dropped {
            info!(owner = self.owner.key(), item = old.key(), "replaced item dropped");
        }
        info!(owner = self.owner.key(), item = %key, ?location, "equipped");
        self.owner.save_equipment();
        Ok(true)
    }

    /// Body armor (1 when unarmored) plus hand and head bonuses
    pub fn armor_value(&self) -> i64 {
        self.state().armor_value()
    }

    /// Two-handed weapon, else main-hand weapon, else bare hands
    pub fn weapon_value(&self) -> ItemRef {
        self.state().weapon()
    }

    pub fn current_slot_of(&self, item: &dyn Item) -> Option<WieldLocation> {
        self.state().current_slot_of(item)
    }

    pub fn loadout(&self) -> Loadout {
        self.state().loadout()
    }

    pub fn backpack(&self) -> &[ItemRef] {
        self.state().backpack()
    }

    fn backpack_where(&self, keep: impl Fn(&ItemRef) -> bool) -> Vec<ItemRef> {
        self.state()
            .backpack()
            .iter()
            .filter(|item| keep(item))
            .cloned()
            .collect()
    }

    /// Backpack items meant for the hands
    pub fn wieldable_from_backpack(&self) -> Vec<ItemRef> {
        self.backpack_where(|item| item.wield_location().is_wielded())
    }

    /// Backpack items meant for the body or head
    pub fn wearable_from_backpack(&self) -> Vec<ItemRef> {
        self.backpack_where(|item| item.wield_location().is_worn())
    }

    /// Backpack items the owner can use right now
    pub fn usable_from_backpack(&self) -> Vec<ItemRef> {
        let owner: &dyn Actor = &*self.owner;
        self.backpack_where(|item| item.is_usable_by(owner))
    }
}
