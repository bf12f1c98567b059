//! Equipment: items, slot state, and the capacity-enforcing manager

mod catalog;
mod item;
mod manager;
mod state;

pub use catalog::{ItemCatalog, PrototypeCatalog};
pub use item::{bare_hands, same_item, BareHands, GameItem, Item, ItemId, ItemPrototype, ItemRef};
pub use manager::{Carrier, EquipmentManager, Removal, DEFAULT_CAPACITY_BONUS};
pub use state::{EquipmentError, EquipmentState, Loadout, SlotRecord, SlotUsage, UNARMORED_BODY};
