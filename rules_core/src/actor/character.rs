//! Character - Player character backed by an attribute store

use super::{Actor, ActorKind};
use crate::config::EquipmentConstants;
use crate::equipment::{
    Carrier, EquipmentError, EquipmentManager, EquipmentState, Item, ItemCatalog, ItemRef,
    SlotRecord, DEFAULT_CAPACITY_BONUS,
};
use crate::room::RoomRules;
use crate::store::{AttributeStore, AttributeStoreExt, MemoryStore};
use crate::types::Ability;
use tracing::warn;

/// Store key the equipment record is persisted under
pub const INVENTORY_KEY: &str = "inventory_slots";

const DEFAULT_ABILITY: i64 = 1;
const DEFAULT_HP: i64 = 8;
const DEFAULT_CLASS: &str = "Fighter";
const DEFAULT_RACE: &str = "Human";

/// A player character
///
/// Every stat lives in the store and is defaulted on read. Armor is not
/// stored: it is derived from what the character is wearing.
#[derive(Debug)]
pub struct Character<S: AttributeStore = MemoryStore> {
    key: String,
    store: S,
    equipment: EquipmentState,
    location: Option<RoomRules>,
    capacity_bonus: i64,
}

impl<S: AttributeStore> Character<S> {
    /// Character with nothing equipped
    pub fn new(key: impl Into<String>, store: S) -> Self {
        Character {
            key: key.into(),
            store,
            equipment: EquipmentState::new(),
            location: None,
            capacity_bonus: DEFAULT_CAPACITY_BONUS,
        }
    }

    /// Character with nothing equipped, carrying capacity from `constants`
    pub fn with_constants(
        key: impl Into<String>,
        store: S,
        constants: &EquipmentConstants,
    ) -> Self {
        Self::new(key, store).with_capacity_bonus(constants.capacity_bonus)
    }

    /// Character whose equipment is restored from the store
    pub fn load(key: impl Into<String>, store: S, catalog: &dyn ItemCatalog) -> Self {
        let record: SlotRecord = store.get(INVENTORY_KEY, SlotRecord::default());
        let equipment = EquipmentState::from_record(&record, catalog);
        Character {
            equipment,
            ..Character::new(key, store)
        }
    }

    pub fn with_capacity_bonus(mut self, bonus: i64) -> Self {
        self.capacity_bonus = bonus;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Rules-enforcing view of the character's equipment
    pub fn equipment(&mut self) -> EquipmentManager<'_, Self> {
        EquipmentManager::new(self)
    }

    pub fn location(&self) -> Option<&RoomRules> {
        self.location.as_ref()
    }

    pub fn set_location(&mut self, location: Option<RoomRules>) {
        self.location = location;
    }

    /// Display name, the key until one is set
    pub fn name(&self) -> String {
        self.store.get("name", self.key.clone())
    }

    pub fn set_name(&mut self, name: &str) {
        self.set_text("name", name);
    }

    pub fn description(&self) -> String {
        self.store.get("desc", String::new())
    }

    pub fn set_description(&mut self, description: &str) {
        self.set_text("desc", description);
    }

    pub fn charclass(&self) -> String {
        self.store.get("charclass", DEFAULT_CLASS.to_string())
    }

    pub fn charrace(&self) -> String {
        self.store.get("charrace", DEFAULT_RACE.to_string())
    }

    pub fn level(&self) -> i64 {
        self.store.get_int("level", 1)
    }

    pub fn set_level(&mut self, level: i64) {
        self.store.set_int("level", level);
    }

    pub fn xp(&self) -> i64 {
        self.store.get_int("xp", 0)
    }

    pub fn set_xp(&mut self, xp: i64) {
        self.store.set_int("xp", xp);
    }

    /// Write an ability score. Armor is derived and cannot be set.
    pub fn set_ability(&mut self, ability: Ability, value: i64) {
        if ability == Ability::Armor {
            warn!(character = %self.key, "armor comes from equipment, ignoring set");
            return;
        }
        self.store.set_int(ability.key(), value);
    }

    pub fn set_hp_max(&mut self, hp_max: i64) {
        self.store.set_int("hp_max", hp_max);
    }

    /// Whether the item fits next to what the character already carries
    pub fn can_receive(&self, item: &dyn Item) -> Result<bool, EquipmentError> {
        self.equipment.check_fit(item, self.max_slots())
    }

    /// Pick an item up into the backpack. Returns whether it was taken.
    pub fn receive(&mut self, item: ItemRef) -> bool {
        let key = item.key().to_string();
        match self.equipment().add(item) {
            Ok(added) => added,
            Err(err) => {
                warn!(character = %self.key, item = %key, error = %err, "cannot pick up");
                false
            }
        }
    }

    /// Let go of an item wherever it is held
    pub fn release(&mut self, item: &ItemRef) -> Option<ItemRef> {
        self.equipment().remove(item).into_iter().next()
    }

    fn set_text(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, &value) {
            warn!(character = %self.key, error = %err, "failed to store attribute");
        }
    }
}

impl<S: AttributeStore> Actor for Character<S> {
    fn key(&self) -> &str {
        &self.key
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Character
    }

    fn ability(&self, ability: Ability) -> Option<i64> {
        match ability {
            Ability::Armor => Some(self.equipment.armor_value()),
            _ => Some(self.store.get_int(ability.key(), DEFAULT_ABILITY)),
        }
    }

    fn hp(&self) -> i64 {
        self.store.get_int("hp", DEFAULT_HP)
    }

    fn set_hp(&mut self, hp: i64) {
        self.store.set_int("hp", hp);
    }

    fn hp_max(&self) -> i64 {
        self.store.get_int("hp_max", DEFAULT_HP)
    }

    fn coins(&self) -> i64 {
        self.store.get_int("coins", 0)
    }

    fn set_coins(&mut self, coins: i64) {
        self.store.set_int("coins", coins);
    }

    fn allows_lethal(&self) -> bool {
        self.location.is_some_and(|room| room.allow_death)
    }

    fn weapon(&self) -> ItemRef {
        self.equipment.weapon()
    }
}

impl<S: AttributeStore> Carrier for Character<S> {
    fn equipment_state(&self) -> &EquipmentState {
        &self.equipment
    }

    fn equipment_state_mut(&mut self) -> &mut EquipmentState {
        &mut self.equipment
    }

    fn save_equipment(&mut self) {
        let record = self.equipment.to_record();
        if let Err(err) = self.store.set(INVENTORY_KEY, &record) {
            warn!(character = %self.key, error = %err, "failed to save equipment");
        }
    }

    fn capacity_bonus(&self) -> i64 {
        self.capacity_bonus
    }
}
