//! Npc - Non-player actor whose stats follow from its hit dice

use super::{Actor, ActorKind};
use crate::config::NpcConstants;
use crate::equipment::{bare_hands, ItemCatalog, ItemId, ItemRef};
use crate::store::{AttributeStore, AttributeStoreExt, MemoryStore};
use crate::types::{Ability, Allegiance};
use tracing::warn;

/// A non-player actor
///
/// Hit dice stand in for all six base abilities. NPCs have no luck score;
/// their armor and weapon are plain attributes rather than equipment.
#[derive(Debug)]
pub struct Npc<S: AttributeStore = MemoryStore> {
    key: String,
    store: S,
    defaults: NpcConstants,
    weapon: Option<ItemRef>,
}

impl<S: AttributeStore> Npc<S> {
    pub fn new(key: impl Into<String>, store: S) -> Self {
        Self::with_defaults(key, store, NpcConstants::default())
    }

    pub fn with_defaults(key: impl Into<String>, store: S, defaults: NpcConstants) -> Self {
        Npc {
            key: key.into(),
            store,
            defaults,
            weapon: None,
        }
    }

    /// New NPC starting at full health
    pub fn spawn(key: impl Into<String>, store: S, defaults: NpcConstants) -> Self {
        let mut npc = Self::with_defaults(key, store, defaults);
        let hp_max = npc.hp_max();
        npc.set_hp(hp_max);
        npc
    }

    /// NPC whose weapon is restored from the store
    pub fn load(
        key: impl Into<String>,
        store: S,
        defaults: NpcConstants,
        catalog: &dyn ItemCatalog,
    ) -> Self {
        let mut npc = Self::with_defaults(key, store, defaults);
        let saved: Option<ItemId> = npc.store.get("weapon", None);
        npc.weapon = saved.and_then(|id| {
            let weapon = catalog.resolve(id);
            if weapon.is_none() {
                warn!(npc = %npc.key, %id, "saved weapon no longer exists");
            }
            weapon
        });
        npc
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn hit_dice(&self) -> i64 {
        self.store.get_int("hit_dice", self.defaults.hit_dice)
    }

    pub fn set_hit_dice(&mut self, hit_dice: i64) {
        self.store.set_int("hit_dice", hit_dice);
    }

    pub fn set_armor(&mut self, armor: i64) {
        self.store.set_int("armor", armor);
    }

    pub fn set_morale(&mut self, morale: i64) {
        self.store.set_int("morale", morale);
    }

    pub fn allegiance(&self) -> Allegiance {
        self.store.get("allegiance", Allegiance::default())
    }

    pub fn set_allegiance(&mut self, allegiance: Allegiance) {
        if let Err(err) = self.store.set("allegiance", &allegiance) {
            warn!(npc = %self.key, error = %err, "failed to store allegiance");
        }
    }

    /// Arm the NPC, or pass `None` to fight bare-handed
    pub fn set_weapon(&mut self, weapon: Option<ItemRef>) {
        match &weapon {
            Some(item) => {
                if let Err(err) = self.store.set("weapon", &item.id()) {
                    warn!(npc = %self.key, error = %err, "failed to store weapon");
                }
            }
            None => {
                self.store.remove("weapon");
            }
        }
        self.weapon = weapon;
    }
}

impl<S: AttributeStore> Actor for Npc<S> {
    fn key(&self) -> &str {
        &self.key
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Npc
    }

    fn ability(&self, ability: Ability) -> Option<i64> {
        match ability {
            Ability::Luck => None,
            Ability::Armor => Some(self.store.get_int("armor", self.defaults.armor)),
            _ => Some(self.hit_dice()),
        }
    }

    fn hp(&self) -> i64 {
        self.store.get_int("hp", self.hp_max())
    }

    fn set_hp(&mut self, hp: i64) {
        self.store.set_int("hp", hp);
    }

    fn hp_max(&self) -> i64 {
        self.hit_dice() * self.defaults.hp_multiplier
    }

    fn coins(&self) -> i64 {
        self.store.get_int("coins", self.defaults.coins)
    }

    fn set_coins(&mut self, coins: i64) {
        self.store.set_int("coins", coins);
    }

    fn morale(&self) -> Option<i64> {
        self.store.get("morale", None)
    }

    fn weapon(&self) -> ItemRef {
        self.weapon.clone().unwrap_or_else(bare_hands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{Item, PrototypeCatalog};

    fn goblin() -> Npc {
        Npc::spawn("goblin", MemoryStore::new(), NpcConstants::default())
    }

    #[test]
    fn test_hit_dice_drive_stats() {
        let mut npc = goblin();
        assert_eq!(npc.hp_max(), 4);
        assert_eq!(npc.hp(), 4);
        assert_eq!(npc.ability(Ability::Strength), Some(1));
        assert_eq!(npc.ability(Ability::Luck), None);
        assert_eq!(npc.ability(Ability::Armor), Some(1));

        npc.set_hit_dice(3);
        assert_eq!(npc.hp_max(), 12);
        assert_eq!(npc.ability(Ability::Wisdom), Some(3));
    }

    #[test]
    fn test_defaults() {
        let npc = goblin();
        assert_eq!(npc.coins(), 1);
        assert_eq!(npc.morale(), None);
        assert_eq!(npc.allegiance(), Allegiance::Hostile);
        assert_eq!(npc.weapon().id(), ItemId::BARE_HANDS);
        assert_eq!(npc.kind(), ActorKind::Npc);
    }

    #[test]
    fn test_hp_multiplier_from_config() {
        let defaults = NpcConstants {
            hp_multiplier: 6,
            ..NpcConstants::default()
        };
        let npc = Npc::spawn("ogre", MemoryStore::new(), defaults);
        assert_eq!(npc.hp(), 6);
    }

    #[test]
    fn test_weapon_persists() {
        let mut catalog = crate::config::default_items();
        let dagger = catalog.spawn("dagger").unwrap();

        let mut npc = goblin();
        npc.set_weapon(Some(dagger.clone()));
        npc.set_allegiance(Allegiance::Neutral);
        let store = npc.into_store();

        let restored = Npc::load("goblin", store, NpcConstants::default(), &catalog);
        assert_eq!(restored.weapon().id(), dagger.id());
        assert_eq!(restored.allegiance(), Allegiance::Neutral);

        let empty = PrototypeCatalog::new();
        let unarmed = Npc::load("goblin", restored.into_store(), NpcConstants::default(), &empty);
        assert_eq!(unarmed.weapon().id(), ItemId::BARE_HANDS);
    }
}
