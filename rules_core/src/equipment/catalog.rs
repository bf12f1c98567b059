//! Item lookup: resolving persisted ids and spawning from prototypes

use super::item::{GameItem, ItemId, ItemPrototype, ItemRef};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Resolves persisted item ids back into live items
pub trait ItemCatalog {
    fn resolve(&self, id: ItemId) -> Option<ItemRef>;
}

/// Prototype registry that also tracks the items it has spawned
#[derive(Debug, Default)]
pub struct PrototypeCatalog {
    prototypes: HashMap<String, ItemPrototype>,
    spawned: HashMap<ItemId, ItemRef>,
    next_id: u64,
}

impl PrototypeCatalog {
    pub fn new() -> Self {
        PrototypeCatalog {
            prototypes: HashMap::new(),
            spawned: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn register(&mut self, prototype: ItemPrototype) {
        self.prototypes.insert(prototype.key.clone(), prototype);
    }

    pub fn prototype(&self, key: &str) -> Option<&ItemPrototype> {
        self.prototypes.get(key)
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Create a new item from the prototype `key`
    pub fn spawn(&mut self, key: &str) -> Option<ItemRef> {
        let prototype = self.prototypes.get(key)?.clone();
        let id = ItemId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        let item: ItemRef = Arc::new(GameItem::new(id, prototype));
        self.spawned.insert(id, item.clone());
        debug!(key, %id, "spawned item");
        Some(item)
    }

    /// Forget a spawned item
    pub fn destroy(&mut self, id: ItemId) -> Option<ItemRef> {
        self.spawned.remove(&id)
    }
}

impl ItemCatalog for PrototypeCatalog {
    fn resolve(&self, id: ItemId) -> Option<ItemRef> {
        self.spawned.get(&id).cloned()
    }
}

impl ItemCatalog for HashMap<ItemId, ItemRef> {
    fn resolve(&self, id: ItemId) -> Option<ItemRef> {
        self.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_assigns_fresh_ids() {
        let mut catalog = PrototypeCatalog::new();
        catalog.register(ItemPrototype::new("ration"));

        let first = catalog.spawn("ration").unwrap();
        let second = catalog.spawn("ration").unwrap();
        assert_ne!(first.id(), second.id());
        assert_ne!(first.id(), ItemId::BARE_HANDS);
        assert_eq!(first.key(), "ration");
    }

    #[test]
    fn test_resolve_spawned() {
        let mut catalog = PrototypeCatalog::new();
        catalog.register(ItemPrototype::new("rope"));
        let rope = catalog.spawn("rope").unwrap();

        assert_eq!(catalog.resolve(rope.id()).unwrap().key(), "rope");
        assert!(catalog.destroy(rope.id()).is_some());
        assert!(catalog.resolve(rope.id()).is_none());
    }

    #[test]
    fn test_unknown_prototype() {
        let mut catalog = PrototypeCatalog::new();
        assert!(catalog.spawn("dragon").is_none());
    }
}
