//! Random tables: flat lists or inclusive range-keyed entries

use super::spec::{FormatError, TableRange};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Random table lookup failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The table does not cover every value the die can produce
    #[error("roll of {roll} on {spec} is outside every range in the table")]
    OutOfBounds { spec: String, roll: i64 },
    #[error("random table has no entries")]
    Empty,
    #[error("no random table named '{0}'")]
    Unknown(String),
}

/// A table of outcomes picked by a die roll
///
/// Flat tables are indexed `1..=len` and clamp out-of-range rolls onto the
/// nearest end. Ranged tables pick the first entry whose range holds the
/// roll and reject rolls no range covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RandomTable<T> {
    Ranged(Vec<(TableRange, T)>),
    Flat(Vec<T>),
}

impl<T> RandomTable<T> {
    pub fn len(&self) -> usize {
        match self {
            RandomTable::Ranged(entries) => entries.len(),
            RandomTable::Flat(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry selected by an already-rolled value
    pub fn lookup(&self, spec: &str, roll: i64) -> Result<&T, TableError> {
        match self {
            RandomTable::Ranged(entries) => entries
                .iter()
                .find(|(range, _)| range.contains(roll))
                .map(|(_, value)| value)
                .ok_or_else(|| TableError::OutOfBounds {
                    spec: spec.to_string(),
                    roll,
                }),
            RandomTable::Flat(entries) => {
                if entries.is_empty() {
                    return Err(TableError::Empty);
                }
                let last = entries.len() as i64;
                let index = roll.clamp(1, last) - 1;
                Ok(&entries[index as usize])
            }
        }
    }
}

/// Named string tables, as loaded from configuration
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: HashMap<String, RandomTable<String>>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, table: RandomTable<String>) {
        self.tables.insert(name.into(), table);
    }

    pub fn get(&self, name: &str) -> Option<&RandomTable<String>> {
        self.tables.get(name)
    }

    /// Table by name, or `TableError::Unknown`
    pub fn require(&self, name: &str) -> Result<&RandomTable<String>, TableError> {
        self.get(name).ok_or_else(|| TableError::Unknown(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranged() -> RandomTable<&'static str> {
        RandomTable::Ranged(vec![
            ("1-5".parse().unwrap(), "goblin"),
            ("6-6".parse().unwrap(), "troll"),
            ("7-10".parse().unwrap(), "nothing"),
        ])
    }

    #[test]
    fn test_ranged_lookup() {
        let table = ranged();
        assert_eq!(table.lookup("1d10", 1), Ok(&"goblin"));
        assert_eq!(table.lookup("1d10", 6), Ok(&"troll"));
        assert_eq!(table.lookup("1d10", 10), Ok(&"nothing"));
    }

    #[test]
    fn test_ranged_lookup_rejects_uncovered_roll() {
        let table = ranged();
        assert_eq!(
            table.lookup("1d12", 11),
            Err(TableError::OutOfBounds {
                spec: "1d12".to_string(),
                roll: 11
            })
        );
    }

    #[test]
    fn test_flat_lookup_clamps() {
        let table = RandomTable::Flat(vec!["a", "b", "c"]);
        assert_eq!(table.lookup("1d3", 2), Ok(&"b"));
        assert_eq!(table.lookup("1d6", 6), Ok(&"c"));
        assert_eq!(table.lookup("1d6", 0), Ok(&"a"));
    }

    #[test]
    fn test_empty_tables() {
        let flat: RandomTable<&str> = RandomTable::Flat(vec![]);
        assert_eq!(flat.lookup("1d6", 3), Err(TableError::Empty));

        let ranged: RandomTable<&str> = RandomTable::Ranged(vec![]);
        assert!(matches!(
            ranged.lookup("1d6", 3),
            Err(TableError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_deserialize_both_shapes() {
        let flat: RandomTable<String> = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(flat, RandomTable::Flat(vec!["a".to_string(), "b".to_string()]));

        let ranged: RandomTable<String> =
            serde_json::from_str(r#"[["1-3", "low"], ["4-6", "high"]]"#).unwrap();
        assert_eq!(ranged.len(), 2);
        assert_eq!(ranged.lookup("1d6", 5).unwrap(), "high");
    }

    #[test]
    fn test_registry_require() {
        let mut registry = TableRegistry::new();
        registry.register("loot", RandomTable::Flat(vec!["coin".to_string()]));
        assert!(registry.require("loot").is_ok());
        assert_eq!(
            registry.require("weather").unwrap_err(),
            TableError::Unknown("weather".to_string())
        );
    }
}
