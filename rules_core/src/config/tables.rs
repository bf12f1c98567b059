//! Random table configuration loading

use super::ConfigError;
use crate::dice::{RandomTable, TableRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for named random tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesConfig {
    #[serde(default)]
    pub tables: HashMap<String, RandomTable<String>>,
}

fn into_registry(config: TablesConfig) -> TableRegistry {
    let mut registry = TableRegistry::new();
    for (name, table) in config.tables {
        registry.register(name, table);
    }
    registry
}

/// Load random tables from a TOML file
pub fn load_table_configs(path: &Path) -> Result<TableRegistry, ConfigError> {
    let config: TablesConfig = super::load_toml(path)?;
    Ok(into_registry(config))
}

/// Load random tables from a TOML string
pub fn parse_table_configs(content: &str) -> Result<TableRegistry, ConfigError> {
    let config: TablesConfig = super::parse_toml(content)?;
    Ok(into_registry(config))
}

/// Tables shipped with the crate
pub fn default_tables() -> TableRegistry {
    let toml = include_str!("../../config/tables.toml");
    parse_table_configs(toml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tables() {
        let toml = r#"
[tables]
weather = ["clear", "rain", "storm"]
encounter = [["1-4", "nothing"], ["5", "wolves"], ["6-6", "bandits"]]
"#;

        let registry = parse_table_configs(toml).unwrap();
        let weather = registry.get("weather").unwrap();
        assert!(matches!(weather, RandomTable::Flat(_)));
        assert_eq!(weather.len(), 3);

        let encounter = registry.get("encounter").unwrap();
        assert!(matches!(encounter, RandomTable::Ranged(_)));
        assert_eq!(encounter.lookup("1d6", 5).unwrap(), "wolves");
    }

    #[test]
    fn test_default_tables_load() {
        let toml = include_str!("../../config/tables.toml");
        let registry = parse_table_configs(toml).unwrap();

        let names = registry.get("name").unwrap();
        assert_eq!(names.len(), 20);

        // every 1d20 result must land on a physique
        let physique = registry.get("physique").unwrap();
        for roll in 1..=20 {
            assert!(physique.lookup("1d20", roll).is_ok(), "roll {roll} uncovered");
        }
        assert!(default_tables().get("physique").is_some());
    }
}
