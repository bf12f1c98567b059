//! Item prototype configuration loading

use super::ConfigError;
use crate::equipment::{ItemPrototype, PrototypeCatalog};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Container for item prototypes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsConfig {
    #[serde(default)]
    pub items: Vec<ItemPrototype>,
}

impl ItemsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if item.key.is_empty() {
                return Err(ConfigError::ValidationError(
                    "item key cannot be empty".to_string(),
                ));
            }
            if !seen.insert(item.key.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate item key '{}'",
                    item.key
                )));
            }
        }
        Ok(())
    }

    fn into_catalog(self) -> PrototypeCatalog {
        let mut catalog = PrototypeCatalog::new();
        for item in self.items {
            catalog.register(item);
        }
        catalog
    }
}

/// Load item prototypes from a TOML file
pub fn load_item_configs(path: &Path) -> Result<PrototypeCatalog, ConfigError> {
    let config: ItemsConfig = super::load_toml(path)?;
    config.validate()?;
    Ok(config.into_catalog())
}

/// Load item prototypes from a TOML string
pub fn parse_item_configs(content: &str) -> Result<PrototypeCatalog, ConfigError> {
    let config: ItemsConfig = super::parse_toml(content)?;
    config.validate()?;
    Ok(config.into_catalog())
}

/// Items shipped with the crate
pub fn default_items() -> PrototypeCatalog {
    let toml = include_str!("../../config/items.toml");
    parse_item_configs(toml).unwrap_or_default()
}
