//! Data-driven actor value name table
//!
//! An [`ActorValueResolver`] backed by an explicit list of (id, name) pairs.
//! Hosts that expose their own resolver don't need this; it exists for hosts
//! that ship the table as data and for tests.
//!
//! ```toml
//! [[actor_value]]
//! id = 6
//! name = "OneHanded"
//!
//! [[actor_value]]
//! id = 16
//! name = "Alchemy"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use fire_engine::ActorValueResolver;
use fire_sdk::ActorValue;

use crate::config::ConfigResult;

/// One entry of the table file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorValueName {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TableFile {
    #[serde(default, rename = "actor_value")]
    actor_values: Vec<ActorValueName>,
}

/// Actor value names, looked up case-insensitively
#[derive(Debug, Clone, Default)]
pub struct ActorValueTable {
    /// Lowercase name -> id
    by_name: HashMap<String, ActorValue>,
    /// Id -> display name as authored
    by_id: HashMap<ActorValue, String>,
}

impl ActorValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any previous entry with the same id or name
    pub fn insert(&mut self, value: ActorValue, name: impl Into<String>) {
        let name = name.into();
        let name_lower = name.to_lowercase();

        if let Some(previous) = self.by_id.insert(value, name.clone()) {
            if previous != name {
                tracing::warn!("Actor value {} renamed from '{}' to '{}'", value, previous, name);
                self.by_name.remove(&previous.to_lowercase());
            }
        }
        if let Some(previous) = self.by_name.insert(name_lower, value) {
            if previous != value {
                tracing::warn!("Actor value name reassigned from {} to {}", previous, value);
                self.by_id.remove(&previous);
            }
        }
    }

    /// Parse a table from TOML
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let file: TableFile = toml::from_str(content)?;
        Ok(file
            .actor_values
            .into_iter()
            .map(|entry| (ActorValue::from_raw(entry.id), entry.name))
            .collect())
    }

    /// Load a table from a TOML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded {} actor value names from {:?}", table.len(), path);
        Ok(table)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(ActorValue, S)> for ActorValueTable {
    fn from_iter<I: IntoIterator<Item = (ActorValue, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (value, name) in iter {
            table.insert(value, name);
        }
        table
    }
}

impl ActorValueResolver for ActorValueTable {
    fn lookup_id(&self, name: &str) -> ActorValue {
        self.by_name
            .get(&name.to_lowercase())
            .copied()
            .unwrap_or(ActorValue::NONE)
    }

    fn lookup_name(&self, value: ActorValue) -> String {
        self.by_id.get(&value).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ActorValueTable {
        [
            (ActorValue::from_raw(6), "OneHanded"),
            (ActorValue::from_raw(16), "Alchemy"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_lookup_id_case_insensitive() {
        let table = table();
        assert_eq!(table.lookup_id("Alchemy"), ActorValue::from_raw(16));
        assert_eq!(table.lookup_id("ALCHEMY"), ActorValue::from_raw(16));
        assert_eq!(table.lookup_id("onehanded"), ActorValue::from_raw(6));
    }

    #[test]
    fn test_lookup_unknown() {
        let table = table();
        assert_eq!(table.lookup_id("Juggling"), ActorValue::NONE);
        assert_eq!(table.lookup_name(ActorValue::from_raw(99)), "");
    }

    #[test]
    fn test_lookup_name_preserves_case() {
        let table = table();
        assert_eq!(table.lookup_name(ActorValue::from_raw(6)), "OneHanded");
    }

    #[test]
    fn test_insert_replaces_name() {
        let mut table = table();
        table.insert(ActorValue::from_raw(6), "Blade");

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup_name(ActorValue::from_raw(6)), "Blade");
        assert_eq!(table.lookup_id("OneHanded"), ActorValue::NONE);
        assert_eq!(table.lookup_id("Blade"), ActorValue::from_raw(6));
    }

    #[test]
    fn test_from_toml_str() {
        let content = r#"
            [[actor_value]]
            id = 9
            name = "Block"

            [[actor_value]]
            id = 10
            name = "Smithing"
        "#;

        let table = ActorValueTable::from_toml_str(content).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup_id("smithing"), ActorValue::from_raw(10));
        assert_eq!(table.lookup_name(ActorValue::from_raw(9)), "Block");
    }

    #[test]
    fn test_from_toml_str_empty() {
        let table = ActorValueTable::from_toml_str("").unwrap();
        assert!(table.is_empty());
    }
}
