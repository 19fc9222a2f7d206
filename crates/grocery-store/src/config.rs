//! Store Configuration

use serde::{Deserialize, Serialize};

/// Key the list has always been stored under in the browser
pub const DEFAULT_STORAGE_KEY: &str = "groceryItems";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage key holding the serialized list
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = StoreConfig::from_json("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.storage_key, "groceryItems");
    }

    #[test]
    fn test_custom_key() {
        let config = StoreConfig::from_json(r#"{"storage_key":"lab5"}"#).unwrap();
        assert_eq!(config.storage_key, "lab5");
    }
}
