use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SeedError;

/// Optional YAML overrides for the seeded admin
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcrypt_cost: Option<u32>,
}

impl SeedFile {
    pub fn from_yaml(yaml: &str) -> Result<Self, SeedError> {
        serde_yaml::from_str(yaml).map_err(|e| SeedError::Config(format!("Invalid seed file: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SeedError::Config(format!("Could not read seed file '{}': {}", path.display(), e))
        })?;
        // An empty file is a valid "no overrides" file
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_yaml(&contents)
    }
}
