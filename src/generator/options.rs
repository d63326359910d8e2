use crate::error::OptionsError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// Tunables for a `Generator`. Every field has a default, so a JSON options file only
/// needs to name the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Prefix of the platform binding namespaces. `"MonoTouch"` yields
    /// `MonoTouch.Foundation`; an empty root yields plain `Foundation`.
    pub root_namespace: String,
    /// Custom class names that never get a partial declaration.
    pub reserved_class_names: Vec<String>,
    /// Widget family prefix (after the `IB` designer prefix) to binding module.
    pub family_namespaces: IndexMap<String, String>,
    /// Attach a formatted listing of each action stub as a class comment.
    pub action_stub_notes: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        let mut family_namespaces = IndexMap::new();
        family_namespaces.insert("UI".to_string(), "UIKit".to_string());
        family_namespaces.insert("MK".to_string(), "MapKit".to_string());
        Self {
            root_namespace: "MonoTouch".to_string(),
            // The designer never generates partial classes for these either.
            reserved_class_names: vec!["UIApplication".to_string(), "UIResponder".to_string()],
            family_namespaces,
            action_stub_notes: true,
        }
    }
}

impl GeneratorOptions {
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, OptionsError> {
        let content = fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn is_reserved(&self, class_name: &str) -> bool {
        self.reserved_class_names.iter().any(|r| r == class_name)
    }
}
