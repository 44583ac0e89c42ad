//! Read-only runtime view over a generated artifact.
//!
//! Built once at load time; every query case-folds its key and treats a
//! missing entry as "no documentation".

use crate::artifact::{filename_key, property_key, Artifact, PropertyEntry, ValueEntry};
use anyhow::{Context, Result};
use std::path::Path;

#[derive(Debug, Default, Clone)]
pub struct DocIndex {
    artifact: Artifact,
}

impl DocIndex {
    pub fn new(artifact: Artifact) -> Self {
        Self { artifact }
    }

    /// Load a JSON artifact written by the json renderer.
    pub fn from_json(input: &str) -> Result<Self> {
        let artifact: Artifact =
            serde_json::from_str(input).context("malformed documentation artifact")?;
        Ok(Self::new(artifact))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let input = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&input)
    }

    fn entry(&self, property: &str) -> Option<&PropertyEntry> {
        self.artifact.properties.get(&property_key(property))
    }

    /// Description of one enum value of a property.
    pub fn value_description(&self, property: &str, value: &str) -> Option<&str> {
        let value = value.trim().to_lowercase();
        self.entry(property)?
            .values
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.description.as_str())
    }

    /// All enum values of a property in source order.
    pub fn enum_values(&self, property: &str) -> &[ValueEntry] {
        self.entry(property)
            .map(|e| e.values.as_slice())
            .unwrap_or_default()
    }

    pub fn syntax(&self, property: &str) -> Option<&str> {
        self.entry(property)?.syntax.as_deref()
    }

    pub fn css_example(&self, property: &str) -> Option<&str> {
        self.entry(property)?.css_example.as_deref()
    }

    pub fn secondary_example(&self, property: &str) -> Option<&str> {
        self.entry(property)?.secondary_example.as_deref()
    }

    /// Related properties; empty when none were recorded.
    pub fn see_also(&self, property: &str) -> &[String] {
        self.entry(property)
            .map(|e| e.see_also.as_slice())
            .unwrap_or_default()
    }

    pub fn type_doc_url(&self, name: &str) -> Option<&str> {
        let key = name.trim().to_lowercase().replace('_', "-");
        self.artifact.type_urls.get(&key).map(String::as_str)
    }

    /// Relative path of a property document, by file base name.
    pub fn property_file(&self, name: &str) -> Option<&str> {
        self.artifact
            .property_files
            .get(&filename_key(name))
            .map(String::as_str)
    }

    pub fn has_property_doc(&self, name: &str) -> bool {
        self.property_file(name).is_some()
    }

    /// Canonical URL of a property's documentation page.
    pub fn property_doc_url(&self, name: &str) -> Option<String> {
        self.property_file(name)
            .map(|path| format!("{}{}/", self.artifact.base_url, path))
    }
}
