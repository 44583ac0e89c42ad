//! The emitted table set.
//!
//! Keys are case-folded here, once, so every consumer lookup is a direct
//! match. Type and filename tables are sorted maps; enum values and related
//! properties keep first-seen order.

use crate::catalog::{PropertyCatalog, TypeCatalog};
use crate::config::DocsConfig;
use crate::model::PropertyDocs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// URL prefix used for every generated link.
    pub base_url: String,
    /// Type name → documentation URL.
    pub type_urls: BTreeMap<String, String>,
    /// Property file base name → path relative to the docs root.
    pub property_files: BTreeMap<String, String>,
    /// Property name → extracted documentation.
    pub properties: BTreeMap<String, PropertyEntry>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyEntry {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<ValueEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_example: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub see_also: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueEntry {
    pub value: String,
    pub description: String,
}

impl Artifact {
    /// Fold catalogs and records into the emitted tables.
    pub fn build<I>(
        config: &DocsConfig,
        types: &TypeCatalog,
        properties: &PropertyCatalog,
        records: I,
    ) -> Self
    where
        I: IntoIterator<Item = (String, PropertyDocs)>,
    {
        let type_urls = types
            .iter()
            .map(|name| {
                let key = name.to_lowercase();
                let url = config.type_url(&key);
                (key, url)
            })
            .collect();

        let mut property_files = BTreeMap::new();
        for (base, path) in properties.iter() {
            let key = base.to_lowercase();
            if let Some(previous) = property_files.insert(key.clone(), path.to_string()) {
                warn!(
                    "property document name collision for {}: {} replaces {}",
                    key, path, previous
                );
            }
        }

        let mut entries = BTreeMap::new();
        for (base, doc) in records {
            let key = property_key(&base);
            if entries.insert(key.clone(), PropertyEntry::from(doc)).is_some() {
                warn!("property {} documented twice; keeping {}", key, base);
            }
        }

        Self {
            base_url: config.base_url.clone(),
            type_urls,
            property_files,
            properties: entries,
        }
    }
}

impl From<PropertyDocs> for PropertyEntry {
    fn from(doc: PropertyDocs) -> Self {
        let mut values: Vec<ValueEntry> = Vec::with_capacity(doc.enum_values.len());
        for (value, description) in doc.enum_values.iter() {
            let value = value.to_lowercase();
            match values.iter_mut().find(|v| v.value == value) {
                Some(existing) => existing.description = description.to_string(),
                None => values.push(ValueEntry {
                    value,
                    description: description.to_string(),
                }),
            }
        }

        Self {
            values,
            syntax: doc.syntax,
            css_example: doc.css_example,
            secondary_example: doc.secondary_example,
            see_also: doc.see_also,
        }
    }
}

/// Lookup key of a property: `Grid_Columns` → `grid-columns`.
pub fn property_key(name: &str) -> String {
    name.trim().to_lowercase().replace('_', "-")
}

/// Filename table key of a property: `Grid-Columns` → `grid_columns`.
pub fn filename_key(name: &str) -> String {
    name.trim().to_lowercase().replace('-', "_")
}
