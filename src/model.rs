//! Extraction record for one property document, independent of output format.

use serde::Serialize;

/// Enum literal → description, in order of appearance.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnumValues(Vec<(String, String)>);

impl EnumValues {
    /// Insert or replace; a replaced key keeps its original position.
    pub fn insert(&mut self, value: String, description: String) {
        match self.0.iter_mut().find(|(v, _)| *v == value) {
            Some(entry) => entry.1 = description,
            None => self.0.push((value, description)),
        }
    }

    pub fn get(&self, value: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, d)| d.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(v, d)| (v.as_str(), d.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything recovered from a single property document.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDocs {
    /// Rows of the values table
    pub enum_values: EnumValues,
    /// Cleaned `## Syntax` body with links resolved
    pub syntax: Option<String>,
    /// First css block under `## CSS`
    pub css_example: Option<String>,
    /// First block under the second example language heading
    pub secondary_example: Option<String>,
    /// Link texts under `## See also`, duplicates kept
    pub see_also: Vec<String>,
}

impl PropertyDocs {
    /// True when no pass recovered anything.
    pub fn is_empty(&self) -> bool {
        self.enum_values.is_empty()
            && self.syntax.is_none()
            && self.css_example.is_none()
            && self.secondary_example.is_none()
            && self.see_also.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaced_value_keeps_position() {
        let mut values = EnumValues::default();
        values.insert("a".into(), "first".into());
        values.insert("b".into(), "second".into());
        values.insert("a".into(), "again".into());
        let order: Vec<_> = values.iter().collect();
        assert_eq!(order, vec![("a", "again"), ("b", "second")]);
    }

    #[test]
    fn default_record_is_empty() {
        assert!(PropertyDocs::default().is_empty());
        let record = PropertyDocs {
            see_also: vec!["a".into()],
            ..Default::default()
        };
        assert!(!record.is_empty());
    }
}
