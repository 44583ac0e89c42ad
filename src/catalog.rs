//! Document catalogs — which type and property documents exist.
//!
//! Both catalogs are plain values built from one directory scan. A missing
//! or empty directory yields an empty catalog, never an error.

use crate::config::DocsConfig;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Component, Path};
use tracing::{debug, warn};

/// Names of documented value types, hyphen-normalized (`text_align` → `text-align`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    names: BTreeSet<String>,
}

impl TypeCatalog {
    /// Non-recursive scan of the type directory.
    pub fn scan(config: &DocsConfig) -> Self {
        let dir = config.types_root();
        let mut names = BTreeSet::new();

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("type directory {} unreadable: {}", dir.display(), e);
                return Self { names };
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() || !has_extension(&path, &config.extension) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.insert(normalize_type_name(stem));
            }
        }

        debug!("found {} type documents in {}", names.len(), dir.display());
        Self { names }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| normalize_type_name(n.as_ref()))
                .collect(),
        }
    }

    /// Membership test; `name` is hyphen-normalized first.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize_type_name(name))
    }

    /// Names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Property base name (underscores kept) → path relative to the docs root,
/// forward slashes, no extension.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyCatalog {
    paths: BTreeMap<String, String>,
}

impl PropertyCatalog {
    /// Recursive scan of the property tree.
    ///
    /// Paths are visited in lexicographic order. When two documents in
    /// different subdirectories share a base name the later one wins and a
    /// warning names both.
    pub fn scan(config: &DocsConfig) -> Self {
        let root = config.properties_root();
        let mut catalog = Self::default();

        let Some(root_str) = root.to_str() else {
            warn!("property directory is not valid UTF-8: {}", root.display());
            return catalog;
        };
        let pattern = format!(
            "{}/**/*.{}",
            glob::Pattern::escape(root_str),
            config.extension
        );
        let paths = match glob::glob(&pattern) {
            Ok(paths) => paths,
            Err(e) => {
                warn!("invalid scan pattern {}: {}", pattern, e);
                return catalog;
            }
        };

        let mut paths: Vec<_> = paths.filter_map(|r| r.ok()).filter(|p| p.is_file()).collect();
        paths.sort();

        for path in paths {
            let Some(base) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if config.reserved_names.iter().any(|r| r == base) {
                continue;
            }
            let Some(relative) = relative_doc_path(&path, &config.docs_root) else {
                warn!("skipping {}: outside the documentation root", path.display());
                continue;
            };
            catalog.insert(base.to_string(), relative);
        }

        if catalog.is_empty() {
            warn!("no property documents found under {}", root.display());
        } else {
            debug!("found {} property documents in {}", catalog.len(), root.display());
        }
        catalog
    }

    /// Insert with overwrite, logging any collision.
    pub fn insert(&mut self, base: String, relative: String) {
        if let Some(previous) = self.paths.get(&base) {
            warn!(
                "property document name collision for {}: {} replaces {}",
                base, relative, previous
            );
        }
        self.paths.insert(base, relative);
    }

    /// Relative path of a property document by base name (exact match).
    pub fn get(&self, base: &str) -> Option<&str> {
        self.paths.get(base).map(String::as_str)
    }

    /// Entries sorted by base name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// `text_align` → `text-align`.
pub fn normalize_type_name(stem: &str) -> String {
    stem.replace('_', "-")
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ext)
}

/// "docs/styles/grid/grid_columns.md" under "docs" → "styles/grid/grid_columns".
fn relative_doc_path(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let parts: Vec<&str> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn type_names_are_hyphenated() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "css_types/text_align.md", "# <text-align>");
        write(dir.path(), "css_types/color.md", "# <color>");
        write(dir.path(), "css_types/notes.txt", "ignored");
        write(dir.path(), "css_types/nested/deep.md", "not scanned");

        let types = TypeCatalog::scan(&DocsConfig::with_root(dir.path()));
        let names: Vec<&str> = types.iter().collect();
        assert_eq!(names, vec!["color", "text-align"]);
        assert!(types.contains("text_align"));
    }

    #[test]
    fn missing_type_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let types = TypeCatalog::scan(&DocsConfig::with_root(dir.path().join("nope")));
        assert!(types.is_empty());
    }

    #[test]
    fn property_scan_is_recursive_and_skips_reserved() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "styles/display.md", "");
        write(dir.path(), "styles/grid/grid_columns.md", "");
        write(dir.path(), "styles/_template.md", "");
        write(dir.path(), "styles/grid/index.md", "");

        let props = PropertyCatalog::scan(&DocsConfig::with_root(dir.path()));
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("display"), Some("styles/display"));
        assert_eq!(props.get("grid_columns"), Some("styles/grid/grid_columns"));
        assert_eq!(props.get("grid-columns"), None);
        assert_eq!(props.get("index"), None);
    }

    #[test]
    fn later_path_wins_on_collision() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "styles/a/shared.md", "");
        write(dir.path(), "styles/b/shared.md", "");

        let props = PropertyCatalog::scan(&DocsConfig::with_root(dir.path()));
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("shared"), Some("styles/b/shared"));
    }

    #[test]
    fn relative_path_uses_forward_slashes() {
        let root = Path::new("docs");
        let path = root.join("styles").join("links").join("link_color.md");
        assert_eq!(
            relative_doc_path(&path, root).as_deref(),
            Some("styles/links/link_color")
        );
    }
}
