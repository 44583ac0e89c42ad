//! Corpus conventions: directory names, headings, URL base.
//!
//! Everything the extractor and resolver assume about the layout of the
//! documentation tree lives here, so a fork of the docs only needs a
//! different `DocsConfig`.

use std::path::PathBuf;

/// Public site that renders the documentation tree.
pub const DEFAULT_BASE_URL: &str = "https://textual.textualize.io/";

/// Default upstream repository for `--refresh`.
pub const DEFAULT_REPO_URL: &str = "https://github.com/Textualize/textual.git";

/// Second example language of property documents.
#[derive(Debug, Clone)]
pub struct SecondaryLanguage {
    /// Section heading text, e.g. "Python"
    pub heading: String,
    /// Fence info strings accepted for its code block
    pub fence_labels: Vec<String>,
}

/// Section headings recognized in property documents.
#[derive(Debug, Clone)]
pub struct Headings {
    pub syntax: String,
    pub css: String,
    pub see_also: String,
}

#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Documentation root holding the property and type subtrees.
    pub docs_root: PathBuf,
    /// Property subtree, relative to `docs_root` (scanned recursively).
    pub properties_dir: String,
    /// Type subtree, relative to `docs_root` (flat).
    pub types_dir: String,
    /// Document extension without the dot.
    pub extension: String,
    /// Base names never treated as property documents.
    pub reserved_names: Vec<String>,
    /// Canonical URL prefix, always ending in `/`.
    pub base_url: String,
    pub headings: Headings,
    /// Fence info strings accepted for the CSS example block.
    pub css_fence_labels: Vec<String>,
    pub secondary: SecondaryLanguage,
    /// Marker of the snippet-inclusion directive stripped from syntax blocks.
    pub include_marker: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            docs_root: PathBuf::from("docs"),
            properties_dir: "styles".to_string(),
            types_dir: "css_types".to_string(),
            extension: "md".to_string(),
            reserved_names: vec!["_template".to_string(), "index".to_string()],
            base_url: DEFAULT_BASE_URL.to_string(),
            headings: Headings {
                syntax: "Syntax".to_string(),
                css: "CSS".to_string(),
                see_also: "See also".to_string(),
            },
            css_fence_labels: vec!["css".to_string()],
            secondary: SecondaryLanguage {
                heading: "Python".to_string(),
                fence_labels: vec!["python".to_string(), "py".to_string()],
            },
            include_marker: "--8<--".to_string(),
        }
    }
}

impl DocsConfig {
    /// Default conventions rooted at `docs_root`.
    pub fn with_root(docs_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
            ..Self::default()
        }
    }

    /// Replace the URL base, normalizing the trailing separator.
    pub fn set_base_url(&mut self, url: &str) {
        let mut url = url.trim().to_string();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
    }

    pub fn properties_root(&self) -> PathBuf {
        self.docs_root.join(&self.properties_dir)
    }

    pub fn types_root(&self) -> PathBuf {
        self.docs_root.join(&self.types_dir)
    }

    /// Canonical URL of a documented type.
    pub fn type_url(&self, name: &str) -> String {
        format!("{}{}/{}/", self.base_url, self.types_dir, name)
    }

    /// Canonical URL of a property document, from its catalog path.
    pub fn property_url(&self, relative_path: &str) -> String {
        format!("{}{}/", self.base_url, relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let mut config = DocsConfig::default();
        config.set_base_url("https://example.com/docs");
        assert_eq!(config.base_url, "https://example.com/docs/");
        assert_eq!(
            config.type_url("color"),
            "https://example.com/docs/css_types/color/"
        );
    }

    #[test]
    fn property_url_appends_separator() {
        let config = DocsConfig::default();
        assert_eq!(
            config.property_url("styles/grid/grid_columns"),
            "https://textual.textualize.io/styles/grid/grid_columns/"
        );
    }
}
