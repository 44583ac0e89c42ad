//! Relative Markdown link rewriting.
//!
//! Two substitution passes, each applied once over the whole text:
//!
//! - type links: `` [`<color>`](../../css_types/color.md) ``
//! - property links: `` [`margin`](./margin.md) ``
//!
//! A link whose target is documented becomes an `<a href>` to its canonical
//! URL with the visible text kept; any other link collapses to its visible
//! text.

use crate::catalog::{normalize_type_name, PropertyCatalog, TypeCatalog};
use crate::config::DocsConfig;
use regex::{Captures, Regex};

pub struct LinkResolver<'a> {
    types: &'a TypeCatalog,
    properties: &'a PropertyCatalog,
    config: &'a DocsConfig,
    type_link: Regex,
    property_link: Regex,
}

impl<'a> LinkResolver<'a> {
    pub fn new(
        types: &'a TypeCatalog,
        properties: &'a PropertyCatalog,
        config: &'a DocsConfig,
    ) -> Self {
        let ext = regex::escape(&config.extension);
        let type_link = Regex::new(&format!(
            r"\[(`?<[A-Za-z0-9_-]+>`?)\]\((?:\.\./)+{}/([A-Za-z0-9_-]+)\.{}(?:#[^)\s]*)?\)",
            regex::escape(&config.types_dir),
            ext
        ))
        .expect("type link pattern is valid");
        let property_link = Regex::new(&format!(
            r"\[(`?[a-z][a-z0-9-]*`?)\]\(\./([A-Za-z0-9_-]+)\.{}(?:#[^)\s]*)?\)",
            ext
        ))
        .expect("property link pattern is valid");

        Self {
            types,
            properties,
            config,
            type_link,
            property_link,
        }
    }

    /// Rewrite every type link, then every property link.
    pub fn resolve(&self, text: &str) -> String {
        let typed = self.type_link.replace_all(text, |caps: &Captures| {
            let visible = &caps[1];
            let name = normalize_type_name(&caps[2]);
            if self.types.contains(&name) {
                anchor(&self.config.type_url(&name), visible)
            } else {
                visible.to_string()
            }
        });

        self.property_link
            .replace_all(&typed, |caps: &Captures| {
                let visible = &caps[1];
                match self.properties.get(&caps[2]) {
                    Some(path) => anchor(&self.config.property_url(path), visible),
                    None => visible.to_string(),
                }
            })
            .into_owned()
    }
}

fn anchor(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", href, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogs() -> (TypeCatalog, PropertyCatalog) {
        let types = TypeCatalog::from_names(["color", "text_align"]);
        let mut props = PropertyCatalog::default();
        props.insert("margin".into(), "styles/margin".into());
        props.insert("grid_columns".into(), "styles/grid/grid_columns".into());
        (types, props)
    }

    #[test]
    fn documented_type_becomes_anchor() {
        let (types, props) = catalogs();
        let config = DocsConfig::default();
        let resolver = LinkResolver::new(&types, &props, &config);
        assert_eq!(
            resolver.resolve("background: [`<color>`](../../css_types/color.md);"),
            "background: <a href=\"https://textual.textualize.io/css_types/color/\">`<color>`</a>;"
        );
    }

    #[test]
    fn type_stem_is_hyphen_normalized() {
        let (types, props) = catalogs();
        let config = DocsConfig::default();
        let resolver = LinkResolver::new(&types, &props, &config);
        let out = resolver.resolve("[<text-align>](../css_types/text_align.md)");
        assert!(out.contains("css_types/text-align/"), "got: {out}");
    }

    #[test]
    fn undocumented_type_keeps_text() {
        let (types, props) = catalogs();
        let config = DocsConfig::default();
        let resolver = LinkResolver::new(&types, &props, &config);
        assert_eq!(
            resolver.resolve("x [<hatch>](../../css_types/hatch.md) y"),
            "x <hatch> y"
        );
    }

    #[test]
    fn property_link_uses_catalog_path() {
        let (types, props) = catalogs();
        let config = DocsConfig::default();
        let resolver = LinkResolver::new(&types, &props, &config);
        assert_eq!(
            resolver.resolve("see [`grid-columns`](./grid_columns.md)"),
            "see <a href=\"https://textual.textualize.io/styles/grid/grid_columns/\">`grid-columns`</a>"
        );
    }

    #[test]
    fn unknown_property_keeps_text() {
        let (types, props) = catalogs();
        let config = DocsConfig::default();
        let resolver = LinkResolver::new(&types, &props, &config);
        assert_eq!(resolver.resolve("[padding](./padding.md)"), "padding");
    }

    #[test]
    fn property_stem_is_not_normalized() {
        let (types, props) = catalogs();
        let config = DocsConfig::default();
        let resolver = LinkResolver::new(&types, &props, &config);
        assert_eq!(resolver.resolve("[grid-columns](./grid-columns.md)"), "grid-columns");
    }

    #[test]
    fn prose_without_links_is_unchanged() {
        let (types, props) = catalogs();
        let config = DocsConfig::default();
        let resolver = LinkResolver::new(&types, &props, &config);
        let text = "margin: <integer> [external](https://example.com)";
        assert_eq!(resolver.resolve(text), text);
    }
}
