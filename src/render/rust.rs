//! Rust source renderer — static sorted tables plus lookup functions.
//!
//! The output is meant to be `include!`d by the IDE side. Every table is a
//! `'static` slice sorted by key so lookups are a binary search with no
//! parsing at runtime.

use crate::artifact::{Artifact, PropertyEntry};
use crate::render::Renderer;
use anyhow::Result;
use std::fmt::Write;

pub struct RustRenderer;

const HEADER: &str = "\
// @generated by tcss-docgen from the Textual CSS documentation.
// Do not edit by hand; rerun the generator instead.
";

const LOOKUPS: &str = r#"
fn find<T: Copy>(table: &'static [(&'static str, T)], key: &str) -> Option<T> {
    table
        .binary_search_by(|entry| entry.0.cmp(key))
        .ok()
        .map(|i| table[i].1)
}

fn property_key(name: &str) -> String {
    name.trim().to_lowercase().replace('_', "-")
}

fn filename_key(name: &str) -> String {
    name.trim().to_lowercase().replace('-', "_")
}

/// Description of one enum value of a property.
pub fn value_description(property: &str, value: &str) -> Option<&'static str> {
    let value = value.trim().to_lowercase();
    enum_values(property)
        .iter()
        .find(|entry| entry.0 == value)
        .map(|entry| entry.1)
}

/// All enum values of a property in source order.
pub fn enum_values(property: &str) -> &'static [(&'static str, &'static str)] {
    find(ENUM_VALUES, &property_key(property)).unwrap_or(&[])
}

pub fn syntax(property: &str) -> Option<&'static str> {
    find(PROPERTY_FIELDS, &property_key(property)).and_then(|f| f.syntax)
}

pub fn css_example(property: &str) -> Option<&'static str> {
    find(PROPERTY_FIELDS, &property_key(property)).and_then(|f| f.css_example)
}

pub fn secondary_example(property: &str) -> Option<&'static str> {
    find(PROPERTY_FIELDS, &property_key(property)).and_then(|f| f.secondary_example)
}

/// Related properties; empty when none were recorded.
pub fn see_also(property: &str) -> &'static [&'static str] {
    find(SEE_ALSO, &property_key(property)).unwrap_or(&[])
}

pub fn type_doc_url(name: &str) -> Option<&'static str> {
    find(TYPE_URLS, &property_key(name))
}

pub fn property_file(name: &str) -> Option<&'static str> {
    find(PROPERTY_FILES, &filename_key(name))
}

pub fn has_property_doc(name: &str) -> bool {
    property_file(name).is_some()
}

pub fn property_doc_url(name: &str) -> Option<String> {
    property_file(name).map(|path| format!("{}{}/", BASE_URL, path))
}
"#;

impl Renderer for RustRenderer {
    fn render(&self, artifact: &Artifact) -> Result<String> {
        let mut out = String::from(HEADER);

        out.push_str("\n/// Scalar documentation fields of one property.\n");
        out.push_str("#[derive(Debug, Clone, Copy)]\n");
        out.push_str("pub struct PropertyFields {\n");
        out.push_str("    pub syntax: Option<&'static str>,\n");
        out.push_str("    pub css_example: Option<&'static str>,\n");
        out.push_str("    pub secondary_example: Option<&'static str>,\n");
        out.push_str("}\n\n");

        writeln!(out, "pub const BASE_URL: &str = {:?};\n", artifact.base_url)?;

        write_pairs(
            &mut out,
            "TYPE_URLS",
            artifact.type_urls.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )?;
        write_pairs(
            &mut out,
            "PROPERTY_FILES",
            artifact
                .property_files
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        )?;
        write_enum_values(&mut out, artifact)?;
        write_fields(&mut out, artifact)?;
        write_see_also(&mut out, artifact)?;

        out.push_str(LOOKUPS);
        Ok(out)
    }

    fn file_name(&self) -> &str {
        "tcss_docs.rs"
    }
}

fn write_pairs<'a>(
    out: &mut String,
    name: &str,
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
) -> std::fmt::Result {
    writeln!(out, "pub static {}: &[(&str, &str)] = &[", name)?;
    for (key, value) in pairs {
        writeln!(out, "    ({:?}, {:?}),", key, value)?;
    }
    out.push_str("];\n\n");
    Ok(())
}

fn write_enum_values(out: &mut String, artifact: &Artifact) -> std::fmt::Result {
    out.push_str("pub static ENUM_VALUES: &[(&str, &[(&str, &str)])] = &[\n");
    for (property, entry) in with(artifact, |e| !e.values.is_empty()) {
        writeln!(out, "    ({:?}, &[", property)?;
        for v in &entry.values {
            writeln!(out, "        ({:?}, {:?}),", v.value, v.description)?;
        }
        out.push_str("    ]),\n");
    }
    out.push_str("];\n\n");
    Ok(())
}

fn write_fields(out: &mut String, artifact: &Artifact) -> std::fmt::Result {
    out.push_str("pub static PROPERTY_FIELDS: &[(&str, PropertyFields)] = &[\n");
    let has_scalar = |e: &PropertyEntry| {
        e.syntax.is_some() || e.css_example.is_some() || e.secondary_example.is_some()
    };
    for (property, entry) in with(artifact, has_scalar) {
        writeln!(out, "    ({:?}, PropertyFields {{", property)?;
        writeln!(out, "        syntax: {},", option_literal(&entry.syntax))?;
        writeln!(out, "        css_example: {},", option_literal(&entry.css_example))?;
        writeln!(
            out,
            "        secondary_example: {},",
            option_literal(&entry.secondary_example)
        )?;
        out.push_str("    }),\n");
    }
    out.push_str("];\n\n");
    Ok(())
}

fn write_see_also(out: &mut String, artifact: &Artifact) -> std::fmt::Result {
    out.push_str("pub static SEE_ALSO: &[(&str, &[&str])] = &[\n");
    for (property, entry) in with(artifact, |e| !e.see_also.is_empty()) {
        let items: Vec<String> = entry.see_also.iter().map(|s| format!("{:?}", s)).collect();
        writeln!(out, "    ({:?}, &[{}]),", property, items.join(", "))?;
    }
    out.push_str("];\n");
    Ok(())
}

/// Property entries passing `keep`, in key order.
fn with<'a>(
    artifact: &'a Artifact,
    keep: impl Fn(&PropertyEntry) -> bool + 'a,
) -> impl Iterator<Item = (&'a String, &'a PropertyEntry)> + 'a {
    artifact.properties.iter().filter(move |(_, e)| keep(*e))
}

fn option_literal(value: &Option<String>) -> String {
    match value {
        Some(s) => format!("Some({:?})", s),
        None => "None".to_string(),
    }
}
