//! Values table pass.
//!
//! Picks up rows shaped like
//!
//! ```text
//! | `block` (default) | Display the widget as normal. |
//! ```
//!
//! anywhere in the document outside fenced code, in order of appearance.
//! An unclosed fence hides nothing.

use super::sections::fence_mask;
use crate::model::EnumValues;
use regex::Regex;
use std::sync::LazyLock;

static RE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*\|?[ \t]*([^|]+?)[ \t]*\|[ \t]*([^|]*?)[ \t]*(?:\|.*)?\r?$").unwrap()
});

static RE_DEFAULT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(\s*default\s*\)").unwrap());

static RE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:?-+:?$").unwrap());

static RE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s|]+$").unwrap());

/// Collect every accepted table row.
pub fn parse(input: &str) -> EnumValues {
    let mut values = EnumValues::default();
    let lines: Vec<&str> = input.lines().collect();
    let mask = fence_mask(lines.iter().copied());

    for (line, fenced) in lines.into_iter().zip(mask) {
        if fenced {
            continue;
        }
        if let Some((value, description)) = parse_row(line) {
            values.insert(value, description);
        }
    }
    values
}

/// One row → (value, description), or None for headers, rules and prose.
fn parse_row(line: &str) -> Option<(String, String)> {
    let caps = RE_ROW.captures(line)?;

    let value = RE_DEFAULT.replace_all(&caps[1], "");
    let value = value.trim().trim_matches('`').trim();
    let description = caps[2].trim();

    if value.is_empty() || description.is_empty() {
        return None;
    }
    if value.eq_ignore_ascii_case("value") || RE_SEPARATOR.is_match(value) {
        return None;
    }
    if !RE_LITERAL.is_match(value) {
        return None;
    }

    Some((value.to_string(), description.to_string()))
}
