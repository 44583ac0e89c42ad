//! Property document parser — independent passes over the raw Markdown.
//!
//! Each pass takes the document text and returns an optional field; none of
//! them fails. The record may come back empty, in which case the caller
//! drops it.

pub mod enum_table;
pub mod sections;

use crate::config::DocsConfig;
use crate::links::LinkResolver;
use crate::model::PropertyDocs;
use regex::Regex;
use tracing::debug;

pub struct PropertyDocParser<'a> {
    resolver: &'a LinkResolver<'a>,
    config: &'a DocsConfig,
    css_block: Regex,
    secondary_block: Regex,
}

impl<'a> PropertyDocParser<'a> {
    pub fn new(resolver: &'a LinkResolver<'a>, config: &'a DocsConfig) -> Self {
        Self {
            resolver,
            config,
            css_block: sections::code_block_pattern(&config.css_fence_labels),
            secondary_block: sections::code_block_pattern(&config.secondary.fence_labels),
        }
    }

    /// Run every pass over one document.
    pub fn parse(&self, name: &str, input: &str) -> PropertyDocs {
        let doc = PropertyDocs {
            enum_values: enum_table::parse(input),
            syntax: self.syntax(input),
            css_example: self.example(input, &self.config.headings.css, &self.css_block),
            secondary_example: self.example(
                input,
                &self.config.secondary.heading,
                &self.secondary_block,
            ),
            see_also: self.see_also(input),
        };
        debug!(
            "{}: {} values, syntax={}, css={}, {}={}, {} related",
            name,
            doc.enum_values.len(),
            doc.syntax.is_some(),
            doc.css_example.is_some(),
            self.config.secondary.heading.to_lowercase(),
            doc.secondary_example.is_some(),
            doc.see_also.len()
        );
        doc
    }

    fn syntax(&self, input: &str) -> Option<String> {
        let region = sections::section(input, &self.config.headings.syntax)?;
        let cleaned = sections::clean_syntax(region, &self.config.include_marker);
        if cleaned.is_empty() {
            return None;
        }
        Some(self.resolver.resolve(&cleaned))
    }

    fn example(&self, input: &str, heading: &str, pattern: &Regex) -> Option<String> {
        let region = sections::section(input, heading)?;
        sections::first_code_block(region, pattern)
    }

    fn see_also(&self, input: &str) -> Vec<String> {
        sections::section(input, &self.config.headings.see_also)
            .map(sections::link_texts)
            .unwrap_or_default()
    }
}
