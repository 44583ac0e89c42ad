//! tcss-docgen — compile Textual CSS reference documentation into lookup tables.
//!
//! The build scans a local copy of the documentation tree, recovers per-property
//! reference data (enum values, syntax, examples, related properties) from the
//! Markdown, rewrites intra-corpus links into absolute URLs, and renders the
//! result as Rust source or JSON. `DocIndex` is the read side for JSON output.

pub mod artifact;
pub mod catalog;
pub mod config;
pub mod index;
pub mod links;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod refresh;
pub mod render;

pub use artifact::Artifact;
pub use config::DocsConfig;
pub use index::DocIndex;
pub use model::PropertyDocs;
