//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod rust;

use crate::artifact::Artifact;
use anyhow::{anyhow, Result};

/// Trait for serializing the table set into one output file.
pub trait Renderer {
    fn render(&self, artifact: &Artifact) -> Result<String>;
    fn file_name(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "rust" | "rs" => Ok(Box::new(rust::RustRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use rust or json", format)),
    }
}
