//! JSON renderer — the artifact loaded by `DocIndex`.

use crate::artifact::Artifact;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, artifact: &Artifact) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(artifact).context("failed to serialize artifact")?;
        out.push('\n');
        Ok(out)
    }

    fn file_name(&self) -> &str {
        "tcss_docs.json"
    }
}
