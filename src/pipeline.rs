//! End-to-end extraction: catalogs → resolver → parser → artifact.

use crate::artifact::Artifact;
use crate::catalog::{PropertyCatalog, TypeCatalog};
use crate::config::DocsConfig;
use crate::links::LinkResolver;
use crate::parser::PropertyDocParser;
use std::fs;
use tracing::{debug, info, warn};

/// Scan the documentation root and build the emitted tables.
///
/// Unreadable documents are skipped with a warning and documents with no
/// recoverable section contribute nothing; neither aborts the run.
pub fn build(config: &DocsConfig) -> Artifact {
    let types = TypeCatalog::scan(config);
    let properties = PropertyCatalog::scan(config);
    let resolver = LinkResolver::new(&types, &properties, config);
    let parser = PropertyDocParser::new(&resolver, config);

    let mut records = Vec::new();
    for (base, relative) in properties.iter() {
        let path = config
            .docs_root
            .join(format!("{}.{}", relative, config.extension));
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let doc = parser.parse(base, &content);
        if doc.is_empty() {
            debug!("{}: nothing recognizable, no record", base);
            continue;
        }
        records.push((base.to_string(), doc));
    }

    info!(
        "{} types, {} property documents, {} records",
        types.len(),
        properties.len(),
        records.len()
    );
    Artifact::build(config, &types, &properties, records)
}
