//! Link scanning over the data directory.
//!
//! A link is a named alias in the data directory pointing at a model
//! installation. Each link directory carries the installation's `meta.json`,
//! which identifies the underlying model and version.

use std::collections::BTreeMap;
use std::path::Path;

use crate::compat::CompatMatrix;
use crate::error::Result;
use crate::models::{InstalledModel, ModelMeta, ModelOrigin};

/// Scan the data directory for model links.
///
/// Entries named `cache` or starting with a dot are skipped, as are
/// directories without a `meta.json`. A missing or absent data directory
/// yields an empty map.
pub fn scan_links(
    data_path: Option<&Path>,
    matrix: &CompatMatrix,
) -> Result<BTreeMap<String, InstalledModel>> {
    let mut links = BTreeMap::new();
    let Some(root) = data_path else {
        return Ok(links);
    };
    if !root.exists() {
        return Ok(links);
    }

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        let link_name = entry.file_name().to_string_lossy().to_string();
        if !is_model_path(&path, &link_name) {
            continue;
        }

        let meta_path = path.join("meta.json");
        if !meta_path.exists() {
            tracing::debug!("Skipping link candidate without meta.json: {}", path.display());
            continue;
        }

        let meta = ModelMeta::load(&meta_path)?;
        let name = meta.model_name();
        let compatible = matrix.is_compatible(&name, &meta.version);
        links.insert(
            link_name,
            InstalledModel {
                name,
                version: meta.version,
                origin: ModelOrigin::Link,
                compatible,
            },
        );
    }

    Ok(links)
}

fn is_model_path(path: &Path, name: &str) -> bool {
    path.is_dir() && name != "cache" && !name.starts_with('.')
}
