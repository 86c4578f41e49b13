//! Compatibility matrix built from the published table.
//!
//! The published document maps every glossa release to the model versions
//! known to work with it. The matrix is built once per invocation and is
//! immutable afterwards; every version string is normalized on the way in.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::compat::version::reformat_version;
use crate::error::{GlossaError, Result};

/// Decoded shape of the published compatibility document.
///
/// `{ "glossa": { "<host-version>": { "<model>": ["<version>", ...] } } }`
#[derive(Debug, Clone, Deserialize)]
pub struct CompatTable {
    /// Host-version to model to compatible model versions.
    pub glossa: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

/// Compatibility lookups for one active glossa version.
#[derive(Debug)]
pub struct CompatMatrix {
    active_version: String,
    /// Model to compatible versions for the active glossa version.
    current: BTreeMap<String, Vec<String>>,
    /// Model names across all glossa versions.
    all_models: BTreeSet<String>,
}

impl CompatMatrix {
    /// Build a matrix for the given glossa version.
    ///
    /// Normalizes every version string. Fails with
    /// [`GlossaError::CompatFormat`] when the table has no entry for
    /// `active_version`.
    pub fn from_table(table: CompatTable, active_version: &str) -> Result<Self> {
        let mut all_models = BTreeSet::new();
        let mut by_version = BTreeMap::new();

        for (host_version, models) in table.glossa {
            let mut normalized = BTreeMap::new();
            for (model, versions) in models {
                all_models.insert(model.clone());
                normalized.insert(
                    model,
                    versions.iter().map(|v| reformat_version(v)).collect(),
                );
            }
            by_version.insert(host_version, normalized);
        }

        let current = by_version
            .remove(active_version)
            .ok_or_else(|| GlossaError::CompatFormat {
                version: active_version.to_string(),
            })?;

        Ok(Self {
            active_version: active_version.to_string(),
            current,
            all_models,
        })
    }

    /// The glossa version this matrix was built for.
    pub fn active_version(&self) -> &str {
        &self.active_version
    }

    /// True iff `model` is known for the active glossa version and `version`
    /// is one of its compatible versions.
    pub fn is_compatible(&self, model: &str, version: &str) -> bool {
        self.current
            .get(model)
            .is_some_and(|versions| versions.iter().any(|v| v == version))
    }

    /// Model to compatible versions for the active glossa version.
    pub fn current_versions(&self) -> &BTreeMap<String, Vec<String>> {
        &self.current
    }

    /// Model names across all glossa versions in the table.
    pub fn all_model_names(&self) -> &BTreeSet<String> {
        &self.all_models
    }

    /// First listed compatible version of `model` for the active glossa
    /// version, if the model ships for it at all.
    pub fn first_known_version(&self, model: &str) -> Option<&str> {
        self.current
            .get(model)
            .and_then(|versions| versions.first())
            .map(String::as_str)
    }
}
