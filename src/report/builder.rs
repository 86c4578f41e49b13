//! Validation report classification.
//!
//! Pure set logic over the scanner outputs; rendering lives in
//! [`render`](crate::report::render) so classification stays testable
//! without a terminal.

use std::collections::{BTreeMap, BTreeSet};

use crate::compat::CompatMatrix;
use crate::models::{InstalledModel, ModelOrigin};

/// One row of the validation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub origin: ModelOrigin,
    /// Name the model is registered under (package name or link name).
    pub registered_name: String,
    /// Resolved model name.
    pub model_name: String,
    pub version: String,
    pub compatible: bool,
    /// First known-compatible version for the active glossa version, if any.
    pub hint: Option<String>,
}

/// Classified validation results.
#[derive(Debug)]
pub struct Report {
    /// One row per package, then one per link.
    pub rows: Vec<ReportRow>,
    /// Incompatible models an update would fix (the active glossa version
    /// still ships them).
    pub update_models: Vec<String>,
    /// Incompatible models the active glossa version no longer ships at all.
    pub na_models: Vec<String>,
    /// Link names pointing at incompatible installations.
    pub incompatible_links: BTreeSet<String>,
}

impl Report {
    /// Classify scanner outputs against the matrix.
    pub fn build(
        matrix: &CompatMatrix,
        packages: &BTreeMap<String, InstalledModel>,
        links: &BTreeMap<String, InstalledModel>,
    ) -> Self {
        let incompatible_links: BTreeSet<String> = links
            .iter()
            .filter(|(_, model)| !model.compatible)
            .map(|(link, _)| link.clone())
            .collect();

        let incompatible_models: BTreeSet<String> = packages
            .values()
            .chain(links.values())
            .filter(|model| !model.compatible)
            .map(|model| model.name.clone())
            .collect();

        let current = matrix.current_versions();
        let (update_models, na_models): (Vec<String>, Vec<String>) = incompatible_models
            .into_iter()
            .partition(|model| current.contains_key(model));

        let rows = packages
            .iter()
            .chain(links.iter())
            .map(|(registered_name, model)| ReportRow {
                origin: model.origin,
                registered_name: registered_name.clone(),
                model_name: model.name.clone(),
                version: model.version.clone(),
                compatible: model.compatible,
                hint: matrix.first_known_version(&model.name).map(String::from),
            })
            .collect();

        Self {
            rows,
            update_models,
            na_models,
            incompatible_links,
        }
    }

    /// True when neither scanner found anything.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
