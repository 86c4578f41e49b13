//! Installed package enumeration and matching.
//!
//! The registry is injected as a trait so the scanner can run against a
//! fixture instead of a real installation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::compat::CompatMatrix;
use crate::error::Result;
use crate::models::{InstalledModel, ModelMeta, ModelOrigin};

/// An installed package as reported by a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    /// Registered package name. May use hyphens.
    pub name: String,
    pub version: String,
}

/// Enumerates installed packages.
pub trait PackageRegistry {
    /// All installed (name, version) pairs.
    fn installed(&self) -> Result<Vec<InstalledPackage>>;
}

/// Registry backed by the package install root.
///
/// One directory per installed package, each carrying the installation's
/// `meta.json`. The directory name is the registered package name.
pub struct DirPackageRegistry {
    root: Option<PathBuf>,
}

impl DirPackageRegistry {
    /// Create a registry over the given install root.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }
}

impl PackageRegistry for DirPackageRegistry {
    fn installed(&self) -> Result<Vec<InstalledPackage>> {
        let mut packages = Vec::new();
        let Some(root) = &self.root else {
            return Ok(packages);
        };
        if !root.exists() {
            return Ok(packages);
        }

        for entry in std::fs::read_dir(root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let meta_path = path.join("meta.json");
            if !meta_path.exists() {
                tracing::debug!("Skipping package candidate without meta.json: {}", path.display());
                continue;
            }
            let meta = ModelMeta::load(&meta_path)?;
            packages.push(InstalledPackage {
                name: entry.file_name().to_string_lossy().to_string(),
                version: meta.version,
            });
        }

        Ok(packages)
    }
}

/// Match installed packages against the known model names.
///
/// A package matches when its name, with hyphens replaced by underscores,
/// is a model name anywhere in the compatibility table. The result is keyed
/// by the registered (un-normalized) package name.
pub fn scan_packages(
    registry: &dyn PackageRegistry,
    matrix: &CompatMatrix,
) -> Result<BTreeMap<String, InstalledModel>> {
    let mut pkgs = BTreeMap::new();
    for package in registry.installed()? {
        let name = package.name.replace('-', "_");
        if !matrix.all_model_names().contains(&name) {
            continue;
        }
        let compatible = matrix.is_compatible(&name, &package.version);
        pkgs.insert(
            package.name,
            InstalledModel {
                name,
                version: package.version,
                origin: ModelOrigin::Package,
                compatible,
            },
        );
    }
    Ok(pkgs)
}
