//! Validate command implementation.
//!
//! `glossa validate` checks that the locally installed models are compatible
//! with the running glossa version. Run it after upgrading glossa itself.
//!
//! The flow is: fetch the published compatibility table, build the matrix
//! for the running version, scan the package install root and the data
//! directory, classify what was found, and print the report.

use std::path::Path;

use crate::about;
use crate::compat::{CompatFetcher, CompatMatrix, HttpCompatFetcher};
use crate::error::Result;
use crate::models::{paths, scan_links, scan_packages, DirPackageRegistry, PackageRegistry};
use crate::report::{render_table, Report};
use crate::ui::{should_use_colors, GlossaTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
#[derive(Debug, Default)]
pub struct ValidateCommand;

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let fetcher = HttpCompatFetcher::new(&about::compat_url());
        let registry = DirPackageRegistry::new(paths::packages_path());
        let data_path = paths::data_path();
        run_validate(&fetcher, &registry, data_path.as_deref(), ui)
    }
}

/// Core validate flow with injected collaborators.
fn run_validate(
    fetcher: &dyn CompatFetcher,
    registry: &dyn PackageRegistry,
    data_path: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    let mut spinner = ui.start_spinner("Fetching compatibility table");
    let table = match fetcher.fetch() {
        Ok(table) => {
            spinner.finish_clear();
            table
        }
        Err(e) => {
            spinner.finish_clear();
            return Err(e);
        }
    };
    let matrix = CompatMatrix::from_table(table, about::VERSION)?;

    let links = scan_links(data_path, &matrix)?;
    let packages = scan_packages(registry, &matrix)?;
    let report = Report::build(&matrix, &packages, &links);

    ui.show_header(&format!("Installed models (glossa v{})", about::VERSION));
    if let Some(path) = data_path {
        ui.message(&format!("Data path: {}", path.display()));
        ui.message("");
    }

    if report.is_empty() {
        ui.message("No models found in your current environment.");
        return Ok(CommandResult::success());
    }

    let theme = if ui.is_interactive() && should_use_colors() {
        GlossaTheme::new()
    } else {
        GlossaTheme::plain()
    };
    for line in render_table(&report, &theme) {
        ui.message(&line);
    }

    if !report.update_models.is_empty() {
        ui.message("");
        ui.message("Use the following commands to update the model packages:");
        for model in &report.update_models {
            ui.message(&format!("    glossa download {}", model));
        }
    }

    if !report.na_models.is_empty() {
        ui.message("");
        ui.warning(&format!(
            "The following models are not available for glossa v{}: {}",
            about::VERSION,
            report.na_models.join(", ")
        ));
    }

    if !report.incompatible_links.is_empty() {
        if let Some(path) = data_path {
            ui.message("");
            ui.show_hint(&format!(
                "You may also want to overwrite the incompatible links using \
                 `glossa link --force`, or remove them from the data directory. \
                 Data path: {}",
                path.display()
            ));
        }
    }

    Ok(CommandResult::success())
}
