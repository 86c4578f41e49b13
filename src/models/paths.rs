//! Local model installation roots.

use std::path::PathBuf;

/// Environment variable overriding the link data directory.
pub const DATA_ENV: &str = "GLOSSA_DATA";

/// Environment variable overriding the package install root.
pub const PACKAGES_ENV: &str = "GLOSSA_PACKAGES";

/// Directory holding model links.
///
/// `None` when the platform has no user data directory and no override is
/// set. The directory itself may not exist yet; scanners treat a missing
/// directory as empty.
pub fn data_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::data_dir().map(|d| d.join("glossa").join("data"))
}

/// Root under which model packages are installed, one directory per package.
pub fn packages_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(PACKAGES_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::data_dir().map(|d| d.join("glossa").join("packages"))
}
