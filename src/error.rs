//! Error types for Glossa operations.
//!
//! This module defines [`GlossaError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GlossaError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GlossaError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Glossa operations.
#[derive(Debug, Error)]
pub enum GlossaError {
    /// Compatibility table request returned a non-success status.
    #[error("Server error ({status}): couldn't fetch compatibility table")]
    Fetch { status: u16 },

    /// Compatibility table has no entry for the running glossa version.
    #[error("Compatibility table has no entry for glossa v{version}")]
    CompatFormat { version: String },

    /// Failed to parse a model's meta.json.
    #[error("Failed to parse model meta at {path}: {message}")]
    MetaParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Glossa operations.
pub type Result<T> = std::result::Result<T, GlossaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_displays_status() {
        let err = GlossaError::Fetch { status: 503 };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("compatibility table"));
    }

    #[test]
    fn compat_format_error_displays_version() {
        let err = GlossaError::CompatFormat {
            version: "2.0.4".into(),
        };
        assert!(err.to_string().contains("2.0.4"));
    }

    #[test]
    fn meta_parse_error_displays_path_and_message() {
        let err = GlossaError::MetaParse {
            path: PathBuf::from("/models/en/meta.json"),
            message: "missing field `version`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/models/en/meta.json"));
        assert!(msg.contains("missing field"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GlossaError = io_err.into();
        assert!(matches!(err, GlossaError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(GlossaError::Fetch { status: 404 })
        }
        assert!(returns_error().is_err());
    }
}
