//! Glossa - model package tooling for the Glossa NLP library.
//!
//! Glossa models are versioned data packages consumable by the Glossa
//! library. This crate ships the CLI that keeps a local installation
//! healthy; its core command, `glossa validate`, cross-references the
//! published compatibility table against locally installed model packages
//! and data-directory links.
//!
//! # Modules
//!
//! - [`about`] - Crate identity and remote endpoints
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compat`] - Compatibility table fetching and lookups
//! - [`error`] - Error types and result aliases
//! - [`models`] - Local model discovery (packages and links)
//! - [`report`] - Validation report classification and rendering
//! - [`ui`] - Terminal output, styling, and spinners
//!
//! # Example
//!
//! ```
//! use glossa::compat::reformat_version;
//!
//! // Legacy alpha suffixes are rewritten into the package version scheme
//! assert_eq!(reformat_version("2.0.0-alpha"), "2.0.0a0");
//! assert_eq!(reformat_version("2.0.0"), "2.0.0");
//! ```

pub mod about;
pub mod cli;
pub mod compat;
pub mod error;
pub mod models;
pub mod report;
pub mod ui;

pub use error::{GlossaError, Result};
