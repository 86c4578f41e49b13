//! Validation report classification and rendering.
//!
//! [`builder`] turns scanner outputs into a classified [`Report`];
//! [`render`] turns a report into fixed-width table lines. Keeping the two
//! apart lets the classification logic be tested without a terminal.

pub mod builder;
pub mod render;

pub use builder::{Report, ReportRow};
pub use render::render_table;
