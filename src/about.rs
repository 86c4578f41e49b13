//! Crate identity and remote endpoints.

/// Current version of glossa.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// URL of the published model compatibility table.
pub const COMPAT_URL: &str =
    "https://raw.githubusercontent.com/glossa-nlp/glossa-models/master/compatibility.json";

/// Environment variable overriding the compatibility table URL.
///
/// Intended for mirrors and air-gapped setups.
pub const COMPAT_URL_ENV: &str = "GLOSSA_COMPAT";

/// Resolve the compatibility table URL, honoring the mirror override.
pub fn compat_url() -> String {
    std::env::var(COMPAT_URL_ENV).unwrap_or_else(|_| COMPAT_URL.to_string())
}
