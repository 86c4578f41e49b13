//! Legacy version suffix normalization.

/// Reformat old model versions ending on `-alpha` to match the package
/// version scheme.
///
/// A trailing `-alpha` becomes `a0`; any other `-alpha` occurrence becomes
/// `a`. Already-normalized versions pass through unchanged.
pub fn reformat_version(version: &str) -> String {
    if version.ends_with("-alpha") {
        return version.replace("-alpha", "a0");
    }
    version.replace("-alpha", "a")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_alpha_becomes_a0() {
        assert_eq!(reformat_version("2.0.0-alpha"), "2.0.0a0");
        assert_eq!(reformat_version("1.2.3-alpha"), "1.2.3a0");
    }

    #[test]
    fn embedded_alpha_becomes_a() {
        assert_eq!(reformat_version("2.0.0-alpha.1"), "2.0.0a.1");
    }

    #[test]
    fn plain_versions_pass_through() {
        assert_eq!(reformat_version("2.0.0"), "2.0.0");
        assert_eq!(reformat_version("1.0.0a0"), "1.0.0a0");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["2.0.0-alpha", "2.0.0-alpha.1", "2.0.0", "0.9.9a0"] {
            let once = reformat_version(raw);
            assert_eq!(reformat_version(&once), once);
        }
    }

    #[test]
    fn empty_string_passes_through() {
        assert_eq!(reformat_version(""), "");
    }
}
