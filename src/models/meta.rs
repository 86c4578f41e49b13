//! Model installation metadata.

use std::path::Path;

use serde::Deserialize;

use crate::error::{GlossaError, Result};

/// Metadata stored in a model installation's `meta.json`.
///
/// Installations carry more fields (description, author, pipeline); only the
/// ones needed for compatibility checking are decoded here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelMeta {
    pub lang: String,
    pub name: String,
    pub version: String,
}

impl ModelMeta {
    /// Load and decode a `meta.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| GlossaError::MetaParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Full model name, `<lang>_<name>`.
    pub fn model_name(&self) -> String {
        format!("{}_{}", self.lang, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn model_name_joins_lang_and_name() {
        let meta = ModelMeta {
            lang: "en".into(),
            name: "core_web_sm".into(),
            version: "2.0.0".into(),
        };
        assert_eq!(meta.model_name(), "en_core_web_sm");
    }

    #[test]
    fn load_decodes_required_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.json");
        std::fs::write(
            &path,
            r#"{"lang": "de", "name": "core_news_sm", "version": "2.0.0"}"#,
        )
        .unwrap();

        let meta = ModelMeta::load(&path).unwrap();
        assert_eq!(meta.model_name(), "de_core_news_sm");
        assert_eq!(meta.version, "2.0.0");
    }

    #[test]
    fn load_ignores_extra_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.json");
        std::fs::write(
            &path,
            r#"{"lang": "en", "name": "core_web_sm", "version": "2.0.0",
                "description": "English pipeline", "pipeline": ["tagger"]}"#,
        )
        .unwrap();

        let meta = ModelMeta::load(&path).unwrap();
        assert_eq!(meta.model_name(), "en_core_web_sm");
    }

    #[test]
    fn load_reports_malformed_meta() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.json");
        std::fs::write(&path, r#"{"lang": "en"}"#).unwrap();

        let err = ModelMeta::load(&path).unwrap_err();
        assert!(matches!(err, GlossaError::MetaParse { .. }));
        assert!(err.to_string().contains("meta.json"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = ModelMeta::load(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GlossaError::Io(_)));
    }
}
