//! # Application seed document — `seed.toml`
//!
//! Cat&Class has no backend, so everything a page shows on first render comes
//! from a TOML document bundled into the binary at compile time
//! (filename: [`AppConfig::filename`] = `"seed.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! app_name = "Cat&Class"
//!
//! [demo]
//! email = "demo@catandclass.io"
//! password = "demo123"
//!
//! [[catalog]]      # CatalogEntry, repeated
//! [[search]]       # SearchResult, repeated
//! [[uploads]]      # UploadFile, repeated
//! [[stats]]        # Stat, repeated
//! [[activity]]     # MonthlyActivity, repeated
//! ```
//!
//! Every section is optional. A missing section deserialises to its default,
//! so an empty document is a valid (if rather bare) configuration.

use serde::{Deserialize, Serialize};

use crate::error::SeedError;
use crate::models::{CatalogEntry, MonthlyActivity, SearchResult, Stat, UploadFile};

const BUNDLED_SEED: &str = include_str!("../seed.toml");

/// Top-level seed document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default)]
    pub demo: DemoCredentials,
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
    #[serde(default)]
    pub search: Vec<SearchResult>,
    #[serde(default)]
    pub uploads: Vec<UploadFile>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub activity: Vec<MonthlyActivity>,
}

/// Credentials used by the "Preview demo" button on the login page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoCredentials {
    pub email: String,
    pub password: String,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            email: "demo@catandclass.io".to_string(),
            password: "demo123".to_string(),
        }
    }
}

fn default_app_name() -> String {
    "Cat&Class".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            demo: DemoCredentials::default(),
            catalog: Vec::new(),
            search: Vec::new(),
            uploads: Vec::new(),
            stats: Vec::new(),
            activity: Vec::new(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the seed document.
    pub fn filename() -> &'static str {
        "seed.toml"
    }

    /// Parse the document compiled into the binary.
    pub fn bundled() -> Result<Self, SeedError> {
        Self::from_toml(BUNDLED_SEED)
    }

    /// Parse the bundled document, logging and falling back to an empty
    /// configuration if it is malformed.
    pub fn load() -> Self {
        match Self::bundled() {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load {}: {}", Self::filename(), e);
                Self::default()
            }
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, SeedError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileKind, FileStatus};

    #[test]
    fn test_bundled_seed_parses() {
        let config = AppConfig::bundled().unwrap();
        assert_eq!(config.app_name, "Cat&Class");
        assert_eq!(config.demo.email, "demo@catandclass.io");
        assert_eq!(config.demo.password, "demo123");
        assert_eq!(config.catalog.len(), 2);
        assert_eq!(config.search.len(), 2);
        assert_eq!(config.stats.len(), 4);
        assert_eq!(config.activity.len(), 5);

        assert_eq!(config.uploads.len(), 2);
        assert_eq!(config.uploads[0].name, "book-cover.jpg");
        assert_eq!(config.uploads[0].status, FileStatus::Complete);
        assert_eq!(config.uploads[0].kind, FileKind::Image);
        assert_eq!(config.uploads[1].status, FileStatus::Processing);
        assert_eq!(config.uploads[1].kind, FileKind::Pdf);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.catalog.is_empty());
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        let err = AppConfig::from_toml("catalog = 3").unwrap_err();
        assert!(err.to_string().starts_with("invalid seed document"));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let doc = r#"
            [[catalog]]
            id = 1
            title = "T"
            author = "A"
            subjects = []
            added = "yesterday"
        "#;
        assert!(AppConfig::from_toml(doc).is_err());
    }
}
