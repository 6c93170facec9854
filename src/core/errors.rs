//! CV-prefixed error types with structured error codes.
//!
//! Selection misses and out-of-set filter labels are deliberately *not*
//! errors: the controller recovers from both as silent no-ops, so the
//! taxonomy here only covers the content boundary and configuration.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, CvError>;

/// Top-level error type for Content Vault.
#[derive(Debug, Error)]
pub enum CvError {
    #[error("[CV-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[CV-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[CV-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[CV-2001] missing content collection: {path}")]
    MissingContent { path: PathBuf },

    #[error("[CV-2002] content parse failure in {collection}: {details}")]
    ContentParse {
        collection: &'static str,
        details: String,
    },

    #[error("[CV-2201] duplicate record id {id:?} in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    #[error("[CV-2202] invalid record {id:?} in {collection}: {details}")]
    InvalidRecord {
        collection: &'static str,
        id: String,
        details: String,
    },

    #[error("[CV-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[CV-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CvError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "CV-1001",
            Self::MissingConfig { .. } => "CV-1002",
            Self::ConfigParse { .. } => "CV-1003",
            Self::MissingContent { .. } => "CV-2001",
            Self::ContentParse { .. } => "CV-2002",
            Self::DuplicateId { .. } => "CV-2201",
            Self::InvalidRecord { .. } => "CV-2202",
            Self::Serialization { .. } => "CV-2101",
            Self::Io { .. } => "CV-3002",
        }
    }

    /// Whether the failure is recoverable by falling back to an empty list.
    ///
    /// Everything at the content boundary is; configuration failures are not,
    /// since they indicate an operator mistake rather than bad content.
    #[must_use]
    pub const fn is_content_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingContent { .. }
                | Self::ContentParse { .. }
                | Self::DuplicateId { .. }
                | Self::InvalidRecord { .. }
                | Self::Io { .. }
        )
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for CvError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for CvError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_errors() -> Vec<CvError> {
        vec![
            CvError::InvalidConfig {
                details: String::new(),
            },
            CvError::MissingConfig {
                path: PathBuf::new(),
            },
            CvError::ConfigParse {
                context: "",
                details: String::new(),
            },
            CvError::MissingContent {
                path: PathBuf::new(),
            },
            CvError::ContentParse {
                collection: "",
                details: String::new(),
            },
            CvError::DuplicateId {
                collection: "",
                id: String::new(),
            },
            CvError::InvalidRecord {
                collection: "",
                id: String::new(),
                details: String::new(),
            },
            CvError::Serialization {
                context: "",
                details: String::new(),
            },
            CvError::Io {
                path: PathBuf::new(),
                source: std::io::Error::other("test"),
            },
        ]
    }

    #[test]
    fn error_codes_are_unique() {
        let errors = sample_errors();
        let codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        let unique: std::collections::HashSet<&&str> = codes.iter().collect();
        assert_eq!(
            codes.len(),
            unique.len(),
            "error codes must be unique: {codes:?}"
        );
    }

    #[test]
    fn error_codes_have_cv_prefix() {
        for err in &sample_errors() {
            assert!(
                err.code().starts_with("CV-"),
                "code {} must start with CV-",
                err.code()
            );
        }
    }

    #[test]
    fn error_display_includes_code() {
        let err = CvError::DuplicateId {
            collection: "campaigns",
            id: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("CV-2201"),
            "display should contain error code: {msg}"
        );
        assert!(msg.contains("abc"), "display should contain id: {msg}");
    }

    #[test]
    fn content_failures_are_classified() {
        assert!(
            CvError::MissingContent {
                path: PathBuf::new()
            }
            .is_content_failure()
        );
        assert!(
            CvError::ContentParse {
                collection: "posts",
                details: String::new()
            }
            .is_content_failure()
        );
        assert!(
            !CvError::InvalidConfig {
                details: String::new()
            }
            .is_content_failure()
        );
        assert!(
            !CvError::MissingConfig {
                path: PathBuf::new()
            }
            .is_content_failure()
        );
    }

    #[test]
    fn io_convenience_constructor() {
        let err = CvError::io(
            "/tmp/campaigns.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), "CV-3002");
        assert!(err.to_string().contains("/tmp/campaigns.json"));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CvError = json_err.into();
        assert_eq!(err.code(), "CV-2101");
    }

    #[test]
    fn from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= invalid").unwrap_err();
        let err: CvError = toml_err.into();
        assert_eq!(err.code(), "CV-1003");
    }
}
