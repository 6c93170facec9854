//! Configuration system: TOML file + env var overrides + defaults.

#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::errors::{CvError, Result};

/// Full Content Vault configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub content: ContentConfig,
    pub selection: SelectionConfig,
    pub paths: PathsConfig,
}

/// Content directory and collection file names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding the JSON collection files.
    pub content_dir: PathBuf,
    pub campaigns_file: String,
    pub posts_file: String,
    pub projects_file: String,
}

/// Detail-view selection tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SelectionConfig {
    /// Grace period between close and clearing the active record id, in
    /// milliseconds. Covers the exit transition; zero disables the delay.
    pub close_grace_ms: u64,
}

/// Filesystem paths used by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    pub config_file: PathBuf,
    pub jsonl_log: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            campaigns_file: "campaigns.json".to_owned(),
            posts_file: "posts.json".to_owned(),
            projects_file: "projects.json".to_owned(),
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self { close_grace_ms: 300 }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from("content_vault.toml"),
            jsonl_log: PathBuf::from("content_vault.activity.jsonl"),
        }
    }
}

impl SelectionConfig {
    /// Grace period as a [`Duration`].
    #[must_use]
    pub const fn close_grace(&self) -> Duration {
        Duration::from_millis(self.close_grace_ms)
    }
}

impl Config {
    /// Default configuration path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathsConfig::default().config_file
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from the default
    /// path; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| CvError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let parsed: Self = toml::from_str(&raw)?;
            parsed
        } else if is_explicit_path {
            return Err(CvError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.paths.config_file = path_buf;
        cfg.apply_env_overrides()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        set_env_path("CV_CONTENT_DIR", &mut self.content.content_dir);
        set_env_path("CV_JSONL_LOG", &mut self.paths.jsonl_log);
        set_env_u64("CV_CLOSE_GRACE_MS", &mut self.selection.close_grace_ms)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.content.content_dir.as_os_str().is_empty() {
            return Err(CvError::InvalidConfig {
                details: "content.content_dir must not be empty".to_owned(),
            });
        }
        for (key, name) in [
            ("content.campaigns_file", &self.content.campaigns_file),
            ("content.posts_file", &self.content.posts_file),
            ("content.projects_file", &self.content.projects_file),
        ] {
            if name.trim().is_empty() {
                return Err(CvError::InvalidConfig {
                    details: format!("{key} must not be empty"),
                });
            }
        }
        // An exit transition beyond a few seconds means a stuck page, not a
        // slow animation.
        if self.selection.close_grace_ms > 10_000 {
            return Err(CvError::InvalidConfig {
                details: format!(
                    "selection.close_grace_ms {} exceeds the 10000 ms ceiling",
                    self.selection.close_grace_ms
                ),
            });
        }
        Ok(())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}

fn set_env_path(name: &str, target: &mut PathBuf) {
    if let Some(raw) = non_empty_env(name) {
        *target = PathBuf::from(raw);
    }
}

fn set_env_u64(name: &str, target: &mut u64) -> Result<()> {
    if let Some(raw) = non_empty_env(name) {
        *target = raw.trim().parse().map_err(|_| CvError::InvalidConfig {
            details: format!("{name} must be an unsigned integer, got {raw:?}"),
        })?;
    }
    Ok(())
}
