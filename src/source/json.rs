//! JSON-backed content source reading collection files from a directory.
//!
//! The loader validates what the controller relies on: ids unique within a
//! collection, post slugs well-formed. Records pass through in file order.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::catalog::{Campaign, ContentRecord, Post, Project, post::is_valid_slug};
use crate::core::config::ContentConfig;
use crate::core::errors::{CvError, Result};
use crate::source::ContentSource;

/// Content source reading `campaigns.json` / `posts.json` / `projects.json`
/// from a content directory.
#[derive(Debug, Clone)]
pub struct JsonContentSource {
    content_dir: PathBuf,
    campaigns_file: String,
    posts_file: String,
    projects_file: String,
}

impl JsonContentSource {
    /// Source over a content directory with the default file names.
    #[must_use]
    pub fn new(content_dir: impl AsRef<Path>) -> Self {
        Self::from_config(&ContentConfig {
            content_dir: content_dir.as_ref().to_path_buf(),
            ..ContentConfig::default()
        })
    }

    /// Source configured from the `[content]` section.
    #[must_use]
    pub fn from_config(config: &ContentConfig) -> Self {
        Self {
            content_dir: config.content_dir.clone(),
            campaigns_file: config.campaigns_file.clone(),
            posts_file: config.posts_file.clone(),
            projects_file: config.projects_file.clone(),
        }
    }

    fn load_collection<T: DeserializeOwned + ContentRecord>(
        &self,
        file_name: &str,
        collection: &'static str,
    ) -> Result<Vec<T>> {
        let path = self.content_dir.join(file_name);
        if !path.exists() {
            return Err(CvError::MissingContent { path });
        }
        let raw = fs::read_to_string(&path).map_err(|source| CvError::io(&path, source))?;
        let records: Vec<T> =
            serde_json::from_str(&raw).map_err(|e| CvError::ContentParse {
                collection,
                details: e.to_string(),
            })?;
        validate_unique_ids(&records, collection)?;
        Ok(records)
    }
}

impl ContentSource for JsonContentSource {
    fn get_all_campaigns(&self) -> Result<Vec<Campaign>> {
        self.load_collection(&self.campaigns_file, "campaigns")
    }

    fn get_all_posts(&self) -> Result<Vec<Post>> {
        let posts: Vec<Post> = self.load_collection(&self.posts_file, "posts")?;
        for post in &posts {
            if !is_valid_slug(&post.slug) {
                return Err(CvError::InvalidRecord {
                    collection: "posts",
                    id: post.id.clone(),
                    details: format!("malformed slug {:?}", post.slug),
                });
            }
        }
        Ok(posts)
    }

    fn get_all_projects(&self) -> Result<Vec<Project>> {
        self.load_collection(&self.projects_file, "projects")
    }
}

fn validate_unique_ids<T: ContentRecord>(records: &[T], collection: &'static str) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(CvError::DuplicateId {
                collection,
                id: record.id().to_owned(),
            });
        }
    }
    Ok(())
}
