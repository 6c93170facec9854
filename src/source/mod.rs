//! Content-source boundary: the query layer supplying record collections.
//!
//! One fetch per content kind, full ordered collection per call — no
//! pagination, no streaming. The load order is the insertion order the
//! controller preserves as the default ordering. Failures surface as
//! `Err`; the page layer recovers with [`load_or_empty`], never by
//! propagating.

use crate::catalog::{Campaign, Post, Project};
use crate::core::errors::Result;
use crate::logger::{EventType, JsonlWriter, LogEntry, Severity};

pub mod json;

pub use json::JsonContentSource;

/// The external headless-CMS query layer.
pub trait ContentSource {
    /// All campaigns, in source order.
    fn get_all_campaigns(&self) -> Result<Vec<Campaign>>;

    /// All blog posts, in source order.
    fn get_all_posts(&self) -> Result<Vec<Post>>;

    /// All projects, in source order.
    fn get_all_projects(&self) -> Result<Vec<Project>>;
}

/// Page-level recovery path for a content load: on failure, log a diagnostic
/// and fall back to an empty list. The page renders its no-items state; no
/// retry is attempted.
pub fn load_or_empty<T>(
    page: &str,
    result: Result<Vec<T>>,
    log: &mut JsonlWriter,
) -> Vec<T> {
    match result {
        Ok(records) => {
            let mut entry = LogEntry::new(EventType::ContentLoad, Severity::Info).page(page);
            entry.count = Some(records.len());
            log.write_entry(&entry);
            records
        }
        Err(err) => {
            let mut entry =
                LogEntry::new(EventType::ContentLoadFailed, Severity::Warning).page(page);
            entry.error_code = Some(err.code().to_owned());
            entry.error_message = Some(err.to_string());
            log.write_entry(&entry);
            Vec::new()
        }
    }
}

/// Find a post by its slug.
#[must_use]
pub fn post_by_slug<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|p| p.slug == slug)
}

/// Campaigns with the given media type, in source order.
#[must_use]
pub fn campaigns_by_media_type<'a>(campaigns: &'a [Campaign], media_type: &str) -> Vec<&'a Campaign> {
    campaigns
        .iter()
        .filter(|c| c.media_type == media_type)
        .collect()
}

/// Campaigns carrying the given badge, in source order.
#[must_use]
pub fn campaigns_by_badge<'a>(campaigns: &'a [Campaign], badge: &str) -> Vec<&'a Campaign> {
    campaigns
        .iter()
        .filter(|c| c.badges.iter().any(|b| b == badge))
        .collect()
}
