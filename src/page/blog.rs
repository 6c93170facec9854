//! The blog page: filtered, sorted post list with a detail drawer.

use crate::catalog::Post;
use crate::core::config::Config;
use crate::logger::{JsonlConfig, JsonlWriter};
use crate::page::PageView;
use crate::source::{ContentSource, load_or_empty, post_by_slug};

/// The blog page over post records.
pub type BlogPage = PageView<Post>;

impl BlogPage {
    /// Load posts from the source and assemble the page.
    #[must_use]
    pub fn new(source: &dyn ContentSource, config: &Config) -> Self {
        let mut log = JsonlWriter::open(&JsonlConfig::at(&config.paths.jsonl_log));
        let posts = load_or_empty("blog", source.get_all_posts(), &mut log);
        Self::assemble("blog", posts, config.selection.close_grace(), log)
    }

    /// Open the drawer for the post with this slug (deep-link entry point).
    ///
    /// Slug resolution goes over the loaded collection; `select` still
    /// enforces visibility against the active filter. Silent no-op when the
    /// slug is unknown or its post is filtered out.
    pub fn select_by_slug(&mut self, slug: &str) -> bool {
        let Some(id) = post_by_slug(self.controller.records(), slug).map(|p| p.id.clone()) else {
            return false;
        };
        self.select(&id)
    }
}
