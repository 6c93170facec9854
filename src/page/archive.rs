//! The Campaign Vault page: filterable, searchable, sortable ad archive.

use crate::catalog::Campaign;
use crate::core::config::Config;
use crate::logger::{JsonlConfig, JsonlWriter};
use crate::page::PageView;
use crate::source::{ContentSource, load_or_empty};

/// The ad-archive page over campaign records.
pub type ArchivePage = PageView<Campaign>;

impl ArchivePage {
    /// Load campaigns from the source and assemble the page. A failed load
    /// is logged and the page comes up with its no-items state.
    #[must_use]
    pub fn new(source: &dyn ContentSource, config: &Config) -> Self {
        let mut log = JsonlWriter::open(&JsonlConfig::at(&config.paths.jsonl_log));
        let campaigns = load_or_empty("archive", source.get_all_campaigns(), &mut log);
        Self::assemble(
            "archive",
            campaigns,
            config.selection.close_grace(),
            log,
        )
    }
}
