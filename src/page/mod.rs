//! Per-page assembly: one controller per list page, wired to a content
//! source, the activity log, and the page chrome.
//!
//! A page is created once per page view when the content source resolves;
//! filter/sort/selection state is mutated purely by user interaction and
//! destroyed on navigation away. Nothing persists.

use crate::catalog::{ContentRecord, FilterLabel, SortMode};
use crate::controller::input::{InputContext, Key, resolve_key};
use crate::controller::model::{Direction, ListController, Selection};
use crate::controller::scroll_lock::ScrollLock;
use crate::controller::update::ListCmd;
use crate::logger::{EventType, JsonlWriter, LogEntry, Severity};

pub mod archive;
pub mod blog;
pub mod projects;

pub use archive::ArchivePage;
pub use blog::BlogPage;
pub use projects::{DocViewer, FilterBar, FilterBarMode, ProjectsPage};

/// A list page: controller plus activity logging under the page's name.
///
/// The render layer reads the snapshot accessors and dispatches the
/// operations; every successful operation is logged as one JSONL line.
#[derive(Debug)]
pub struct PageView<R: ContentRecord> {
    name: &'static str,
    controller: ListController<R>,
    log: JsonlWriter,
}

impl<R: ContentRecord> PageView<R> {
    pub(crate) fn assemble(
        name: &'static str,
        records: Vec<R>,
        close_grace: std::time::Duration,
        log: JsonlWriter,
    ) -> Self {
        Self {
            name,
            controller: ListController::new(records, close_grace),
            log,
        }
    }

    // ── snapshots for the render layer ──

    /// Page name used in the activity log.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The ordered, filtered list to render.
    #[must_use]
    pub fn visible(&self) -> Vec<&R> {
        self.controller.visible()
    }

    /// Whether the page should render its no-results state.
    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        self.controller.visible().is_empty()
    }

    /// Active filter label.
    #[must_use]
    pub fn filter(&self) -> R::Filter {
        self.controller.filter()
    }

    /// Active sort mode.
    #[must_use]
    pub fn sort(&self) -> R::Sort {
        self.controller.sort()
    }

    /// Current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.controller.search_term()
    }

    /// The selection cursor.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        self.controller.selection()
    }

    /// The record the detail view shows, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&R> {
        self.controller.selected()
    }

    /// Scroll-lock handle for the render layer.
    #[must_use]
    pub fn scroll_lock(&self) -> ScrollLock {
        self.controller.scroll_lock()
    }

    // ── operations ──

    /// Switch the active filter tab.
    pub fn set_filter(&mut self, filter: R::Filter) {
        if self.controller.set_filter(filter) {
            let mut entry = self.entry(EventType::FilterChange);
            entry.filter = Some(filter.label().to_owned());
            entry.count = Some(self.controller.visible().len());
            self.log.write_entry(&entry);
        }
    }

    /// Switch the active sort mode.
    pub fn set_sort(&mut self, sort: R::Sort) {
        self.controller.set_sort(sort);
        let mut entry = self.entry(EventType::SortChange);
        entry.sort = Some(sort.label().to_owned());
        self.log.write_entry(&entry);
    }

    /// Replace the search-box contents.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.controller.set_search_term(term);
        let mut entry = self.entry(EventType::SearchChange);
        entry.count = Some(self.controller.visible().len());
        self.log.write_entry(&entry);
    }

    /// Open the detail view for a record. Returns `true` if it opened.
    pub fn select(&mut self, id: &str) -> bool {
        let opened = self.controller.select(id);
        if opened {
            let mut entry = self.entry(EventType::DetailOpen);
            entry.record_id = Some(id.to_owned());
            self.log.write_entry(&entry);
        }
        opened
    }

    /// Dismiss the detail view.
    pub fn close(&mut self) -> ListCmd {
        self.controller.close().map_or(ListCmd::None, |pending| {
            let entry = self.entry(EventType::DetailClose);
            self.log.write_entry(&entry);
            ListCmd::ScheduleSelectionClear {
                epoch: pending.epoch,
                after: pending.after,
            }
        })
    }

    /// Complete a close after the grace delay.
    pub fn finish_close(&mut self, epoch: u64) {
        self.controller.finish_close(epoch);
    }

    /// Move the detail cursor within the visible list.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let moved = self.controller.navigate(direction);
        if moved {
            let mut entry = self.entry(EventType::DetailNavigate);
            entry.record_id = self.controller.selection().active_id.clone();
            self.log.write_entry(&entry);
        }
        moved
    }

    /// Route a key press through the detail-view bindings.
    pub fn handle_key(&mut self, key: Key) -> ListCmd {
        let context = InputContext {
            detail_open: self.controller.selection().is_open(),
            dropdown_open: false,
        };
        self.apply_key(key, context)
    }

    pub(crate) fn apply_key(&mut self, key: Key, context: InputContext) -> ListCmd {
        use crate::controller::input::InputAction;
        match resolve_key(key, context).action {
            Some(InputAction::CloseDetail) => self.close(),
            Some(InputAction::NavigatePrev) => {
                self.navigate(Direction::Prev);
                ListCmd::None
            }
            Some(InputAction::NavigateNext) => {
                self.navigate(Direction::Next);
                ListCmd::None
            }
            Some(InputAction::CloseDropdown) | None => ListCmd::None,
        }
    }

    fn entry(&self, event: EventType) -> LogEntry {
        LogEntry::new(event, Severity::Info).page(self.name)
    }
}
