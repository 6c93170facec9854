//! List controller state: filtered/sorted/searched view plus the detail-view
//! selection cursor.
//!
//! All display state lives in [`ListController`]. Operations mutate the
//! controller synchronously; the visible list is recomputed as a pure
//! function of the loaded records and the active filter/sort/search states.
//!
//! **Design invariant:** the controller never mutates a record and performs
//! no I/O. Deferred effects (the close-grace clear) are described as values
//! for the caller to schedule.

use std::time::Duration;

use memchr::memmem;

use crate::catalog::{ContentRecord, FilterLabel, SortMode};
use crate::controller::input::{KeyListenerGuard, ListenerRegistry};
use crate::controller::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Listener set registered while a detail view is open.
pub const DETAIL_LISTENER_SET: &str = "detail-view";

/// Navigation direction relative to the active record's position in the
/// current visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the start of the visible list, wrapping to the end.
    Prev,
    /// Toward the end of the visible list, wrapping to the start.
    Next,
}

/// Detail-view lifecycle phase.
///
/// `Closing` retains the active id through the exit transition; the deferred
/// clear moves the cursor back to `Closed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailPhase {
    /// No detail view; the cursor is empty.
    #[default]
    Closed,
    /// A detail view is displayed; navigation is live.
    Open,
    /// Dismissed, exit transition running; the active id is still set.
    Closing,
}

/// The selection cursor: which record (if any) is open for detail viewing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Id of the record the detail view shows. Retained through `Closing`.
    pub active_id: Option<String>,
    /// Lifecycle phase.
    pub phase: DetailPhase,
}

impl Selection {
    /// Whether a detail view is currently displayed.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == DetailPhase::Open
    }
}

/// A deferred clear of the selection cursor, to be scheduled by the runtime
/// after the close-grace delay. Epoch-guarded: a re-open during `Closing`
/// advances the epoch, so the stale clear is ignored when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClear {
    /// Epoch the clear belongs to; compared on delivery.
    pub epoch: u64,
    /// Delay before the clear should fire.
    pub after: Duration,
}

/// Holds a list of content records and produces the ordered, filtered view
/// to render, plus the open-record cursor with prev/next navigation.
#[derive(Debug)]
pub struct ListController<R: ContentRecord> {
    records: Vec<R>,
    filter: R::Filter,
    sort: R::Sort,
    search_term: String,
    selection: Selection,
    clear_epoch: u64,
    close_grace: Duration,
    listeners: ListenerRegistry,
    scroll_lock: ScrollLock,
    listener_guard: Option<KeyListenerGuard>,
    scroll_guard: Option<ScrollLockGuard>,
}

impl<R: ContentRecord> ListController<R> {
    /// Create a controller over a loaded collection. The load order is the
    /// default ordering every sort mode ties back to.
    #[must_use]
    pub fn new(records: Vec<R>, close_grace: Duration) -> Self {
        Self {
            records,
            filter: R::Filter::default(),
            sort: R::Sort::default(),
            search_term: String::new(),
            selection: Selection::default(),
            clear_epoch: 0,
            close_grace,
            listeners: ListenerRegistry::new(),
            scroll_lock: ScrollLock::new(),
            listener_guard: None,
            scroll_guard: None,
        }
    }

    // ── read-only snapshots ──

    /// The full loaded collection, in load order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Active filter label.
    #[must_use]
    pub fn filter(&self) -> R::Filter {
        self.filter
    }

    /// Active sort mode.
    #[must_use]
    pub fn sort(&self) -> R::Sort {
        self.sort
    }

    /// Active search term (empty when the search box is blank).
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The selection cursor.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Scroll-lock handle for the render layer.
    #[must_use]
    pub fn scroll_lock(&self) -> ScrollLock {
        self.scroll_lock.clone()
    }

    /// Listener registry for the page chrome.
    #[must_use]
    pub fn listener_registry(&self) -> ListenerRegistry {
        self.listeners.clone()
    }

    /// The record the detail view shows, if one is active and still loaded.
    #[must_use]
    pub fn selected(&self) -> Option<&R> {
        let id = self.selection.active_id.as_deref()?;
        self.records.iter().find(|r| r.id() == id)
    }

    // ── view computation ──

    /// The ordered, filtered, searched list to render.
    ///
    /// Pure with respect to the collection: records are never mutated and a
    /// fresh sequence is returned on every call. An empty result is valid
    /// and renders the no-results state.
    #[must_use]
    pub fn visible(&self) -> Vec<&R> {
        let needle = self.search_term.trim().to_lowercase();
        let finder = (!needle.is_empty()).then(|| memmem::Finder::new(needle.as_bytes()));

        let mut out: Vec<&R> = self
            .records
            .iter()
            .filter(|r| matches_filter(*r, self.filter))
            .filter(|r| matches_search(*r, finder.as_ref()))
            .collect();
        // sort_by is stable: equal keys keep their prior relative order.
        out.sort_by(|a, b| self.sort.compare(a, b));
        out
    }

    // ── operations ──

    /// Switch the active filter. No-op if already active.
    /// Returns `true` if the filter changed.
    ///
    /// An open detail view is left alone even if its record no longer
    /// matches; navigation simply stops resolving until a new selection.
    pub fn set_filter(&mut self, filter: R::Filter) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        true
    }

    /// Switch the active sort mode.
    pub fn set_sort(&mut self, sort: R::Sort) {
        self.sort = sort;
    }

    /// Replace the search term. Matching is case-insensitive substring over
    /// the record's search fields, AND-combined with the active filter.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Open the detail view for the record with this id.
    ///
    /// Silent no-op when the id is absent from the current visible snapshot
    /// (stale click after a filter change). Returns `true` if a detail view
    /// is now open for `id`.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.visible().iter().any(|r| r.id() == id) {
            return false;
        }
        // Invalidate any clear still pending from an earlier close.
        self.clear_epoch = self.clear_epoch.wrapping_add(1);
        self.selection = Selection {
            active_id: Some(id.to_owned()),
            phase: DetailPhase::Open,
        };
        if self.listener_guard.is_none() {
            self.listener_guard = self.listeners.register(DETAIL_LISTENER_SET);
        }
        if self.scroll_guard.is_none() {
            self.scroll_guard = self.scroll_lock.acquire();
        }
        true
    }

    /// Dismiss the detail view. The active id is retained through the grace
    /// period so the exit transition has content to render.
    ///
    /// Returns the deferred clear for the runtime to schedule, or `None` if
    /// nothing was open.
    pub fn close(&mut self) -> Option<PendingClear> {
        if self.selection.phase != DetailPhase::Open {
            return None;
        }
        self.selection.phase = DetailPhase::Closing;
        // Listener set and scroll lock release immediately, on every exit
        // path; only the cursor clear is deferred.
        self.listener_guard = None;
        self.scroll_guard = None;
        self.clear_epoch = self.clear_epoch.wrapping_add(1);
        Some(PendingClear {
            epoch: self.clear_epoch,
            after: self.close_grace,
        })
    }

    /// Complete a close once the grace delay has elapsed. Stale epochs (a
    /// re-open happened meanwhile) are ignored.
    pub fn finish_close(&mut self, epoch: u64) {
        if epoch == self.clear_epoch && self.selection.phase == DetailPhase::Closing {
            self.selection = Selection::default();
        }
    }

    /// Move the cursor to the previous/next record in the current visible
    /// list, wrapping circularly at either end.
    ///
    /// Silent no-op when no detail view is open, the visible list is empty,
    /// or the active record has been filtered out from underneath the view.
    /// Returns `true` if the cursor moved.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        if self.selection.phase != DetailPhase::Open {
            return false;
        }
        let Some(active) = self.selection.active_id.clone() else {
            return false;
        };
        let visible = self.visible();
        let Some(pos) = visible.iter().position(|r| r.id() == active) else {
            return false;
        };
        let target = match direction {
            Direction::Prev => {
                if pos == 0 {
                    visible.len() - 1
                } else {
                    pos - 1
                }
            }
            Direction::Next => {
                if pos + 1 == visible.len() {
                    0
                } else {
                    pos + 1
                }
            }
        };
        let id = visible[target].id().to_owned();
        drop(visible);
        self.selection.active_id = Some(id);
        true
    }
}

/// Whether a record matches a filter label.
///
/// A record matches a non-catch-all label iff the label equals the primary
/// category OR the label is a member of the record's category tags. Both
/// fields participate; matching on only one changes visible results.
#[must_use]
pub fn matches_filter<R: ContentRecord>(record: &R, filter: R::Filter) -> bool {
    filter.as_tag().is_none_or(|tag| {
        record.category() == tag || record.category_tags().iter().any(|t| t == tag)
    })
}

fn matches_search<R: ContentRecord>(record: &R, finder: Option<&memmem::Finder<'_>>) -> bool {
    finder.is_none_or(|f| {
        record
            .search_fields()
            .iter()
            .any(|haystack| f.find(haystack.to_lowercase().as_bytes()).is_some())
    })
}
