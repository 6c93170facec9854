//! The projects page: filtered project grid, floating filter bar, and the
//! document viewer for projects that carry a deck or paper.

use crate::catalog::{Project, ProjectFilter};
use crate::controller::input::{InputAction, InputContext, Key, resolve_key};
use crate::controller::update::ListCmd;
use crate::core::config::Config;
use crate::logger::{JsonlConfig, JsonlWriter};
use crate::page::PageView;
use crate::source::{ContentSource, load_or_empty};

/// Extra scroll past the hero before the filter bar floats. Keeps the
/// docked/floating transition from flapping right at the hero edge.
const FLOAT_BUFFER_PX: f64 = 150.0;

/// Where the filter bar currently renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterBarMode {
    /// In the page flow, below the hero.
    #[default]
    Docked,
    /// Pinned to the viewport with a dropdown for tab selection.
    Floating,
}

/// Scroll-driven filter bar state.
///
/// Past the hero the bar floats and its tabs collapse into a dropdown;
/// scrolling back re-docks the bar and force-closes the dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBar {
    mode: FilterBarMode,
    dropdown_open: bool,
    hero_height: f64,
}

impl FilterBar {
    /// Bar for a page whose hero measures `hero_height` pixels.
    #[must_use]
    pub fn new(hero_height: f64) -> Self {
        Self {
            mode: FilterBarMode::Docked,
            dropdown_open: false,
            hero_height,
        }
    }

    /// Current render mode.
    #[must_use]
    pub const fn mode(&self) -> FilterBarMode {
        self.mode
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub const fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Apply a new scroll position.
    pub fn update_scroll(&mut self, scroll_y: f64) {
        if scroll_y > self.hero_height + FLOAT_BUFFER_PX {
            self.mode = FilterBarMode::Floating;
        } else {
            self.mode = FilterBarMode::Docked;
            self.dropdown_open = false;
        }
    }

    /// Toggle the dropdown. Only meaningful while floating.
    pub fn toggle_dropdown(&mut self) {
        if self.mode == FilterBarMode::Floating {
            self.dropdown_open = !self.dropdown_open;
        }
    }

    /// Close the dropdown (tab chosen, backdrop click, Escape).
    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }
}

/// A document open in the viewer overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    /// Location of the document asset.
    pub url: String,
    /// Title shown in the viewer chrome.
    pub title: String,
}

/// Open/close state for the document viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocViewer {
    current: Option<OpenDocument>,
}

impl DocViewer {
    /// Open a document, replacing any already shown.
    pub fn open(&mut self, url: impl Into<String>, title: impl Into<String>) {
        self.current = Some(OpenDocument {
            url: url.into(),
            title: title.into(),
        });
    }

    /// Close the viewer.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Whether the viewer is showing a document.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// The document on display, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&OpenDocument> {
        self.current.as_ref()
    }
}

/// The projects page: list view plus page chrome.
#[derive(Debug)]
pub struct ProjectsPage {
    view: PageView<Project>,
    filter_bar: FilterBar,
    doc_viewer: DocViewer,
}

impl ProjectsPage {
    /// Default hero height used until the layout reports a measurement.
    pub const DEFAULT_HERO_HEIGHT: f64 = 600.0;

    /// Load projects from the source and assemble the page.
    #[must_use]
    pub fn new(source: &dyn ContentSource, config: &Config) -> Self {
        let mut log = JsonlWriter::open(&JsonlConfig::at(&config.paths.jsonl_log));
        let projects = load_or_empty("projects", source.get_all_projects(), &mut log);
        Self {
            view: PageView::assemble(
                "projects",
                projects,
                config.selection.close_grace(),
                log,
            ),
            filter_bar: FilterBar::new(Self::DEFAULT_HERO_HEIGHT),
            doc_viewer: DocViewer::default(),
        }
    }

    /// The list view (snapshots and list operations).
    #[must_use]
    pub const fn view(&self) -> &PageView<Project> {
        &self.view
    }

    /// Mutable list view for dispatching list operations.
    pub fn view_mut(&mut self) -> &mut PageView<Project> {
        &mut self.view
    }

    /// Filter bar state for the render layer.
    #[must_use]
    pub const fn filter_bar(&self) -> &FilterBar {
        &self.filter_bar
    }

    /// Document viewer state for the render layer.
    #[must_use]
    pub const fn doc_viewer(&self) -> &DocViewer {
        &self.doc_viewer
    }

    /// Report a hero measurement from the layout.
    pub fn set_hero_height(&mut self, hero_height: f64) {
        self.filter_bar.hero_height = hero_height;
    }

    /// Apply a new scroll position to the filter bar.
    pub fn update_scroll(&mut self, scroll_y: f64) {
        self.filter_bar.update_scroll(scroll_y);
    }

    /// Toggle the floating filter dropdown.
    pub fn toggle_dropdown(&mut self) {
        self.filter_bar.toggle_dropdown();
    }

    /// Choose a filter tab: narrows the grid and closes the dropdown.
    pub fn choose_filter(&mut self, filter: ProjectFilter) {
        self.view.set_filter(filter);
        self.filter_bar.close_dropdown();
    }

    /// Open the detail modal; an open dropdown closes first.
    pub fn select(&mut self, id: &str) -> bool {
        self.filter_bar.close_dropdown();
        self.view.select(id)
    }

    /// Open the document viewer for the selected project's document, if the
    /// project carries one.
    pub fn open_document(&mut self) -> bool {
        let Some(project) = self.view.selected() else {
            return false;
        };
        let Some(url) = project.pdf_link.clone() else {
            return false;
        };
        let title = project.title.clone();
        self.doc_viewer.open(url, title);
        true
    }

    /// Route a key press with overlay precedence: the dropdown takes Escape
    /// first, then the document viewer, then the detail modal.
    pub fn handle_key(&mut self, key: Key) -> ListCmd {
        let context = InputContext {
            detail_open: self.view.selection().is_open(),
            dropdown_open: self.filter_bar.dropdown_open,
        };
        let resolution = resolve_key(key, context);
        if resolution.action == Some(InputAction::CloseDropdown) {
            self.filter_bar.close_dropdown();
            return ListCmd::None;
        }
        if self.doc_viewer.is_open() && key == Key::Escape {
            self.doc_viewer.close();
            return ListCmd::None;
        }
        self.view.apply_key(key, context)
    }
}
