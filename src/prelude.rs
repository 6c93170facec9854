//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use content_vault::prelude::*;
//! ```

// Core
pub use crate::core::config::Config;
pub use crate::core::errors::{CvError, Result};

// Catalog
pub use crate::catalog::{
    ArchiveFilter, ArchiveSort, BlogFilter, BlogSort, Campaign, CardSize, ContentRecord,
    FilterLabel, Post, Project, ProjectDetail, ProjectFilter, ProjectSort, SortMode,
};

// Controller
pub use crate::controller::{
    DetailPhase, Direction, Key, ListCmd, ListController, ListMsg, Selection, update,
};

// Source
pub use crate::source::{ContentSource, JsonContentSource, load_or_empty};

// Pages
pub use crate::page::{ArchivePage, BlogPage, ProjectsPage};
