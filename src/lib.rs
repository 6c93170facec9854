#![forbid(unsafe_code)]

//! Content Vault — headless core of a personal portfolio site.
//!
//! Owns the only stateful logic on the site:
//! 1. **List views** — filter, search, and stable sort over loaded record
//!    collections (campaigns, posts, projects)
//! 2. **Selection cursor** — the detail-view state machine with circular
//!    prev/next navigation and keyboard routing
//! 3. **Content boundary** — typed loading from a content directory with
//!    empty-list recovery on failure
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use content_vault::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use content_vault::core::config::Config;
//! use content_vault::controller::model::ListController;
//! ```

pub mod prelude;

pub mod catalog;
pub mod controller;
pub mod core;
pub mod logger;
pub mod page;
pub mod source;
