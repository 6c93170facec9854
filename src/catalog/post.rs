//! Blog post records, slug handling, and the blog page's filter/sort sets.

#![allow(missing_docs)]

use std::cmp::Ordering;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{ContentRecord, FilterLabel, SortMode, alphabetic_cmp};

/// URL slugs: lowercase alphanumeric runs separated by single hyphens.
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is static"));

/// Non-slug character runs, collapsed to a single hyphen by [`slugify`].
static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("non-slug pattern is static"));

/// One blog post.
///
/// `category` is the primary authored category; `categories` carry any
/// additional labels. Both participate in filter matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub hook: String,
    #[serde(default)]
    pub main_image: String,
    pub category: String,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Rendered body paragraphs.
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub author: String,
}

impl ContentRecord for Post {
    type Filter = BlogFilter;
    type Sort = BlogSort;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn category_tags(&self) -> &[String] {
        &self.categories
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.author]
    }
}

/// Whether `candidate` is a well-formed slug.
#[must_use]
pub fn is_valid_slug(candidate: &str) -> bool {
    SLUG_RE.is_match(candidate)
}

/// Derive a slug from a title: lowercase, non-alphanumeric runs collapsed to
/// hyphens, edges trimmed.
#[must_use]
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_SLUG_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_owned()
}

/// Blog page filter tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlogFilter {
    #[default]
    All,
    Strategy,
    Reflections,
    Reviews,
    BehindTheScenes,
}

impl FilterLabel for BlogFilter {
    fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Strategy => "strategy",
            Self::Reflections => "reflections",
            Self::Reviews => "reviews",
            Self::BehindTheScenes => "behind-the-scenes",
        }
    }

    fn as_tag(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            other => Some(other.label()),
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::All,
            Self::Strategy,
            Self::Reflections,
            Self::Reviews,
            Self::BehindTheScenes,
        ]
    }
}

/// Blog page sort menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlogSort {
    #[default]
    Newest,
    Mood,
}

impl SortMode<Post> for BlogSort {
    fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Mood => "Mood",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Newest, Self::Mood]
    }

    fn compare(self, a: &Post, b: &Post) -> Ordering {
        match self {
            Self::Newest => b.published_at.cmp(&a.published_at),
            Self::Mood => alphabetic_cmp(&a.mood, &b.mood),
        }
    }
}
