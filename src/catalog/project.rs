//! Portfolio project records with explicitly tagged detail variants.
//!
//! The detail variant is authored data, not something inferred from tag
//! arrays at render time: render dispatch is a match over [`ProjectDetail`],
//! and each variant carries only the fields its layout shows.

#![allow(missing_docs)]

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{ContentRecord, FilterLabel, SortMode};

/// Hero media kind for the project card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroType {
    #[default]
    Image,
    Video,
}

/// A single quantified outcome inside a case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMetric {
    pub metric: String,
    pub value: String,
    #[serde(default)]
    pub description: String,
}

/// Variant-specific detail fields, tagged at the authoring boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectDetail {
    CaseStudy {
        #[serde(default)]
        challenge: Option<String>,
        #[serde(default)]
        strategy: Option<String>,
        #[serde(default)]
        process: Vec<String>,
        #[serde(default)]
        results: Vec<ResultMetric>,
        #[serde(default)]
        learnings: Option<String>,
    },
    Creative {
        #[serde(default)]
        synopsis: Option<String>,
        #[serde(default)]
        role: Option<String>,
        #[serde(default)]
        tools_used: Vec<String>,
        #[serde(default)]
        design_rationale: Option<String>,
    },
    ShortFilm {
        #[serde(default)]
        duration: Option<String>,
        #[serde(default)]
        embed_video: Option<String>,
        #[serde(default)]
        festivals: Vec<String>,
        #[serde(default)]
        behind_the_scenes: Option<String>,
    },
    Research {
        #[serde(default)]
        research_focus: Option<String>,
        #[serde(default)]
        methodology: Option<String>,
        #[serde(default)]
        key_findings: Option<String>,
        #[serde(default)]
        implications: Option<String>,
    },
}

impl ProjectDetail {
    /// Stable name of the variant, for logging and display badges.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::CaseStudy { .. } => "case_study",
            Self::Creative { .. } => "creative",
            Self::ShortFilm { .. } => "short_film",
            Self::Research { .. } => "research",
        }
    }
}

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub insight: String,
    #[serde(default)]
    pub year: String,
    pub category: String,
    #[serde(default)]
    pub category_tags: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub hero_type: HeroType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_link: Option<String>,
    pub detail: ProjectDetail,
}

impl Project {
    /// Whether the project carries a viewable document.
    #[must_use]
    pub const fn has_document(&self) -> bool {
        self.pdf_link.is_some()
    }
}

impl ContentRecord for Project {
    type Filter = ProjectFilter;
    type Sort = ProjectSort;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn category_tags(&self) -> &[String] {
        &self.category_tags
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.insight]
    }
}

/// Projects page filter tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Strategy,
    Storytelling,
    DataViz,
    Multimedia,
    Research,
}

impl FilterLabel for ProjectFilter {
    fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Strategy => "Strategy",
            Self::Storytelling => "Storytelling",
            Self::DataViz => "Data Viz",
            Self::Multimedia => "Multimedia",
            Self::Research => "Research",
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
            Self::Storytelling,
            Self::DataViz,
            Self::Multimedia,
            Self::Research,
        ]
    }
}

/// The projects page renders in curated (insertion) order only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectSort {
    #[default]
    Curated,
}

impl SortMode<Project> for ProjectSort {
    fn label(self) -> &'static str {
        "Curated"
    }

    fn all() -> &'static [Self] {
        &[Self::Curated]
    }

    fn compare(self, _a: &Project, _b: &Project) -> Ordering {
        // Stable sort preserves load order under an all-equal comparator.
        Ordering::Equal
    }
}
