//! Ad-archive campaign records and the Campaign Vault page's tab/sort sets.

#![allow(missing_docs)]

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{ContentRecord, FilterLabel, SortMode, alphabetic_cmp};

/// Card footprint in the scrapbook grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// One advertising campaign in the archive.
///
/// `media_type` is the primary category; `badges` carry the editorial labels
/// (Award-Winning, Controversial, ...) that double as filter tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub campaign_name: String,
    pub brand: String,
    pub agency: String,
    pub year: u16,
    pub media_type: String,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub visual: String,
    #[serde(default)]
    pub personal_insight: String,
    #[serde(default)]
    pub full_insight: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub size: CardSize,
    /// Authored position for the "Most Impactful" ordering. Unranked
    /// campaigns sort after ranked ones, by id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_rank: Option<u32>,
}

impl ContentRecord for Campaign {
    type Filter = ArchiveFilter;
    type Sort = ArchiveSort;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.media_type
    }

    fn category_tags(&self) -> &[String] {
        &self.badges
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.campaign_name, &self.brand]
    }
}

/// Archive page filter tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArchiveFilter {
    #[default]
    All,
    Tv,
    Print,
    Ooh,
    Digital,
    Experimental,
    AwardWinning,
    Controversial,
}

impl FilterLabel for ArchiveFilter {
    fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Tv => "TV",
            Self::Print => "Print",
            Self::Ooh => "OOH",
            Self::Digital => "Digital",
            Self::Experimental => "Experimental",
            Self::AwardWinning => "Award-Winning",
            Self::Controversial => "Controversial",
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
            Self::Tv,
            Self::Print,
            Self::Ooh,
            Self::Digital,
            Self::Experimental,
            Self::AwardWinning,
            Self::Controversial,
        ]
    }
}

/// Archive page sort menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArchiveSort {
    #[default]
    MostImpactful,
    MostRecent,
    Oldest,
    Alphabetical,
}

impl SortMode<Campaign> for ArchiveSort {
    fn label(self) -> &'static str {
        match self {
            Self::MostImpactful => "Most Impactful",
            Self::MostRecent => "Most Recent",
            Self::Oldest => "Oldest",
            Self::Alphabetical => "Alphabetical",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::MostImpactful,
            Self::MostRecent,
            Self::Oldest,
            Self::Alphabetical,
        ]
    }

    fn compare(self, a: &Campaign, b: &Campaign) -> Ordering {
        match self {
            Self::MostImpactful => match (a.impact_rank, b.impact_rank) {
                (Some(ra), Some(rb)) => ra.cmp(&rb),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.id.cmp(&b.id),
            },
            Self::MostRecent => b.year.cmp(&a.year),
            Self::Oldest => a.year.cmp(&b.year),
            Self::Alphabetical => alphabetic_cmp(&a.campaign_name, &b.campaign_name),
        }
    }
}
