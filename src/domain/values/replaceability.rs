//! Whether a ranking page is realistically displaceable by a new,
//! purpose-built exact-match site.

use crate::domain::entities::ranking_page::PageCandidate;
use crate::domain::values::directory::{classify, DomainClass};
use serde::Serialize;

/// Authority below this marks a competitor as weak.
pub const WEAK_AUTHORITY_THRESHOLD: u32 = 40;

/// Authority assumed for a page that reports none: strong until proven weak.
pub const ASSUMED_AUTHORITY: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplaceabilityRule {
    /// Directory listing, or a title that ignores the keyword.
    Structural,
    /// Structural, plus weak authority. Used when ingesting SERP data.
    Ingestion { authority_threshold: u32 },
}

impl Default for ReplaceabilityRule {
    fn default() -> Self {
        ReplaceabilityRule::Ingestion {
            authority_threshold: WEAK_AUTHORITY_THRESHOLD,
        }
    }
}

/// Case-insensitive check that the page title mentions the keyword text.
pub fn title_mentions(title: &str, keyword: &str) -> bool {
    title.to_lowercase().contains(&keyword.trim().to_lowercase())
}

pub fn estimate(page: &PageCandidate, keyword: &str, rule: ReplaceabilityRule) -> bool {
    if classify(&page.domain) == DomainClass::Directory {
        return true;
    }
    if !title_mentions(&page.title, keyword) {
        return true;
    }
    match rule {
        ReplaceabilityRule::Structural => false,
        ReplaceabilityRule::Ingestion {
            authority_threshold,
        } => page.domain_rank.unwrap_or(ASSUMED_AUTHORITY) < authority_threshold,
    }
}
