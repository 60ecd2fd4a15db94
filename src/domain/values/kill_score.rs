//! Kill Score: a 0–100 measure of how beatable a keyword's first page is.
//!
//! Four additive components, each capped before summing:
//!
//! | component            | signal                                   | cap |
//! |----------------------|------------------------------------------|-----|
//! | replaceable results  | directory, or title ignores the keyword  | 40  |
//! | weak competitors     | domain rank < 40, backlinks < 50         | 30  |
//! | commercial intent    | CPC tier                                 | 15  |
//! | volume sweet spot    | monthly search volume band               | 15  |
//!
//! A page weak on both authority and backlinks counts twice toward the
//! weak-competitor component.

use crate::domain::entities::keyword_metrics::KeywordMetrics;
use crate::domain::entities::ranking_page::{RankingPage, FIRST_PAGE_SIZE};
use crate::domain::values::directory::{classify, DomainClass};
use crate::domain::values::replaceability::{title_mentions, WEAK_AUTHORITY_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_SCORE: u8 = 100;

const REPLACEABLE_POINTS: u32 = 8;
const REPLACEABLE_CAP: u32 = 40;
const WEAK_SIGNAL_POINTS: u32 = 6;
const WEAK_SIGNAL_CAP: u32 = 30;
const WEAK_BACKLINKS_THRESHOLD: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpportunityScore(u8);

impl OpportunityScore {
    pub fn new(value: u32) -> Self {
        OpportunityScore(value.min(MAX_SCORE as u32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for OpportunityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-component breakdown, each already capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub replaceable: u32,
    pub weak_competitors: u32,
    pub commercial_intent: u32,
    pub volume: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> OpportunityScore {
        OpportunityScore::new(
            self.replaceable + self.weak_competitors + self.commercial_intent + self.volume,
        )
    }
}

pub fn breakdown(pages: &[RankingPage], metrics: &KeywordMetrics) -> ScoreBreakdown {
    let first_page = &pages[..pages.len().min(FIRST_PAGE_SIZE)];

    let replaceable = first_page
        .iter()
        .filter(|p| {
            classify(&p.domain) == DomainClass::Directory
                || !title_mentions(&p.title, &metrics.keyword)
        })
        .count() as u32;

    let weak_signals: u32 = first_page
        .iter()
        .map(|p| {
            let weak_authority = p.domain_rank.is_some_and(|r| r < WEAK_AUTHORITY_THRESHOLD);
            let weak_backlinks = p.backlinks.is_some_and(|b| b < WEAK_BACKLINKS_THRESHOLD);
            weak_authority as u32 + weak_backlinks as u32
        })
        .sum();

    ScoreBreakdown {
        replaceable: (replaceable * REPLACEABLE_POINTS).min(REPLACEABLE_CAP),
        weak_competitors: (weak_signals * WEAK_SIGNAL_POINTS).min(WEAK_SIGNAL_CAP),
        commercial_intent: commercial_intent_points(metrics.cpc),
        volume: volume_points(metrics.search_volume),
    }
}

/// Score a first page against its keyword metrics. Pure and total.
pub fn kill_score(pages: &[RankingPage], metrics: &KeywordMetrics) -> OpportunityScore {
    let parts = breakdown(pages, metrics);
    tracing::debug!(
        keyword = %metrics.keyword,
        replaceable = parts.replaceable,
        weak_competitors = parts.weak_competitors,
        commercial_intent = parts.commercial_intent,
        volume = parts.volume,
        "kill score components"
    );
    parts.total()
}

fn commercial_intent_points(cpc: f64) -> u32 {
    if cpc >= 50.0 {
        15
    } else if cpc >= 30.0 {
        12
    } else if cpc >= 10.0 {
        8
    } else {
        0
    }
}

fn volume_points(volume: u64) -> u32 {
    match volume {
        200..=1200 => 15,
        100..=2000 => 10,
        0 => 0,
        _ => 5,
    }
}
