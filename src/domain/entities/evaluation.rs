use crate::domain::entities::keyword_metrics::KeywordMetrics;
use crate::domain::entities::ranking_page::SerpResultSet;
use crate::domain::values::kill_score::{OpportunityScore, ScoreBreakdown};
use crate::domain::values::origin::SourcedResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Full outcome of evaluating one keyword as an EMD opportunity.
#[derive(Debug, Clone, Serialize)]
pub struct OpportunityEvaluation {
    pub id: String,
    pub keyword: String,
    pub location: String,
    pub evaluated_at: DateTime<Utc>,
    pub metrics: SourcedResult<Vec<KeywordMetrics>>,
    pub pages: SourcedResult<SerpResultSet>,
    /// The metrics the score was computed against.
    pub scored_metrics: KeywordMetrics,
    pub breakdown: ScoreBreakdown,
    pub score: OpportunityScore,
}

impl OpportunityEvaluation {
    pub fn new(
        keyword: String,
        location: String,
        metrics: SourcedResult<Vec<KeywordMetrics>>,
        pages: SourcedResult<SerpResultSet>,
        scored_metrics: KeywordMetrics,
        breakdown: ScoreBreakdown,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            keyword,
            location,
            evaluated_at: Utc::now(),
            metrics,
            pages,
            scored_metrics,
            score: breakdown.total(),
            breakdown,
        }
    }
}

/// SERP fetch scored against baseline market metrics.
#[derive(Debug, Clone, Serialize)]
pub struct SerpAnalysis {
    pub keyword: String,
    pub results: SourcedResult<SerpResultSet>,
    pub kill_score: OpportunityScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrationSource {
    Model,
    Unavailable,
    Error,
}

/// Prose analysis of an evaluation from the text-generation collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Narration {
    pub analysis: String,
    pub source: NarrationSource,
}
