//! Opportunity evaluation use case: source keyword metrics and the first
//! SERP page, then score them.

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::sourcing::DataSourceOrchestrator;
use crate::domain::entities::evaluation::{OpportunityEvaluation, SerpAnalysis};
use crate::domain::entities::keyword_metrics::KeywordMetrics;
use crate::domain::entities::ranking_page::{PageCandidate, SerpResultSet};
use crate::domain::error::DomainError;
use crate::domain::values::kill_score::{breakdown, kill_score, OpportunityScore};
use crate::domain::values::market_params::{
    require_keyword, KeywordQuery, MarketParams, SerpLocale, SerpQuery,
};
use crate::domain::values::origin::SourcedResult;
use crate::domain::values::replaceability::ReplaceabilityRule;

pub struct EvaluateUseCase {
    sourcing: Arc<DataSourceOrchestrator>,
}

impl EvaluateUseCase {
    pub fn new(sourcing: Arc<DataSourceOrchestrator>) -> Self {
        Self { sourcing }
    }

    /// Fetch metrics and SERP concurrently and score the pair.
    ///
    /// Only invalid input fails; provider trouble degrades to synthetic data.
    pub async fn evaluate(
        &self,
        keyword: &str,
        params: &MarketParams,
    ) -> Result<OpportunityEvaluation, DomainError> {
        let keyword = require_keyword(keyword)?;
        params.validate()?;

        let keyword_query = KeywordQuery {
            seed: keyword.to_string(),
            params: params.clone(),
        };
        let serp_query = SerpQuery {
            keyword: keyword.to_string(),
            locale: params.locale(),
        };

        let (metrics, pages) = tokio::join!(
            self.sourcing.fetch_keywords(&keyword_query),
            self.sourcing.fetch_serp(&serp_query)
        );

        let scored_metrics = metrics
            .payload
            .iter()
            .find(|m| m.is_for(keyword))
            .cloned()
            .unwrap_or_else(|| KeywordMetrics::baseline(keyword));
        let parts = breakdown(pages.payload.pages(), &scored_metrics);

        let evaluation = OpportunityEvaluation::new(
            keyword.to_string(),
            params.location_name.clone(),
            metrics,
            pages,
            scored_metrics,
            parts,
        );
        tracing::info!(
            keyword = %evaluation.keyword,
            score = evaluation.score.value(),
            metrics_origin = %evaluation.metrics.origin,
            serp_origin = %evaluation.pages.origin,
            "opportunity evaluated"
        );
        Ok(evaluation)
    }

    pub async fn search_keywords(
        &self,
        seed: &str,
        params: &MarketParams,
    ) -> Result<SourcedResult<Vec<KeywordMetrics>>, DomainError> {
        let seed = require_keyword(seed)?;
        params.validate()?;
        let query = KeywordQuery {
            seed: seed.to_string(),
            params: params.clone(),
        };
        Ok(self.sourcing.fetch_keywords(&query).await)
    }

    /// SERP fetch scored against baseline market metrics for the keyword.
    pub async fn analyze_serp(
        &self,
        keyword: &str,
        locale: &SerpLocale,
    ) -> Result<SerpAnalysis, DomainError> {
        let keyword = require_keyword(keyword)?;
        let query = SerpQuery {
            keyword: keyword.to_string(),
            locale: locale.clone(),
        };
        let results = self.sourcing.fetch_serp(&query).await;
        let kill_score = kill_score(results.payload.pages(), &KeywordMetrics::baseline(keyword));
        Ok(SerpAnalysis {
            keyword: keyword.to_string(),
            results,
            kill_score,
        })
    }
}

/// Re-score previously stored pages without fetching anything.
///
/// Stored derived flags are ignored; pages are re-assembled against the
/// metrics' keyword. Pages with rank 0 or a repeated rank are rejected rather
/// than silently dropped.
pub fn score_only(
    pages: Vec<PageCandidate>,
    metrics: &KeywordMetrics,
) -> Result<OpportunityScore, DomainError> {
    check_stored_ranks(&pages)?;
    let set = SerpResultSet::assemble(pages, &metrics.keyword, ReplaceabilityRule::default());
    Ok(kill_score(set.pages(), metrics))
}

fn check_stored_ranks(pages: &[PageCandidate]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for page in pages {
        if page.rank == 0 {
            return Err(DomainError::InvalidInput(format!(
                "page {} has rank 0; ranks start at 1",
                page.url
            )));
        }
        if !seen.insert(page.rank) {
            return Err(DomainError::InvalidInput(format!(
                "rank {} appears more than once",
                page.rank
            )));
        }
    }
    Ok(())
}
