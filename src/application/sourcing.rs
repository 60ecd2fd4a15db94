//! Data sourcing with total fallback to synthetic data.
//!
//! Every fetch walks the same states:
//!
//! ```text
//! NoCredentials ──────────────────────────────────────────┐
//! Attempting ── transport error / timeout ───────────────┤
//! Validating ── non-success status ──────────────────────┼─▶ Synthesize (SYNTHETIC)
//! Parsing ───── malformed payload ───────────────────────┘
//!    └────────▶ Delivered (LIVE)
//! ```
//!
//! Attempting, Validating and Parsing happen inside the provider adapter and
//! surface here as a [`ProviderError`]. The public methods return
//! [`SourcedResult`] with no error arm, so a caller cannot observe a failed
//! fetch, only its origin.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::application::synthetic::keywords::generate_keywords;
use crate::application::synthetic::serp::generate_serp;
use crate::application::synthetic::RandomSource;
use crate::domain::entities::keyword_metrics::KeywordMetrics;
use crate::domain::entities::ranking_page::SerpResultSet;
use crate::domain::error::ProviderError;
use crate::domain::ports::keyword_provider::KeywordMetricsProvider;
use crate::domain::ports::serp_provider::SerpProvider;
use crate::domain::values::market_params::{KeywordQuery, SerpQuery};
use crate::domain::values::origin::{Origin, SourcedResult};
use crate::domain::values::replaceability::ReplaceabilityRule;

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(60);

/// Terminal state of a single fetch.
#[derive(Debug)]
pub enum FetchResolution<T> {
    Delivered(T),
    Synthesize(ProviderError),
}

impl<T> From<Result<T, ProviderError>> for FetchResolution<T> {
    fn from(r: Result<T, ProviderError>) -> Self {
        match r {
            Ok(payload) => FetchResolution::Delivered(payload),
            Err(reason) => FetchResolution::Synthesize(reason),
        }
    }
}

/// Run a provider call under the orchestrator's rules: skip it when
/// unconfigured, bound it by `timeout`, and fold every failure into
/// [`FetchResolution::Synthesize`].
pub async fn resolve<T, F>(configured: bool, timeout: Duration, call: F) -> FetchResolution<T>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    if !configured {
        return FetchResolution::Synthesize(ProviderError::ConfigurationAbsent);
    }
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result.into(),
        Err(_) => FetchResolution::Synthesize(ProviderError::Transport(format!(
            "timed out after {}s",
            timeout.as_secs_f64()
        ))),
    }
}

pub struct DataSourceOrchestrator {
    keyword_provider: Arc<dyn KeywordMetricsProvider>,
    serp_provider: Arc<dyn SerpProvider>,
    random: RandomSource,
    timeout: Duration,
    rule: ReplaceabilityRule,
}

impl DataSourceOrchestrator {
    pub fn new(
        keyword_provider: Arc<dyn KeywordMetricsProvider>,
        serp_provider: Arc<dyn SerpProvider>,
        random: RandomSource,
        timeout: Duration,
    ) -> Self {
        Self {
            keyword_provider,
            serp_provider,
            random,
            timeout,
            rule: ReplaceabilityRule::default(),
        }
    }

    pub async fn fetch_keywords(&self, query: &KeywordQuery) -> SourcedResult<Vec<KeywordMetrics>> {
        let provider = &self.keyword_provider;
        let resolution = resolve(
            provider.is_configured(),
            self.timeout,
            provider.keywords(query),
        )
        .await;

        match resolution {
            FetchResolution::Delivered(keywords) => {
                tracing::info!(
                    provider = provider.name(),
                    seed = %query.seed,
                    count = keywords.len(),
                    "live keyword metrics delivered"
                );
                SourcedResult::live(keywords)
            }
            FetchResolution::Synthesize(reason) => {
                log_fallback(provider.name(), &query.seed, &reason);
                let mut rng = self.random.rng();
                SourcedResult::synthetic(generate_keywords(&query.seed, &query.params, &mut rng))
            }
        }
    }

    pub async fn fetch_serp(&self, query: &SerpQuery) -> SourcedResult<SerpResultSet> {
        let provider = &self.serp_provider;
        let resolution = resolve(
            provider.is_configured(),
            self.timeout,
            provider.organic_results(query),
        )
        .await;

        let (candidates, origin) = match resolution {
            FetchResolution::Delivered(candidates) => {
                tracing::info!(
                    provider = provider.name(),
                    keyword = %query.keyword,
                    count = candidates.len(),
                    "live SERP delivered"
                );
                (candidates, Origin::Live)
            }
            FetchResolution::Synthesize(reason) => {
                log_fallback(provider.name(), &query.keyword, &reason);
                let mut rng = self.random.rng();
                (generate_serp(&query.keyword, &mut rng), Origin::Synthetic)
            }
        };

        SourcedResult {
            payload: SerpResultSet::assemble(candidates, &query.keyword, self.rule),
            origin,
        }
    }
}

fn log_fallback(provider: &str, subject: &str, reason: &ProviderError) {
    match reason {
        ProviderError::ConfigurationAbsent => tracing::info!(
            provider,
            subject,
            "provider not configured, using synthetic data"
        ),
        _ => tracing::warn!(
            provider,
            subject,
            error = %reason,
            "provider call failed, using synthetic data"
        ),
    }
}
