use crate::domain::entities::keyword_metrics::KeywordMetrics;
use crate::domain::error::ProviderError;
use crate::domain::values::market_params::KeywordQuery;
use async_trait::async_trait;

/// A live source of keyword market metrics.
#[async_trait]
pub trait KeywordMetricsProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Whether credentials are present. When false the provider is never called.
    fn is_configured(&self) -> bool;

    /// Fetch keywords related to `query.seed`, already filtered to the
    /// query's market window and truncated to its limit.
    async fn keywords(&self, query: &KeywordQuery) -> Result<Vec<KeywordMetrics>, ProviderError>;
}
