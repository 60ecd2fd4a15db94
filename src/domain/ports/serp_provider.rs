use crate::domain::entities::ranking_page::PageCandidate;
use crate::domain::error::ProviderError;
use crate::domain::values::market_params::SerpQuery;
use async_trait::async_trait;

/// A live source of organic search results.
#[async_trait]
pub trait SerpProvider: Send + Sync {
    fn name(&self) -> &str;

    fn is_configured(&self) -> bool;

    /// Organic results for `query.keyword`, in the order reported.
    async fn organic_results(&self, query: &SerpQuery) -> Result<Vec<PageCandidate>, ProviderError>;
}
