use super::DataForSeoClient;
use crate::domain::entities::keyword_metrics::KeywordMetrics;
use crate::domain::error::ProviderError;
use crate::domain::ports::keyword_provider::KeywordMetricsProvider;
use crate::domain::values::market_params::{KeywordQuery, MarketParams};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const KEYWORDS_FOR_SITE_PATH: &str = "/v3/keywords_data/google_ads/keywords_for_site/live";

#[derive(Debug, Serialize)]
struct KeywordsTask<'a> {
    target: &'a str,
    location_name: &'a str,
    language_name: &'a str,
    search_partners: bool,
    sort_by: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KeywordItem {
    #[serde(default)]
    keyword: Option<String>,
    #[serde(default)]
    search_volume: Option<u64>,
    #[serde(default)]
    cpc: Option<f64>,
    /// Numeric on some endpoints, a LOW/MEDIUM/HIGH label on others.
    #[serde(default)]
    competition: Option<serde_json::Value>,
    #[serde(default)]
    competition_index: Option<f64>,
}

impl KeywordItem {
    /// Canonical metrics for this item, `None` when it carries no keyword.
    fn into_metrics(self) -> Result<Option<KeywordMetrics>, ProviderError> {
        let keyword = match self.keyword {
            Some(k) if !k.trim().is_empty() => k,
            _ => return Ok(None),
        };
        let index = self.competition_index.map(|i| (i / 100.0).clamp(0.0, 1.0));
        let competition = self
            .competition
            .as_ref()
            .and_then(|c| c.as_f64())
            .map(|c| c.clamp(0.0, 1.0))
            .or(index)
            .unwrap_or(0.0);

        KeywordMetrics::new(
            keyword,
            self.search_volume.unwrap_or(0),
            self.cpc.unwrap_or(0.0),
            competition,
            index,
        )
        .map(Some)
        .map_err(|e| ProviderError::MalformedPayload(e.to_string()))
    }
}

/// Map provider items to metrics, keep those inside the market window and
/// cap at `params.limit`. A malformed item fails the whole batch.
pub(crate) fn map_keywords(
    items: Vec<KeywordItem>,
    params: &MarketParams,
) -> Result<Vec<KeywordMetrics>, ProviderError> {
    let mut keywords = Vec::new();
    for item in items {
        if let Some(m) = item.into_metrics()? {
            if params.admits(&m) {
                keywords.push(m);
            }
        }
    }
    keywords.truncate(params.limit);
    Ok(keywords)
}

#[async_trait]
impl KeywordMetricsProvider for DataForSeoClient {
    fn name(&self) -> &str {
        "dataforseo_keywords"
    }

    fn is_configured(&self) -> bool {
        DataForSeoClient::is_configured(self)
    }

    async fn keywords(&self, query: &KeywordQuery) -> Result<Vec<KeywordMetrics>, ProviderError> {
        let task = KeywordsTask {
            target: &query.seed,
            location_name: &query.params.location_name,
            language_name: &query.params.language_name,
            search_partners: false,
            sort_by: "search_volume",
        };
        let items: Vec<KeywordItem> = self.post_task(KEYWORDS_FOR_SITE_PATH, &task).await?;
        map_keywords(items, &query.params)
    }
}
