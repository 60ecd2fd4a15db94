use super::DataForSeoClient;
use crate::domain::entities::ranking_page::{host_from_url, PageCandidate};
use crate::domain::error::ProviderError;
use crate::domain::ports::serp_provider::SerpProvider;
use crate::domain::values::market_params::SerpQuery;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const ORGANIC_LIVE_PATH: &str = "/v3/serp/google/organic/live/advanced";

#[derive(Debug, Serialize)]
struct SerpTask<'a> {
    keyword: &'a str,
    location_name: &'a str,
    language_name: &'a str,
    device: &'a str,
    os: &'a str,
}

/// One task result. Items are kept untyped because the SERP mixes many
/// feature types (ads, maps, snippets) with different shapes.
#[derive(Debug, Deserialize)]
pub(crate) struct SerpResultItem {
    #[serde(default)]
    items: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct OrganicItem {
    #[serde(default)]
    rank_absolute: Option<u32>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    rank_info: Option<RankInfo>,
    #[serde(default)]
    backlinks_info: Option<BacklinksInfo>,
}

#[derive(Debug, Deserialize)]
struct RankInfo {
    #[serde(default)]
    main_domain_rank: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct BacklinksInfo {
    #[serde(default)]
    backlinks: Option<u64>,
}

/// Organic items as page candidates, in reported order.
pub(crate) fn map_organic(results: Vec<SerpResultItem>) -> Result<Vec<PageCandidate>, ProviderError> {
    let organic = results
        .into_iter()
        .flat_map(|r| r.items.unwrap_or_default())
        .filter(|item| item.get("type").and_then(|t| t.as_str()) == Some("organic"));

    let mut candidates = Vec::new();
    for (position, value) in organic.enumerate() {
        let item: OrganicItem = serde_json::from_value(value)
            .map_err(|e| ProviderError::MalformedPayload(format!("organic item: {e}")))?;
        let url = item.url.unwrap_or_default();
        candidates.push(PageCandidate {
            rank: item.rank_absolute.unwrap_or(position as u32 + 1),
            domain: host_from_url(&url),
            url,
            title: item.title.unwrap_or_default(),
            description: item.description,
            domain_rank: item.rank_info.and_then(|r| r.main_domain_rank),
            backlinks: item.backlinks_info.and_then(|b| b.backlinks),
        });
    }
    Ok(candidates)
}

#[async_trait]
impl SerpProvider for DataForSeoClient {
    fn name(&self) -> &str {
        "dataforseo_serp"
    }

    fn is_configured(&self) -> bool {
        DataForSeoClient::is_configured(self)
    }

    async fn organic_results(&self, query: &SerpQuery) -> Result<Vec<PageCandidate>, ProviderError> {
        let task = SerpTask {
            keyword: &query.keyword,
            location_name: &query.locale.location_name,
            language_name: &query.locale.language_name,
            device: &query.locale.device,
            os: &query.locale.os,
        };
        let results: Vec<SerpResultItem> = self.post_task(ORGANIC_LIVE_PATH, &task).await?;
        map_organic(results)
    }
}
