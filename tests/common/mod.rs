//! Shared test helpers: scripted providers and page builders.
#![allow(dead_code)]

use async_trait::async_trait;
use emd_hunter::application::synthetic::RandomSource;
use emd_hunter::domain::entities::keyword_metrics::KeywordMetrics;
use emd_hunter::domain::entities::ranking_page::PageCandidate;
use emd_hunter::domain::error::ProviderError;
use emd_hunter::domain::ports::keyword_provider::KeywordMetricsProvider;
use emd_hunter::domain::ports::narrator::{Narrator, OpportunityBrief};
use emd_hunter::domain::ports::serp_provider::SerpProvider;
use emd_hunter::domain::values::market_params::{KeywordQuery, SerpQuery};
use emd_hunter::EmdHunter;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const SEED: u64 = 42;

/// What a scripted provider does when called.
#[derive(Clone)]
pub enum Script<T> {
    Deliver(T),
    Fail(ProviderError),
    Stall,
}

/// Provider double that counts calls and follows a [`Script`].
pub struct FakeProvider {
    configured: bool,
    keywords: Script<Vec<KeywordMetrics>>,
    serp: Script<Vec<PageCandidate>>,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            keywords: Script::Deliver(Vec::new()),
            serp: Script::Deliver(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn delivering(keywords: Vec<KeywordMetrics>, pages: Vec<PageCandidate>) -> Self {
        Self {
            configured: true,
            keywords: Script::Deliver(keywords),
            serp: Script::Deliver(pages),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: ProviderError) -> Self {
        Self {
            configured: true,
            keywords: Script::Fail(err.clone()),
            serp: Script::Fail(err),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn stalling() -> Self {
        Self {
            configured: true,
            keywords: Script::Stall,
            serp: Script::Stall,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

async fn play<T: Clone>(script: &Script<T>) -> Result<T, ProviderError> {
    match script {
        Script::Deliver(v) => Ok(v.clone()),
        Script::Fail(e) => Err(e.clone()),
        Script::Stall => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Err(ProviderError::Transport("stalled".into()))
        }
    }
}

#[async_trait]
impl KeywordMetricsProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake_keywords"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn keywords(&self, _query: &KeywordQuery) -> Result<Vec<KeywordMetrics>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        play(&self.keywords).await
    }
}

#[async_trait]
impl SerpProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake_serp"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn organic_results(&self, _query: &SerpQuery) -> Result<Vec<PageCandidate>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        play(&self.serp).await
    }
}

/// Narrator double returning a fixed outcome.
pub struct FakeNarrator(pub Result<String, ProviderError>);

#[async_trait]
impl Narrator for FakeNarrator {
    fn name(&self) -> &str {
        "fake_narrator"
    }

    async fn narrate(&self, brief: &OpportunityBrief) -> Result<String, ProviderError> {
        self.0.clone().map(|text| format!("{text} ({})", brief.keyword))
    }
}

pub fn setup_with(provider: Arc<FakeProvider>, narrator: FakeNarrator) -> EmdHunter {
    EmdHunter::with_providers(
        provider.clone(),
        provider,
        Arc::new(narrator),
        RandomSource::Seeded(SEED),
        Duration::from_millis(200),
    )
}

pub fn setup(provider: Arc<FakeProvider>) -> EmdHunter {
    setup_with(
        provider,
        FakeNarrator(Err(ProviderError::ConfigurationAbsent)),
    )
}

pub fn page(rank: u32, domain: &str, title: &str, domain_rank: Option<u32>, backlinks: Option<u64>) -> PageCandidate {
    PageCandidate {
        rank,
        domain: domain.to_string(),
        url: format!("https://{domain}/"),
        title: title.to_string(),
        description: None,
        domain_rank,
        backlinks,
    }
}

pub fn directory_page(rank: u32) -> PageCandidate {
    page(rank, "yelp.com", "Yelp - Find Plumbers Near You", Some(93), Some(250_000))
}

pub fn metrics(keyword: &str, volume: u64, cpc: f64) -> KeywordMetrics {
    KeywordMetrics::new(keyword.to_string(), volume, cpc, 0.5, None).unwrap()
}
