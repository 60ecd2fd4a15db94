pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::evaluate::{self, EvaluateUseCase};
use crate::application::narrate::NarrateUseCase;
use crate::application::sourcing::DataSourceOrchestrator;
use crate::application::synthetic::RandomSource;
use crate::config::HunterConfig;
use crate::domain::entities::evaluation::{Narration, OpportunityEvaluation, SerpAnalysis};
use crate::domain::entities::keyword_metrics::KeywordMetrics;
use crate::domain::entities::ranking_page::PageCandidate;
use crate::domain::error::DomainError;
use crate::domain::ports::keyword_provider::KeywordMetricsProvider;
use crate::domain::ports::narrator::Narrator;
use crate::domain::ports::serp_provider::SerpProvider;
use crate::domain::values::kill_score::OpportunityScore;
use crate::domain::values::market_params::{MarketParams, SerpLocale};
use crate::domain::values::origin::SourcedResult;
use crate::infrastructure::dataforseo::DataForSeoClient;
use crate::infrastructure::narrators::anthropic::AnthropicNarrator;
use crate::infrastructure::narrators::unavailable::UnavailableNarrator;
use std::sync::Arc;
use std::time::Duration;

pub struct EmdHunter {
    evaluate_uc: EvaluateUseCase,
    narrate_uc: NarrateUseCase,
}

impl EmdHunter {
    pub fn new() -> Result<Self, DomainError> {
        Ok(Self::from_config(&HunterConfig::from_env()?))
    }

    pub fn from_config(config: &HunterConfig) -> Self {
        let dataforseo = Arc::new(DataForSeoClient::new(
            config.dataforseo.clone(),
            config.dataforseo_base_url.clone(),
            config.timeout(),
        ));
        if !dataforseo.is_configured() {
            tracing::info!("DATAFORSEO_LOGIN/DATAFORSEO_PASSWORD not set, all data will be synthetic");
        }

        let narrator: Arc<dyn Narrator> = match &config.llm_api_key {
            Some(key) => Arc::new(AnthropicNarrator::new(
                key.clone(),
                config.llm_model.clone(),
                config.llm_base_url.clone(),
                config.timeout(),
            )),
            None => Arc::new(UnavailableNarrator),
        };

        Self::with_providers(
            dataforseo.clone(),
            dataforseo,
            narrator,
            config.random_source(),
            config.timeout(),
        )
    }

    pub fn with_providers(
        keyword_provider: Arc<dyn KeywordMetricsProvider>,
        serp_provider: Arc<dyn SerpProvider>,
        narrator: Arc<dyn Narrator>,
        random: RandomSource,
        timeout: Duration,
    ) -> Self {
        let sourcing = Arc::new(DataSourceOrchestrator::new(
            keyword_provider,
            serp_provider,
            random,
            timeout,
        ));
        Self {
            evaluate_uc: EvaluateUseCase::new(sourcing),
            narrate_uc: NarrateUseCase::new(narrator),
        }
    }

    // Delegating methods
    pub async fn evaluate_opportunity(
        &self,
        keyword: &str,
        params: &MarketParams,
    ) -> Result<OpportunityEvaluation, DomainError> {
        self.evaluate_uc.evaluate(keyword, params).await
    }

    pub fn score_only(
        &self,
        pages: Vec<PageCandidate>,
        metrics: &KeywordMetrics,
    ) -> Result<OpportunityScore, DomainError> {
        evaluate::score_only(pages, metrics)
    }

    pub async fn search_keywords(
        &self,
        seed: &str,
        params: &MarketParams,
    ) -> Result<SourcedResult<Vec<KeywordMetrics>>, DomainError> {
        self.evaluate_uc.search_keywords(seed, params).await
    }

    pub async fn analyze_serp(
        &self,
        keyword: &str,
        locale: &SerpLocale,
    ) -> Result<SerpAnalysis, DomainError> {
        self.evaluate_uc.analyze_serp(keyword, locale).await
    }

    pub async fn narrate(&self, evaluation: &OpportunityEvaluation) -> Narration {
        self.narrate_uc.execute(evaluation).await
    }
}
