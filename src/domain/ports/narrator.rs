//! Text-generation port for narrating a scored opportunity.
//!
//! Narration sits downstream of scoring; nothing here feeds back into the
//! Kill Score.

use crate::domain::entities::evaluation::OpportunityEvaluation;
use crate::domain::entities::ranking_page::{RankingPage, FIRST_PAGE_SIZE};
use crate::domain::error::ProviderError;
use async_trait::async_trait;
use serde::Serialize;

pub const SYSTEM_PROMPT: &str = "You are an expert SEO analyst specializing in EMD (Exact Match Domain) opportunities. \
Analyze the provided SERP data and keyword metrics to identify if this is a viable EMD opportunity. \
Focus on:\n\
1. Weakness of current rankings (directory sites, low authority competitors)\n\
2. Commercial intent (CPC, advertiser competition)\n\
3. Market opportunity (search volume vs competition)\n\
4. Recommended approach if this is a good opportunity\n\
Be concise but thorough. Format your response in clear sections.";

/// Structured payload handed to the narrator.
#[derive(Debug, Clone, Serialize)]
pub struct OpportunityBrief {
    pub keyword: String,
    pub search_volume: u64,
    pub cpc: f64,
    pub competition: f64,
    pub kill_score: u8,
    pub pages: Vec<RankingPage>,
}

impl From<&OpportunityEvaluation> for OpportunityBrief {
    fn from(e: &OpportunityEvaluation) -> Self {
        Self {
            keyword: e.keyword.clone(),
            search_volume: e.scored_metrics.search_volume,
            cpc: e.scored_metrics.cpc,
            competition: e.scored_metrics.competition,
            kill_score: e.score.value(),
            pages: e.pages.payload.pages().to_vec(),
        }
    }
}

impl OpportunityBrief {
    /// User prompt: keyword metrics followed by one block per first-page result.
    pub fn prompt(&self) -> String {
        let mut out = format!(
            "Analyze this EMD opportunity:\n\n\
             Keyword: {}\n\
             Search Volume: {}\n\
             CPC: ${:.2}\n\
             Competition: {:.2}\n\
             Kill Score: {}/100\n\n\
             Top {} SERP Results:\n",
            self.keyword,
            self.search_volume,
            self.cpc,
            self.competition,
            self.kill_score,
            FIRST_PAGE_SIZE
        );

        for (i, page) in self.pages.iter().take(FIRST_PAGE_SIZE).enumerate() {
            let domain_rank = page
                .domain_rank
                .map(|r| r.to_string())
                .unwrap_or_else(|| "N/A".into());
            let backlinks = page
                .backlinks
                .map(|b| b.to_string())
                .unwrap_or_else(|| "N/A".into());
            let title = if page.title.is_empty() { "N/A" } else { &page.title };
            let domain = if page.domain.is_empty() { "Unknown" } else { &page.domain };
            out.push_str(&format!(
                "\n{}. {}\n   - Title: {}\n   - Domain Rank: {}\n   - Backlinks: {}\n   - Directory Site: {}\n",
                i + 1,
                domain,
                title,
                domain_rank,
                backlinks,
                if page.is_directory { "Yes" } else { "No" }
            ));
        }

        out.push_str("\nProvide your analysis of this EMD opportunity.");
        out
    }
}

#[async_trait]
pub trait Narrator: Send + Sync {
    fn name(&self) -> &str;

    async fn narrate(&self, brief: &OpportunityBrief) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(pages: Vec<RankingPage>) -> OpportunityBrief {
        OpportunityBrief {
            keyword: "tree service atlanta".into(),
            search_volume: 720,
            cpc: 18.5,
            competition: 0.41,
            kill_score: 63,
            pages,
        }
    }

    #[test]
    fn test_prompt_lists_pages_with_na_defaults() {
        let page = RankingPage {
            rank: 1,
            domain: "yelp.com".into(),
            url: "https://www.yelp.com/search".into(),
            title: "Yelp - Find Tree Service Atlanta Near You".into(),
            description: None,
            domain_rank: None,
            backlinks: Some(120_000),
            is_directory: true,
            is_replaceable: true,
        };
        let prompt = brief(vec![page]).prompt();
        assert!(prompt.contains("Keyword: tree service atlanta"));
        assert!(prompt.contains("CPC: $18.50"));
        assert!(prompt.contains("1. yelp.com"));
        assert!(prompt.contains("Domain Rank: N/A"));
        assert!(prompt.contains("Backlinks: 120000"));
        assert!(prompt.contains("Directory Site: Yes"));
        assert!(prompt.ends_with("Provide your analysis of this EMD opportunity."));
    }

    #[test]
    fn test_prompt_without_pages() {
        let prompt = brief(vec![]).prompt();
        assert!(prompt.contains("Kill Score: 63/100"));
        assert!(!prompt.contains("1. "));
    }
}
