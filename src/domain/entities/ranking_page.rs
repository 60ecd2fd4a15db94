use crate::domain::values::directory::{classify, DomainClass};
use crate::domain::values::replaceability::{self, ReplaceabilityRule};
use serde::{Deserialize, Serialize};

/// Results past this position never influence scoring.
pub const FIRST_PAGE_SIZE: usize = 10;

/// A ranking page as reported by a provider, before classification.
///
/// Unknown keys are ignored on deserialization, so stored pages that carry
/// `is_directory`/`is_replaceable` load fine and get re-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageCandidate {
    pub rank: u32,
    pub domain: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub domain_rank: Option<u32>,
    #[serde(default)]
    pub backlinks: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingPage {
    pub rank: u32,
    pub domain: String,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub domain_rank: Option<u32>,
    pub backlinks: Option<u64>,
    pub is_directory: bool,
    pub is_replaceable: bool,
}

impl RankingPage {
    fn derive(candidate: PageCandidate, keyword: &str, rule: ReplaceabilityRule) -> Self {
        let is_directory = classify(&candidate.domain) == DomainClass::Directory;
        let is_replaceable = replaceability::estimate(&candidate, keyword, rule);
        Self {
            rank: candidate.rank,
            domain: candidate.domain,
            url: candidate.url,
            title: candidate.title,
            description: candidate.description,
            domain_rank: candidate.domain_rank,
            backlinks: candidate.backlinks,
            is_directory,
            is_replaceable,
        }
    }
}

/// First-page search results, ordered by rank, at most [`FIRST_PAGE_SIZE`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SerpResultSet {
    pages: Vec<RankingPage>,
}

impl SerpResultSet {
    /// Order, de-duplicate and truncate candidates, then derive the
    /// directory and replaceability flags against `keyword`.
    ///
    /// Rank 0 is not a position and is dropped. When two candidates share a
    /// rank the first one reported wins.
    pub fn assemble(
        mut candidates: Vec<PageCandidate>,
        keyword: &str,
        rule: ReplaceabilityRule,
    ) -> Self {
        candidates.retain(|c| c.rank > 0);
        candidates.sort_by_key(|c| c.rank);
        candidates.dedup_by_key(|c| c.rank);
        candidates.truncate(FIRST_PAGE_SIZE);

        let pages = candidates
            .into_iter()
            .map(|c| RankingPage::derive(c, keyword, rule))
            .collect();
        Self { pages }
    }

    pub fn pages(&self) -> &[RankingPage] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn directory_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_directory).count()
    }

    pub fn replaceable_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_replaceable).count()
    }
}

/// Bare hostname for a result URL: lower-cased, leading `www.` removed.
/// Falls back to the raw string when the URL does not parse.
pub fn host_from_url(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => {
                let host = host.to_lowercase();
                host.strip_prefix("www.").unwrap_or(&host).to_string()
            }
            None => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}
