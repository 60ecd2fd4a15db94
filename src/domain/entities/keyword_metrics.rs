use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

/// Market metrics for one keyword. Immutable once produced.
///
/// Fields are public for reading. Build values through [`KeywordMetrics::new`]
/// or deserialization, both of which validate. The live mapping and the
/// synthetic generator go through `new`; the baseline is a fixed valid value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KeywordMetricsRecord")]
pub struct KeywordMetrics {
    pub keyword: String,
    pub search_volume: u64,
    pub cpc: f64,
    pub competition: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertiser_competition: Option<f64>,
}

/// Unvalidated wire shape. Signed volume so negative input is rejected with a
/// message instead of a bare deserialization failure.
#[derive(Debug, Deserialize)]
struct KeywordMetricsRecord {
    keyword: String,
    search_volume: i64,
    cpc: f64,
    #[serde(default)]
    competition: f64,
    #[serde(default)]
    advertiser_competition: Option<f64>,
}

impl TryFrom<KeywordMetricsRecord> for KeywordMetrics {
    type Error = DomainError;

    fn try_from(r: KeywordMetricsRecord) -> Result<Self, Self::Error> {
        if r.search_volume < 0 {
            return Err(DomainError::InvalidInput(format!(
                "search_volume must be non-negative, got {}",
                r.search_volume
            )));
        }
        KeywordMetrics::new(
            r.keyword,
            r.search_volume as u64,
            r.cpc,
            r.competition,
            r.advertiser_competition,
        )
    }
}

impl KeywordMetrics {
    pub fn new(
        keyword: String,
        search_volume: u64,
        cpc: f64,
        competition: f64,
        advertiser_competition: Option<f64>,
    ) -> Result<Self, DomainError> {
        if !cpc.is_finite() || cpc < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "cpc must be a non-negative number, got {cpc}"
            )));
        }
        if !(0.0..=1.0).contains(&competition) {
            return Err(DomainError::InvalidInput(format!(
                "competition must be between 0.0 and 1.0, got {competition}"
            )));
        }
        if let Some(ac) = advertiser_competition {
            if !ac.is_finite() {
                return Err(DomainError::InvalidInput(format!(
                    "advertiser_competition must be finite, got {ac}"
                )));
            }
        }
        Ok(Self {
            keyword,
            search_volume,
            cpc,
            competition,
            advertiser_competition,
        })
    }

    /// Neutral market assumption used when no metrics record matches the
    /// keyword being scored.
    pub fn baseline(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            search_volume: 500,
            cpc: 25.0,
            competition: 0.5,
            advertiser_competition: None,
        }
    }

    /// Whether this record describes `keyword` (trimmed, case-insensitive).
    pub fn is_for(&self, keyword: &str) -> bool {
        self.keyword.trim().eq_ignore_ascii_case(keyword.trim())
    }
}
