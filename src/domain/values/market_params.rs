use crate::domain::entities::keyword_metrics::KeywordMetrics;
use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

/// Market window for a keyword search: where, in what language, and which
/// volume/CPC band counts as interesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketParams {
    pub location_name: String,
    pub language_name: String,
    pub min_volume: u64,
    pub max_volume: u64,
    pub min_cpc: f64,
    pub max_cpc: Option<f64>,
    pub limit: usize,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            location_name: "United States".into(),
            language_name: "English".into(),
            min_volume: 200,
            max_volume: 1200,
            min_cpc: 10.0,
            max_cpc: None,
            limit: 50,
        }
    }
}

impl MarketParams {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.min_volume > self.max_volume {
            return Err(DomainError::InvalidInput(format!(
                "min_volume ({}) exceeds max_volume ({})",
                self.min_volume, self.max_volume
            )));
        }
        if !self.min_cpc.is_finite() || self.min_cpc < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "min_cpc must be a non-negative number, got {}",
                self.min_cpc
            )));
        }
        if !(self.min_cpc * 5.0).is_finite() {
            return Err(DomainError::InvalidInput(format!(
                "min_cpc is too large, got {}",
                self.min_cpc
            )));
        }
        if let Some(max) = self.max_cpc {
            if !max.is_finite() || max < self.min_cpc {
                return Err(DomainError::InvalidInput(format!(
                    "max_cpc ({max}) must be a number no lower than min_cpc ({})",
                    self.min_cpc
                )));
            }
        }
        if self.limit == 0 {
            return Err("limit must be at least 1".into());
        }
        Ok(())
    }

    /// Whether a keyword falls inside the requested volume and CPC window.
    pub fn admits(&self, m: &KeywordMetrics) -> bool {
        if m.search_volume < self.min_volume || m.search_volume > self.max_volume {
            return false;
        }
        if m.cpc < self.min_cpc {
            return false;
        }
        !matches!(self.max_cpc, Some(max) if m.cpc > max)
    }

    pub fn locale(&self) -> SerpLocale {
        SerpLocale {
            location_name: self.location_name.clone(),
            language_name: self.language_name.clone(),
            ..SerpLocale::default()
        }
    }
}

/// Where and how a SERP is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerpLocale {
    pub location_name: String,
    pub language_name: String,
    pub device: String,
    pub os: String,
}

impl Default for SerpLocale {
    fn default() -> Self {
        Self {
            location_name: "United States".into(),
            language_name: "English".into(),
            device: "desktop".into(),
            os: "windows".into(),
        }
    }
}

/// A keyword-metrics query: seed term plus market window.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordQuery {
    pub seed: String,
    pub params: MarketParams,
}

/// A SERP query for one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerpQuery {
    pub keyword: String,
    pub locale: SerpLocale,
}

/// Reject blank keywords at the boundary; returns the trimmed text.
pub fn require_keyword(keyword: &str) -> Result<&str, DomainError> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        return Err("keyword must not be empty".into());
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(volume: u64, cpc: f64) -> KeywordMetrics {
        KeywordMetrics::new("hvac denver".into(), volume, cpc, 0.3, None).unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(MarketParams::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_windows() {
        let p = MarketParams {
            min_volume: 2000,
            max_volume: 100,
            ..Default::default()
        };
        assert!(p.validate().is_err());

        let p = MarketParams {
            min_cpc: 20.0,
            max_cpc: Some(5.0),
            ..Default::default()
        };
        assert!(p.validate().is_err());

        let p = MarketParams {
            limit: 0,
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_admits_is_inclusive() {
        let p = MarketParams {
            max_cpc: Some(40.0),
            ..Default::default()
        };
        assert!(p.admits(&kw(200, 10.0)));
        assert!(p.admits(&kw(1200, 40.0)));
        assert!(!p.admits(&kw(199, 20.0)));
        assert!(!p.admits(&kw(1201, 20.0)));
        assert!(!p.admits(&kw(500, 9.99)));
        assert!(!p.admits(&kw(500, 40.01)));
    }

    #[test]
    fn test_no_ceiling_without_max_cpc() {
        assert!(MarketParams::default().admits(&kw(500, 999.0)));
    }

    #[test]
    fn test_require_keyword() {
        assert_eq!(require_keyword("  plumber  ").unwrap(), "plumber");
        assert!(require_keyword("   ").is_err());
    }

    #[test]
    fn test_validate_rejects_overflowing_cpc_floor() {
        let huge = MarketParams {
            min_cpc: 1e308,
            ..Default::default()
        };
        assert!(matches!(huge.validate(), Err(DomainError::InvalidInput(_))));
        let large_but_fine = MarketParams {
            min_cpc: 1e300,
            ..Default::default()
        };
        assert!(large_but_fine.validate().is_ok());
    }
}
