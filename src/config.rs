use crate::application::sourcing::DEFAULT_PROVIDER_TIMEOUT;
use crate::application::synthetic::RandomSource;
use crate::domain::error::DomainError;
use crate::infrastructure::dataforseo::Credentials;
use std::time::Duration;

/// Runtime settings, read from the environment.
#[derive(Debug, Clone, Default)]
pub struct HunterConfig {
    pub dataforseo: Credentials,
    pub dataforseo_base_url: Option<String>,
    pub provider_timeout: Option<Duration>,
    pub synthetic_seed: Option<u64>,
    pub llm_api_key: Option<String>,
    pub llm_model: Option<String>,
    pub llm_base_url: Option<String>,
}

impl HunterConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider_timeout = non_empty("EMD_HUNTER_PROVIDER_TIMEOUT_SECS")
            .map(|v| {
                v.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
                    DomainError::Config(format!(
                        "EMD_HUNTER_PROVIDER_TIMEOUT_SECS must be whole seconds, got {v}"
                    ))
                })
            })
            .transpose()?;

        let synthetic_seed = non_empty("EMD_HUNTER_SYNTHETIC_SEED")
            .map(|v| {
                v.trim().parse::<u64>().map_err(|_| {
                    DomainError::Config(format!(
                        "EMD_HUNTER_SYNTHETIC_SEED must be an unsigned integer, got {v}"
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            dataforseo: Credentials::new(
                lookup("DATAFORSEO_LOGIN").unwrap_or_default(),
                lookup("DATAFORSEO_PASSWORD").unwrap_or_default(),
            ),
            dataforseo_base_url: non_empty("DATAFORSEO_BASE_URL"),
            provider_timeout,
            synthetic_seed,
            llm_api_key: non_empty("EMD_HUNTER_LLM_API_KEY"),
            llm_model: non_empty("EMD_HUNTER_LLM_MODEL"),
            llm_base_url: non_empty("EMD_HUNTER_LLM_BASE_URL"),
        })
    }

    pub fn timeout(&self) -> Duration {
        self.provider_timeout.unwrap_or(DEFAULT_PROVIDER_TIMEOUT)
    }

    pub fn random_source(&self) -> RandomSource {
        match self.synthetic_seed {
            Some(seed) => RandomSource::Seeded(seed),
            None => RandomSource::Entropy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<HunterConfig, DomainError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HunterConfig::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn test_empty_environment_defaults() {
        let c = config(&[]).unwrap();
        assert!(!c.dataforseo.is_complete());
        assert_eq!(c.timeout(), Duration::from_secs(60));
        assert_eq!(c.random_source(), RandomSource::Entropy);
        assert!(c.llm_api_key.is_none());
    }

    #[test]
    fn test_reads_values() {
        let c = config(&[
            ("DATAFORSEO_LOGIN", "me@example.com"),
            ("DATAFORSEO_PASSWORD", "pw"),
            ("EMD_HUNTER_PROVIDER_TIMEOUT_SECS", "5"),
            ("EMD_HUNTER_SYNTHETIC_SEED", "42"),
            ("EMD_HUNTER_LLM_API_KEY", "key"),
        ])
        .unwrap();
        assert!(c.dataforseo.is_complete());
        assert_eq!(c.timeout(), Duration::from_secs(5));
        assert_eq!(c.random_source(), RandomSource::Seeded(42));
        assert_eq!(c.llm_api_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_blank_values_are_absent() {
        let c = config(&[("EMD_HUNTER_LLM_API_KEY", "  "), ("EMD_HUNTER_SYNTHETIC_SEED", "")]).unwrap();
        assert!(c.llm_api_key.is_none());
        assert!(c.synthetic_seed.is_none());
    }

    #[test]
    fn test_bad_numbers_are_config_errors() {
        assert!(matches!(
            config(&[("EMD_HUNTER_SYNTHETIC_SEED", "abc")]),
            Err(DomainError::Config(_))
        ));
        assert!(matches!(
            config(&[("EMD_HUNTER_PROVIDER_TIMEOUT_SECS", "-1")]),
            Err(DomainError::Config(_))
        ));
    }
}
