use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::InvalidInput(s.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Parse(e.to_string())
    }
}

/// Why an external provider call did not yield live data.
///
/// None of these reach the caller of the sourcing orchestrator; each one routes
/// the call to the synthetic generator instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Credentials absent or empty. A routing condition, not a fault.
    #[error("provider credentials are not configured")]
    ConfigurationAbsent,

    /// Network error or timeout.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered but did not signal success.
    #[error("upstream rejected request: {0}")]
    UpstreamRejected(String),

    /// The provider answered with a payload we could not map.
    #[error("malformed upstream payload: {0}")]
    MalformedPayload(String),
}
