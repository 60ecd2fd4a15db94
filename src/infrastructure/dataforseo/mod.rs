//! DataForSEO client: Google Ads keyword metrics and organic SERP data.
//!
//! Every endpoint answers with the same envelope; `status_code == 20000`
//! means success. Each task carries a `result` array whose item shape depends
//! on the endpoint.

pub mod keywords;
pub mod serp;

use crate::domain::error::ProviderError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.dataforseo.com";
pub const STATUS_OK: u32 = 20000;

/// API login and password. Both must be non-empty to count as configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.login.trim().is_empty() && !self.password.trim().is_empty()
    }
}

pub struct DataForSeoClient {
    credentials: Credentials,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct Envelope<R> {
    status_code: u32,
    #[serde(default)]
    status_message: String,
    tasks: Option<Vec<Task<R>>>,
}

#[derive(Debug, Deserialize)]
struct Task<R> {
    result: Option<Vec<R>>,
}

impl DataForSeoClient {
    pub fn new(credentials: Credentials, base_url: Option<String>, timeout: Duration) -> Self {
        Self {
            credentials,
            base_url: base_url
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::builder()
                .user_agent("emd-hunter/0.1")
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_complete()
    }

    /// POST one task to `path` and return the flattened task results.
    ///
    /// Transport errors map to [`ProviderError::Transport`], a non-2xx status
    /// or non-20000 envelope to [`ProviderError::UpstreamRejected`], and any
    /// shape mismatch to [`ProviderError::MalformedPayload`].
    async fn post_task<B, R>(&self, path: &str, task: &B) -> Result<Vec<R>, ProviderError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        if !self.is_configured() {
            return Err(ProviderError::ConfigurationAbsent);
        }

        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.credentials.login, Some(&self.credentials.password))
            .json(&[task])
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::UpstreamRejected(format!(
                "DataForSEO returned HTTP {status}"
            )));
        }

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| ProviderError::MalformedPayload(format!("not JSON: {e}")))?;

        // Check the status before the shape: error envelopes often omit tasks.
        let status_code = value.get("status_code").and_then(|v| v.as_u64());
        if status_code != Some(STATUS_OK as u64) {
            let message = value
                .get("status_message")
                .and_then(|v| v.as_str())
                .unwrap_or("no status message");
            return Err(ProviderError::UpstreamRejected(format!(
                "status {}: {message}",
                status_code.map_or_else(|| "missing".to_string(), |c| c.to_string())
            )));
        }

        let envelope: Envelope<R> = serde_json::from_value(value)
            .map_err(|e| ProviderError::MalformedPayload(e.to_string()))?;
        tracing::debug!(
            status_code = envelope.status_code,
            status_message = %envelope.status_message,
            path,
            "DataForSEO envelope accepted"
        );

        Ok(envelope
            .tasks
            .unwrap_or_default()
            .into_iter()
            .flat_map(|t| t.result.unwrap_or_default())
            .collect())
    }
}
