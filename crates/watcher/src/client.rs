use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use homework_common::config::AppConfig;
use homework_common::error::FetchError;
use homework_common::types::PollCursor;

/// Source of homework status responses.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HomeworkApi: Send + Sync {
    /// Fetch statuses changed since `cursor` and return the decoded JSON body.
    async fn fetch(&self, cursor: PollCursor) -> Result<Value, FetchError>;
}

/// Homework API client over HTTP.
///
/// One GET per call, no retries. Retrying is the polling loop's job.
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    auth_header: String,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl PracticumClient {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>, token: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            auth_header: format!("OAuth {token}"),
        }
    }

    /// Build a client with its own HTTP connection pool and the configured timeout.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self::new(
            client,
            config.endpoint.clone(),
            &config.practicum_token,
        ))
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, cursor: PollCursor) -> Result<Value, FetchError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            from_date = cursor.timestamp(),
            "Requesting homework statuses"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, &self.auth_header)
            .query(&[("from_date", cursor.timestamp())])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!(status = status.as_u16(), "Homework API returned unexpected status");
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to decode homework API response");
            FetchError::Decode(e.to_string())
        })
    }
}
