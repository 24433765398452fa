// ABOUTME: HTTP client for the recommendation service
// ABOUTME: Posts campaign briefs to /ads/segment and maps failures onto SubmitError

use std::time::Duration;

use adstudio_core::constants::SEGMENT_ENDPOINT;
use adstudio_core::{CampaignBrief, RecommendationResult, RecommendationService, SubmitError};
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// HTTP API client for the recommendation service
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Client without a request timeout; the transport's own limits apply
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize(base_url.into()),
        }
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(concat!("adstudio/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: normalize(base_url.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn segment_url(&self) -> String {
        format!("{}{}", self.base_url, SEGMENT_ENDPOINT)
    }

    /// Send the brief once and decode the recommendation
    pub async fn segment(
        &self,
        brief: &CampaignBrief,
    ) -> Result<RecommendationResult, SubmitError> {
        let url = self.segment_url();
        info!(
            "POST {} (product={}, personas={})",
            url,
            brief.product_name,
            brief.personas.len()
        );

        let response = self
            .client
            .post(&url)
            .json(brief)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Recommendation request timed out: {}", e);
                } else if e.is_connect() {
                    error!("Failed to connect to recommendation service: {}", e);
                } else {
                    error!("Recommendation request failed: {}", e);
                }
                SubmitError::Transport(e.to_string())
            })?;

        let status = response.status();
        info!("Received response from recommendation service: status={}", status);

        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let err = SubmitError::from_error_body(status.as_u16(), &body);
            warn!("Recommendation service returned {}: {}", status, err);
            return Err(err);
        }

        serde_json::from_str::<RecommendationResult>(&body).map_err(|e| {
            error!(
                "Failed to parse recommendation: {}. Body snippet: {}",
                e,
                snippet(&body)
            );
            SubmitError::Transport(format!("Failed to parse response: {}", e))
        })
    }
}

#[async_trait]
impl RecommendationService for ApiClient {
    async fn segment(&self, brief: &CampaignBrief) -> Result<RecommendationResult, SubmitError> {
        ApiClient::segment(self, brief).await
    }
}

fn normalize(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

fn snippet(body: &str) -> &str {
    match body.char_indices().nth(500) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.segment_url(), "http://localhost:8000/api/ads/segment");
    }

    #[test]
    fn test_with_timeout_builds() {
        let client =
            ApiClient::with_timeout("http://localhost:8000", Some(Duration::from_secs(5))).unwrap();
        assert_eq!(client.segment_url(), "http://localhost:8000/ads/segment");
    }

    #[test]
    fn test_snippet_respects_char_boundaries() {
        let body = "ñ".repeat(600);
        assert_eq!(snippet(&body).chars().count(), 500);
        assert_eq!(snippet("short"), "short");
    }
}
