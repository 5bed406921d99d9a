use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::{ApiError, SummaryApi};

const GENERIC_FAILURE: &str = "Failed to summarize the text.";

// The clients defined here are reqwest clients for external services.
// Thin wrapper around reqwest for the summarization proxy.
#[derive(Clone)]
pub struct ProxyApi {
    http: Client,
    pub base_url: String,
}

#[derive(Deserialize)]
struct SummaryBody {
    summary: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ProxyApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SummaryApi for ProxyApi {
    async fn summarize(&self, text: &str) -> Result<String, ApiError> {
        // Compose the proxy URL and POST the text payload.
        let url = format!("{}/summarize", self.base_url);
        let res = self
            .http
            .post(url)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .map_err(|err| {
                tracing::error!(%err, "summarize request failed.");
                ApiError {
                    message: GENERIC_FAILURE.to_string(),
                }
            })?;

        let status = res.status();

        // Surface the server's error string when the body carries one.
        if !status.is_success() {
            let message = res
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| GENERIC_FAILURE.to_string());
            return Err(ApiError { message });
        }

        res.json::<SummaryBody>()
            .await
            .map(|body| body.summary)
            .map_err(|_| ApiError {
                message: GENERIC_FAILURE.to_string(),
            })
    }
}
