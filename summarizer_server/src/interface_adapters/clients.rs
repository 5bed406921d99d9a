use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::{Summary, SummarizeError, SummaryProvider};

// Fixed generation bounds for the hosted model.
const MIN_SUMMARY_LENGTH: u32 = 30;
const MAX_SUMMARY_LENGTH: u32 = 150;

// Cap outbound calls so a hung upstream cannot pin a request forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// The clients defined here are reqwest clients for external services.
// Thin wrapper around reqwest for the hosted inference endpoint.
#[derive(Clone)]
pub struct HuggingFaceClient {
    http: Client,
    endpoint: String,
    token: String,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    min_length: u32,
    max_length: u32,
}

#[derive(Deserialize)]
struct InferenceResult {
    summary_text: String,
}

impl HuggingFaceClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl SummaryProvider for HuggingFaceClient {
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizeError> {
        let payload = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                min_length: MIN_SUMMARY_LENGTH,
                max_length: MAX_SUMMARY_LENGTH,
            },
        };

        tracing::info!("contacting the inference endpoint.");
        let res = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .timeout(REQUEST_TIMEOUT)
            .json(&payload)
            .send()
            .await
            .map_err(|err| SummarizeError::Transport(err.to_string()))?;

        let status = res.status();

        // Hosted models report 503 while they are being loaded into memory.
        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(SummarizeError::ModelLoading);
        }

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "inference endpoint returned an error.");
            return Err(SummarizeError::Upstream {
                status: status.as_u16(),
            });
        }

        // Success bodies are an ordered sequence of result objects.
        let results = res
            .json::<Vec<InferenceResult>>()
            .await
            .map_err(|err| SummarizeError::Decode(err.to_string()))?;

        let first = results
            .into_iter()
            .next()
            .ok_or(SummarizeError::EmptyResponse)?;

        Ok(Summary {
            text: first.summary_text,
        })
    }
}
