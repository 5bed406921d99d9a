use serde::{Deserialize, Serialize};

// Request payload for a summarization call.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    // A missing field is treated the same as empty text.
    #[serde(default)]
    pub text: String,
}

// Response payload carrying the generated summary.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
