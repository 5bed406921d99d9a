use async_trait::async_trait;
use std::fmt;

// Summary produced by the remote inference provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub text: String,
}

// Failure taxonomy for a single summarization attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    // Request-side validation failure; no remote call was made.
    EmptyText,
    // The hosted model is still being loaded; the caller can retry shortly.
    ModelLoading,
    // Remote endpoint answered with a non-success status.
    Upstream { status: u16 },
    // Remote endpoint answered 200 with an empty result sequence.
    EmptyResponse,
    // Remote body could not be parsed into the expected result shape.
    Decode(String),
    // Network-level failure before any response was received.
    Transport(String),
}

impl fmt::Display for SummarizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummarizeError::EmptyText => write!(f, "text must not be empty"),
            SummarizeError::ModelLoading => write!(f, "remote model is still loading"),
            SummarizeError::Upstream { status } => {
                write!(f, "inference endpoint returned status {status}")
            }
            SummarizeError::EmptyResponse => {
                write!(f, "inference endpoint returned an empty result sequence")
            }
            SummarizeError::Decode(detail) => {
                write!(f, "inference response decode error: {detail}")
            }
            SummarizeError::Transport(detail) => {
                write!(f, "inference transport error: {detail}")
            }
        }
    }
}

impl std::error::Error for SummarizeError {}

// The handler depends on this trait, not the concrete client implementation.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizeError>;
}
