use async_trait::async_trait;

// Error surfaced to the form when a summarize call fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
}

// The form depends on this trait, not the concrete HTTP client.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait SummaryApi: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, ApiError>;
}

// Port for the system clipboard.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), String>;
}

// Port for retrieving the current time.
pub trait Clock {
    fn now_epoch_millis(&self) -> u64;
}
