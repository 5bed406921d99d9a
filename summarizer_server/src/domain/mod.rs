mod summary;

// Re-export the domain boundary types and ports.
pub use summary::{Summary, SummarizeError, SummaryProvider};
