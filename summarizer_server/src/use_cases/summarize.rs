use std::sync::Arc;

use crate::domain::{Summary, SummarizeError, SummaryProvider};

// Summarize use case with the provider injected behind its port.
pub struct SummarizeUseCase {
    pub provider: Arc<dyn SummaryProvider>,
}

impl SummarizeUseCase {
    pub async fn execute(&self, text: &str) -> Result<Summary, SummarizeError> {
        // Validate before spending a remote call.
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyText);
        }

        self.provider.summarize(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedProvider;

    #[tokio::test]
    async fn when_text_is_valid_then_provider_summary_is_returned() {
        let provider = ScriptedProvider::succeeding("a short recap");
        let use_case = SummarizeUseCase {
            provider: Arc::new(provider.clone()),
        };

        let result = use_case
            .execute("a long article about many things")
            .await
            .expect("expected summarization to succeed");

        assert_eq!(result.text, "a short recap");
        assert_eq!(provider.calls(), vec!["a long article about many things"]);
    }

    #[tokio::test]
    async fn when_text_is_empty_then_returns_empty_text_without_calling_provider() {
        let provider = ScriptedProvider::succeeding("unused");
        let use_case = SummarizeUseCase {
            provider: Arc::new(provider.clone()),
        };

        let result = use_case.execute("").await;

        assert!(matches!(result, Err(SummarizeError::EmptyText)));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn when_text_is_whitespace_only_then_returns_empty_text_without_calling_provider() {
        let provider = ScriptedProvider::succeeding("unused");
        let use_case = SummarizeUseCase {
            provider: Arc::new(provider.clone()),
        };

        let result = use_case.execute("   \n\t ").await;

        assert!(matches!(result, Err(SummarizeError::EmptyText)));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn when_provider_reports_model_loading_then_error_is_passed_through() {
        let use_case = SummarizeUseCase {
            provider: Arc::new(ScriptedProvider::failing(SummarizeError::ModelLoading)),
        };

        let result = use_case.execute("some text worth summarizing").await;

        assert!(matches!(result, Err(SummarizeError::ModelLoading)));
    }

    #[tokio::test]
    async fn when_provider_reports_empty_response_then_error_is_passed_through() {
        let use_case = SummarizeUseCase {
            provider: Arc::new(ScriptedProvider::failing(SummarizeError::EmptyResponse)),
        };

        let result = use_case.execute("some text worth summarizing").await;

        assert!(matches!(result, Err(SummarizeError::EmptyResponse)));
    }
}
