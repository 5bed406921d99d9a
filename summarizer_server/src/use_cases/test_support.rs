use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{Summary, SummarizeError, SummaryProvider};

// Scripted provider double that records every text it was asked to summarize.
#[derive(Clone)]
pub(crate) struct ScriptedProvider {
    calls: Arc<Mutex<Vec<String>>>,
    reply: Result<String, SummarizeError>,
}

impl ScriptedProvider {
    pub(crate) fn succeeding(summary: impl Into<String>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: Ok(summary.into()),
        }
    }

    pub(crate) fn failing(error: SummarizeError) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: Err(error),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        let guard = self.calls.lock().expect("calls mutex poisoned");
        guard.clone()
    }
}

#[async_trait]
impl SummaryProvider for ScriptedProvider {
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizeError> {
        let mut guard = self.calls.lock().expect("calls mutex poisoned");
        guard.push(text.to_string());

        self.reply.clone().map(|text| Summary { text })
    }
}
