use crate::domain::{Clipboard, Clock, SummaryApi};

// Minimum words before a summary request is worth sending.
const MIN_INPUT_WORDS: usize = 50;

// How long the copy confirmation stays visible.
const COPY_CONFIRMATION_MILLIS: u64 = 2_000;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to summarize.";
pub const TOO_SHORT_MESSAGE: &str =
    "Text is too short. Enter at least 50 words for a useful summary.";

// Form state for the summarization client. One submission at a time; the
// loading flag gates resubmission while a request is in flight.
#[derive(Default)]
pub struct FormController {
    input: String,
    summary: Option<String>,
    error: Option<String>,
    loading: bool,
    original_word_count: usize,
    copy_confirmed_at: Option<u64>,
}

fn count_words(text: &str) -> usize {
    // Split on whitespace runs; empty input yields zero.
    text.split_whitespace().count()
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_word_count(&self) -> usize {
        count_words(&self.input)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn original_word_count(&self) -> usize {
        self.original_word_count
    }

    // Validates locally, then issues exactly one request to the proxy.
    pub async fn submit(&mut self, api: &dyn SummaryApi) {
        if self.loading {
            // The submit control is disabled while a request is in flight.
            return;
        }

        if self.input.trim().is_empty() {
            self.error = Some(EMPTY_INPUT_MESSAGE.to_string());
            return;
        }

        let words = self.input_word_count();
        if words < MIN_INPUT_WORDS {
            self.error = Some(TOO_SHORT_MESSAGE.to_string());
            return;
        }

        self.summary = None;
        self.error = None;
        self.loading = true;

        match api.summarize(&self.input).await {
            Ok(summary) => {
                // Word count captured at the moment the summary was produced,
                // so the compression ratio stays stable if the input changes.
                self.original_word_count = words;
                self.summary = Some(summary);
            }
            Err(err) => self.error = Some(err.message),
        }

        self.loading = false;
    }

    pub fn summary_word_count(&self) -> usize {
        self.summary.as_deref().map_or(0, count_words)
    }

    pub fn compression_ratio(&self) -> i64 {
        if self.summary.is_none() || self.original_word_count == 0 {
            return 0;
        }

        let original = self.original_word_count as f64;
        let summary = self.summary_word_count() as f64;
        (((original - summary) / original) * 100.0).round() as i64
    }

    // Resets all transient state back to an empty form.
    pub fn clear(&mut self) {
        self.input.clear();
        self.summary = None;
        self.error = None;
        self.loading = false;
        self.original_word_count = 0;
        self.copy_confirmed_at = None;
    }

    // Copies the current summary and records a transient confirmation.
    pub fn copy_summary(&mut self, clipboard: &mut dyn Clipboard, clock: &dyn Clock) -> bool {
        let Some(summary) = self.summary.as_deref() else {
            return false;
        };

        match clipboard.write(summary) {
            Ok(()) => {
                self.copy_confirmed_at = Some(clock.now_epoch_millis());
                true
            }
            Err(error) => {
                tracing::error!(%error, "failed to copy summary.");
                false
            }
        }
    }

    pub fn copy_confirmed(&self, clock: &dyn Clock) -> bool {
        self.copy_confirmed_at
            .is_some_and(|at| clock.now_epoch_millis() < at + COPY_CONFIRMATION_MILLIS)
    }
}
