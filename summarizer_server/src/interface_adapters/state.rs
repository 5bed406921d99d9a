use std::sync::Arc;

use crate::domain::SummaryProvider;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub summarizer: Arc<dyn SummaryProvider>,
}
