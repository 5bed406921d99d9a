use axum::{
    Router,
    routing::{get, post},
};

use crate::interface_adapters::handlers::{health, summarize};
use crate::interface_adapters::state::AppState;

pub fn app(state: AppState) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/", get(health))
        .route("/summarize", post(summarize))
        .with_state(state)
}
