use axum::{Json, extract::State, http::StatusCode};

use crate::domain::SummarizeError;
use crate::interface_adapters::protocol::{ErrorResponse, SummarizeRequest, SummarizeResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::summarize::SummarizeUseCase;

// Handler for relaying a summarization request to the inference provider.
#[tracing::instrument(
    name = "summarize",
    skip_all,
    fields(input_chars = body.text.len())
)]
pub async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = SummarizeUseCase {
        provider: state.summarizer.clone(),
    };

    let summary = use_case
        .execute(&body.text)
        .await
        .map_err(map_summarize_error)?;

    tracing::info!("summary produced successfully.");

    Ok(Json(SummarizeResponse {
        summary: summary.text,
    }))
}

// Plain-text liveness probe.
pub async fn health() -> &'static str {
    "summarizer backend up"
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// Maps domain errors to the HTTP contract.
fn map_summarize_error(err: SummarizeError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        SummarizeError::EmptyText => {
            error_response(StatusCode::BAD_REQUEST, "text must not be empty")
        }
        SummarizeError::ModelLoading => {
            tracing::warn!("remote model is still loading.");
            error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "the model is still loading, try again in a few seconds",
            )
        }
        other => {
            tracing::error!(error = %other, "failed to summarize text.");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "something went wrong while summarizing the text",
            )
        }
    }
}
