use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{OcrEngine, SummarizationModel, TextChunker};
use crate::application::services::SummarizationError;
use crate::domain::SummaryStyle;
use crate::presentation::state::AppState;

const DEFAULT_LENGTH_PERCENT: u32 = 50;

#[derive(Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "type")]
    pub style: SummaryStyle,
    #[serde(default = "default_length")]
    pub length: u32,
}

fn default_length() -> u32 {
    DEFAULT_LENGTH_PERCENT
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub processing_time: f64,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn summarize_handler<O, M, C>(
    State(state): State<AppState<O, M, C>>,
    Json(request): Json<SummarizeRequest>,
) -> impl IntoResponse
where
    O: OcrEngine + 'static,
    M: SummarizationModel + 'static,
    C: TextChunker + 'static,
{
    let started = Instant::now();

    match state
        .summarization_service
        .summarize(&request.text, request.length, request.style)
        .await
    {
        Ok(result) => {
            let processing_time = started.elapsed().as_secs_f64();
            tracing::info!(
                chunks_total = result.chunks_total,
                chunks_skipped = result.chunks_skipped,
                processing_time,
                "Summarize successful"
            );
            (
                StatusCode::OK,
                Json(SummarizeResponse {
                    summary: result.text,
                    processing_time,
                }),
            )
                .into_response()
        }
        Err(SummarizationError::EmptyInput) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No text provided".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Summarize failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
