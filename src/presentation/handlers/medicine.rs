use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{OcrEngine, SummarizationModel, TextChunker};
use crate::domain::MedicineSuggestion;
use crate::presentation::state::AppState;

const SUGGESTION_LIMIT: usize = 5;

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<MedicineSuggestion>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Exact-then-substring lookup against the JSON catalog.
#[tracing::instrument(skip(state))]
pub async fn medicine_handler<O, M, C>(
    State(state): State<AppState<O, M, C>>,
    Path(name): Path<String>,
) -> impl IntoResponse
where
    O: OcrEngine + 'static,
    M: SummarizationModel + 'static,
    C: TextChunker + 'static,
{
    match state.medicine_store.find_by_name(&name) {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => {
            tracing::debug!(query = %name, "No medicine matched");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Medicine not found".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Three-field fuzzy lookup against the CSV dataset; empty fields are dropped
/// from the serialized record.
#[tracing::instrument(skip(state))]
pub async fn medicine_info_handler<O, M, C>(
    State(state): State<AppState<O, M, C>>,
    Path(name): Path<String>,
) -> impl IntoResponse
where
    O: OcrEngine + 'static,
    M: SummarizationModel + 'static,
    C: TextChunker + 'static,
{
    match state.medicine_dataset.find_fuzzy(&name) {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Medicine not found".to_string(),
            }),
        )
            .into_response(),
    }
}

#[tracing::instrument(skip(state))]
pub async fn medicine_suggestions_handler<O, M, C>(
    State(state): State<AppState<O, M, C>>,
    Path(query): Path<String>,
) -> impl IntoResponse
where
    O: OcrEngine + 'static,
    M: SummarizationModel + 'static,
    C: TextChunker + 'static,
{
    let suggestions = state.medicine_store.suggest(&query, SUGGESTION_LIMIT);
    tracing::debug!(query = %query, count = suggestions.len(), "Suggestions computed");
    (StatusCode::OK, Json(SuggestionsResponse { suggestions }))
}
