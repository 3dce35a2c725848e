use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{OcrEngine, SummarizationModel, TextChunker};
use crate::application::services::ExtractionError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ExtractResponse {
    pub text: String,
    pub summary: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn extract_handler<O, M, C>(
    State(state): State<AppState<O, M, C>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    O: OcrEngine + 'static,
    M: SummarizationModel + 'static,
    C: TextChunker + 'static,
{
    // Only the field named "image" counts; anything else is skipped.
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some("image") => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Extract request with no image");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "No image uploaded".to_string(),
                    }),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    };

    if field.file_name().unwrap_or_default().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No selected file".to_string(),
            }),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read image bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    match state.extraction_service.extract_and_summarize(&data).await {
        Ok(outcome) => {
            tracing::info!(
                extracted_chars = outcome.text.chars().count(),
                summary_chars = outcome.summary.chars().count(),
                "Extraction successful"
            );
            (
                StatusCode::OK,
                Json(ExtractResponse {
                    text: outcome.text,
                    summary: outcome.summary,
                }),
            )
                .into_response()
        }
        Err(e @ ExtractionError::ImageDecode(_)) => {
            tracing::warn!(error = %e, "Rejected undecodable image");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Extraction failed");
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
