use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{OcrEngine, SummarizationModel, TextChunker};
use crate::domain::hash_password;
use super::auth::UserResponse;
use crate::presentation::state::AppState;

const ALLOWED_IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Serialize)]
pub struct ProfileImageResponse {
    pub profile_image: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error(status: StatusCode, message: &str) -> axum::response::Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn get_user_handler<O, M, C>(
    State(state): State<AppState<O, M, C>>,
    Path(username): Path<String>,
) -> impl IntoResponse
where
    O: OcrEngine + 'static,
    M: SummarizationModel + 'static,
    C: TextChunker + 'static,
{
    match state.user_repository.find_by_username(&username).await {
        Ok(Some(user)) => (StatusCode::OK, Json(UserResponse::from_user(&user))).into_response(),
        Ok(None) => error(StatusCode::NOT_FOUND, "User not found"),
        Err(e) => {
            tracing::error!(error = %e, "User lookup failed");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn change_password_handler<O, M, C>(
    State(state): State<AppState<O, M, C>>,
    Path(username): Path<String>,
    Json(request): Json<ChangePasswordRequest>,
) -> impl IntoResponse
where
    O: OcrEngine + 'static,
    M: SummarizationModel + 'static,
    C: TextChunker + 'static,
{
    if request.new_password != request.confirm_password {
        return error(StatusCode::BAD_REQUEST, "New passwords do not match");
    }

    let user = match state.user_repository.find_by_username(&username).await {
        Ok(Some(user)) => user,
        Ok(None) => return error(StatusCode::NOT_FOUND, "User not found"),
        Err(e) => {
            tracing::error!(error = %e, "User lookup failed");
            return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    if !user.verify_password(&request.current_password) {
        return error(StatusCode::UNAUTHORIZED, "Current password is incorrect");
    }

    let Some(id) = user.id.as_ref() else {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    };

    match state
        .user_repository
        .update_password(id, &hash_password(&request.new_password))
        .await
    {
        Ok(()) => {
            tracing::info!("Password updated");
            StatusCode::OK.into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Password update failed");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn update_profile_image_handler<O, M, C>(
    State(state): State<AppState<O, M, C>>,
    Path(username): Path<String>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    O: OcrEngine + 'static,
    M: SummarizationModel + 'static,
    C: TextChunker + 'static,
{
    let user = match state.user_repository.find_by_username(&username).await {
        Ok(Some(user)) => user,
        Ok(None) => return error(StatusCode::NOT_FOUND, "User not found"),
        Err(e) => {
            tracing::error!(error = %e, "User lookup failed");
            return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    // Only the field named "profile_image" counts; anything else is skipped.
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some("profile_image") => break f,
            Ok(Some(_)) => continue,
            Ok(None) => return error(StatusCode::BAD_REQUEST, "No file selected"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error(StatusCode::BAD_REQUEST, "Failed to read multipart");
            }
        }
    };

    let filename = sanitize_filename(field.file_name().unwrap_or_default());
    if filename.is_empty() {
        return error(StatusCode::BAD_REQUEST, "No file selected");
    }
    if !has_allowed_extension(&filename) {
        return error(
            StatusCode::BAD_REQUEST,
            "Invalid file type. Please upload a PNG, JPG, or JPEG image.",
        );
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read image bytes");
            return error(StatusCode::BAD_REQUEST, "Failed to read file");
        }
    };

    let Some(id) = user.id.as_ref() else {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    };
    let stored_name = format!("{}_{}", id.as_str(), filename);

    if let Err(e) = state.image_store.store(&stored_name, &data).await {
        tracing::error!(error = %e, "Image store failed");
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    }

    match state
        .user_repository
        .set_profile_image(id, &stored_name)
        .await
    {
        Ok(()) => {
            tracing::info!(profile_image = %stored_name, "Profile image updated");
            (
                StatusCode::OK,
                Json(ProfileImageResponse {
                    profile_image: stored_name,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Profile image update failed");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_lowercase();
            ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Strips path components and anything outside a conservative character set.
fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();
    base.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}
