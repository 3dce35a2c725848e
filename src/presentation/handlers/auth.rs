use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{OcrEngine, SummarizationModel, TextChunker};
use crate::domain::User;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub name: String,
    pub gmail: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of a user; never exposes the password hash.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    pub gmail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl UserResponse {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.identity_key().unwrap_or_default().to_string(),
            username: user.username.clone(),
            name: user.name.clone(),
            gmail: user.gmail.clone(),
            profile_image: user.profile_image.clone(),
        }
    }
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

#[tracing::instrument(skip(state, request), fields(username = %request.username))]
pub async fn register_handler<O, M, C>(
    State(state): State<AppState<O, M, C>>,
    Json(request): Json<RegisterRequest>,
) -> impl IntoResponse
where
    O: OcrEngine + 'static,
    M: SummarizationModel + 'static,
    C: TextChunker + 'static,
{
    if request.password != request.confirm_password {
        return error(StatusCode::BAD_REQUEST, "Passwords do not match");
    }
    if !request.gmail.ends_with("@gmail.com") {
        return error(StatusCode::BAD_REQUEST, "Please enter a valid Gmail address");
    }

    match state.user_repository.find_by_username(&request.username).await {
        Ok(Some(_)) => return error(StatusCode::CONFLICT, "Username already exists"),
        Ok(None) => {}
        Err(e) => {
            tracing::error!(error = %e, "User lookup failed");
            return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    }

    match state.user_repository.find_by_gmail(&request.gmail).await {
        Ok(Some(_)) => return error(StatusCode::CONFLICT, "Gmail already registered"),
        Ok(None) => {}
        Err(e) => {
            tracing::error!(error = %e, "User lookup failed");
            return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    }

    let mut user = User::new(
        request.username,
        request.name,
        request.gmail,
        &request.password,
    );

    match state.user_repository.insert(&user).await {
        Ok(id) => {
            tracing::info!(user_id = %id.as_str(), "User registered");
            user.id = Some(id);
            (StatusCode::CREATED, Json(UserResponse::from_user(&user))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "User insert failed");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

#[tracing::instrument(skip(state, request), fields(username = %request.username))]
pub async fn login_handler<O, M, C>(
    State(state): State<AppState<O, M, C>>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse
where
    O: OcrEngine + 'static,
    M: SummarizationModel + 'static,
    C: TextChunker + 'static,
{
    let user = match state.user_repository.find_by_username(&request.username).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(error = %e, "User lookup failed");
            return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    match user {
        Some(user) if user.verify_password(&request.password) => {
            tracing::info!("Login successful");
            (StatusCode::OK, Json(UserResponse::from_user(&user))).into_response()
        }
        _ => {
            tracing::warn!("Login rejected");
            error(StatusCode::UNAUTHORIZED, "Invalid username or password")
        }
    }
}
