use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{OcrEngine, SummarizationModel, TextChunker};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    change_password_handler, extract_handler, get_user_handler, health_handler, login_handler,
    medicine_handler, medicine_info_handler, medicine_suggestions_handler, register_handler,
    summarize_handler, update_profile_image_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<O, M, C>(state: AppState<O, M, C>) -> Router
where
    O: OcrEngine + 'static,
    M: SummarizationModel + 'static,
    C: TextChunker + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/extract", post(extract_handler::<O, M, C>))
        .route("/summarize", post(summarize_handler::<O, M, C>))
        .route(
            "/api/medicine/suggestions/{query}",
            get(medicine_suggestions_handler::<O, M, C>),
        )
        .route("/api/medicine/{name}", get(medicine_handler::<O, M, C>))
        .route("/medicine/{name}", get(medicine_info_handler::<O, M, C>))
        .route("/api/auth/register", post(register_handler::<O, M, C>))
        .route("/api/auth/login", post(login_handler::<O, M, C>))
        .route("/api/users/{username}", get(get_user_handler::<O, M, C>))
        .route(
            "/api/users/{username}/password",
            post(change_password_handler::<O, M, C>),
        )
        .route(
            "/api/users/{username}/profile-image",
            post(update_profile_image_handler::<O, M, C>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
