pub mod health;
pub mod home;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route(
            "/",
            get(home::handle_home_page).post(home::handle_home_submit),
        )
        // JSON API
        .route("/api/v1/ideas", post(handlers::handle_generate_ideas))
        .route("/api/v1/options", get(handlers::handle_options))
        .fallback(not_found)
        .with_state(state)
}
