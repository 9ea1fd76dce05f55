pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::bio::handlers as bio_handlers;
use crate::errors::AppError;
use crate::state::AppState;
use crate::ui::handlers as ui_handlers;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(ui_handlers::handle_index))
        .route("/generate", post(ui_handlers::handle_generate_form))
        // JSON API
        .route("/api/v1/bios", post(bio_handlers::handle_generate_bios))
        .route("/api/v1/models", get(bio_handlers::handle_list_models))
        .fallback(not_found)
        .with_state(state)
}
