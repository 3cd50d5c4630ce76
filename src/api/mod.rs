pub mod handlers;

use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/advertisement", post(handlers::handle_generate_advertisement))
        .route("/health", get(handlers::handle_health))
        .with_state(state)
}
