pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/jd/parse", post(handlers::handle_parse_jd))
        .route("/api/v1/jd/sample", post(handlers::handle_parse_sample))
        // Placeholder until question generation exists
        .route("/api/v1/questions", post(handlers::handle_generate_questions))
        .with_state(state)
}
