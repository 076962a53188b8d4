use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/series", get(handlers::list_series))
        .route("/api/series/:name/summary", get(handlers::get_summary))
        .route("/api/series/:name/heatmap", get(handlers::get_heatmap))
        .route("/api/series/:name/categories", get(handlers::get_categories))
        .route("/api/reload", post(handlers::reload))
        .with_state(state)
}
