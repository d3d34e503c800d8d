use crate::{
    AppState, create_checklist, destroy_checklist, done_checklist, health, list_checklists,
    metrics, show_checklist, update_checklist,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Checklists nested under an issue
        .route(
            "/issues/{issue_id}/checklists",
            get(list_checklists).post(create_checklist),
        )
        // Single checklist item
        .route(
            "/checklists/{id}",
            get(show_checklist)
                .put(update_checklist)
                .patch(update_checklist)
                .delete(destroy_checklist),
        )
        .route("/checklists/{id}/done", post(done_checklist).put(done_checklist))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(metrics::render))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
