use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{dashboard, health};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // The dashboard frontend is served from a different origin in
    // development, so the API stays permissive.
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/dashboard", dashboard::router())
        .layer(cors)
        .with_state(state)
}
