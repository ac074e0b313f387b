//! API layer - HTTP entry points.

pub mod http;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app::App;

/// Full router with request tracing and optional CORS.
pub fn router(app: Arc<App>, cors: Option<CorsLayer>) -> Router {
    let mut router = http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors {
        router = router.layer(cors);
    }

    router
}
