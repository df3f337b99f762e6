//! Router Configuration
//!
//! Route configuration for the website.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

/// Create the main router with all routes.
///
/// Anything that matches no route falls back to the landing view.
pub fn create_router(state: AppState) -> Router {
    // Static assets are served immutable; the ?v= query parameter carries
    // the build version for cache busting.
    let static_service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            axum::http::header::CACHE_CONTROL,
            axum::http::HeaderValue::from_static("public, max-age=31536000, immutable"),
        ))
        .service(ServeDir::new("public"));

    let router = Router::new()
        .route("/", get(handlers::home::home))
        .route("/curriculum/{id}", get(handlers::curriculum::curriculum))
        .nest_service("/public", static_service)
        .fallback(handlers::home::home)
        .layer(TraceLayer::new_for_http());

    #[cfg(debug_assertions)]
    let router = router.route("/__livereload", get(crate::dev_tools::livereload_handler));

    router.with_state(state)
}
