//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
  Router,
  body::Body,
  http::Request,
  routing::{delete, get},
};
use tower_http::{
  cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

pub mod entries;
pub mod error;

/// Fully open CORS. Credentials rule out `*`, so origin, methods and headers
/// are mirrored from the request instead.
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(AllowOrigin::mirror_request())
    .allow_methods(AllowMethods::mirror_request())
    .allow_headers(AllowHeaders::mirror_request())
    .allow_credentials(true)
}

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route(
      "/entries",
      get(entries::list_entries).post(entries::create_entry),
    )
    .route("/entries/:entry_id", delete(entries::delete_entry))
    .with_state(state)
    .layer(
      // Path only: the delete password travels in the query string.
      TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
        tracing::info_span!("request", method = %req.method(), path = %req.uri().path())
      }),
    )
    .layer(cors_layer())
}
