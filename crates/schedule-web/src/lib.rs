use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::{DefaultBodyLimit, MatchedPath, Request};
use axum::response::Response;
use axum::routing::{get, post};
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::trace::TraceLayer;
use tracing::{Span, debug, error, info_span};

pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod upload;

pub use config::{ConfigError, ServerConfig};
pub use cors::{CorsConfig, CorsConfigError, Environment};
pub use state::AppState;

/// Build the application router with CORS, body limit and request tracing.
pub fn router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let routes = Router::new()
        .route(
            "/extract-schedule",
            post(handlers::extract::extract_schedule),
        )
        .route("/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(config.cors.layer())
        .with_state(state);

    with_tracing(routes)
}

fn with_tracing(routes: Router) -> Router {
    routes.layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request| {
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);

                info_span!("http_request", method = ?request.method(), matched_path)
            })
            .on_request(|request: &Request, _span: &Span| {
                debug!("{} {}", request.method(), request.uri().path())
            })
            .on_response(|response: &Response, latency: Duration, _span: &Span| {
                debug!(status = %response.status(), ?latency, "response")
            })
            .on_failure(
                |failure: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                    error!(%failure, ?latency, "request failed")
                },
            ),
    )
}
