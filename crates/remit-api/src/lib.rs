//! # remit-api — Webhook Service
//!
//! Axum service bridging the chat platform to the remittance core:
//!
//! | Route                | Module              | Purpose                        |
//! |----------------------|---------------------|--------------------------------|
//! | `GET /webhook`       | [`routes::webhook`] | Subscription handshake         |
//! | `POST /webhook`      | [`routes::webhook`] | Signed event delivery          |
//! | `POST /notify`       | [`routes::notify`]  | Core notification relay        |
//! | `GET /health/*`      | here                | Liveness / readiness probes    |
//! | `GET /metrics`       | here                | Prometheus scrape endpoint     |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```
//!
//! Webhook authentication is per-request signature verification rather
//! than a middleware: the platform signs bodies, not sessions.

pub mod commands;
pub mod config;
pub mod error;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod signature;
pub mod state;

use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) and `/metrics` sit outside the metrics
/// middleware so scrapes and probes do not pollute request counters.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();

    let api = Router::new()
        .route(
            "/webhook",
            get(routes::webhook::handshake).post(routes::webhook::receive),
        )
        .route("/notify", post(routes::notify::notify))
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(Extension(metrics.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let unauthenticated = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .route("/metrics", get(prometheus_metrics))
        .layer(Extension(metrics))
        .with_state(state);

    Router::new().merge(unauthenticated).merge(api)
}

/// GET /metrics — Prometheus scrape endpoint.
async fn prometheus_metrics(Extension(metrics): Extension<ApiMetrics>) -> impl IntoResponse {
    match metrics.gather_and_encode() {
        Ok(body) => (
            StatusCode::OK,
            [(
                axum::http::header::CONTENT_TYPE,
                "text/plain; version=0.0.4; charset=utf-8",
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to encode Prometheus metrics: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e).into_response()
        }
    }
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies configuration is loaded and state is sound.
///
/// The service keeps no connections open between requests, so readiness
/// is a configuration sanity check rather than a dependency ping.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if state.config.app_secret.is_empty() || state.config.page_token.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "credentials missing").into_response();
    }
    if state.resolver.catalog().is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "name catalog empty").into_response();
    }
    (StatusCode::OK, "ready").into_response()
}
