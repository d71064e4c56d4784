//! HTTP API
//!
//! Screen routes (`GET /`, `/settings`, ...) return the mounted screen's
//! view model. Actions live under `/api/`.
//!
//! - [`health`] - liveness
//! - [`auth`] - login, sign-up, logout, session status
//! - [`overview`] - dashboard overview
//! - [`settings`] - restaurant settings editor
//! - [`recordings`] - call logs
//! - [`integrations`] - Clover / Shopify panels
//! - [`billing`] - usage, minute purchases, cards
//! - [`shell`] - notifications and dark mode
//! - [`profile`] - email, password and account dialogs

pub mod auth;
pub mod billing;
pub mod health;
pub mod integrations;
pub mod overview;
pub mod profile;
pub mod recordings;
pub mod settings;
pub mod shell;

use axum::{
    Router,
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::session::{Route, require_session};

/// All routes, no middleware
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(overview::router())
        .merge(settings::router())
        .merge(recordings::router())
        .merge(integrations::router())
        .merge(billing::router())
        .merge(shell::router())
        .merge(profile::router())
}

/// Routes plus the session gate and tower-http middleware
///
/// Used by [`crate::core::Server`] and by in-process tests.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // Unknown paths go home; the gate then decides where home is
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(state.clone(), require_session))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.request_timeout(),
        ))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
}

async fn fallback() -> Response {
    Redirect::temporary(Route::Overview.path()).into_response()
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());
    response
}
