//! Route gate
//!
//! The gate is a pure function of the route and one boolean. The middleware
//! below applies it to every incoming request.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::security_log;
use shared::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    Overview,
    Settings,
    Recordings,
    Integrations,
    Billing,
    Login,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Requires the session flag
    Protected,
    /// Only for logged-out viewers
    Auth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render(Route),
    Redirect(Route),
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Overview,
        Route::Settings,
        Route::Recordings,
        Route::Integrations,
        Route::Billing,
        Route::Login,
        Route::SignUp,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Overview => "/",
            Route::Settings => "/settings",
            Route::Recordings => "/recordings",
            Route::Integrations => "/integrations",
            Route::Billing => "/billing",
            Route::Login => "/login",
            Route::SignUp => "/signup",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Login | Route::SignUp => RouteKind::Auth,
            _ => RouteKind::Protected,
        }
    }
}

pub fn resolve(route: Route, authenticated: bool) -> GateDecision {
    match (route.kind(), authenticated) {
        (RouteKind::Protected, false) => GateDecision::Redirect(Route::Login),
        (RouteKind::Auth, true) => GateDecision::Redirect(Route::Overview),
        _ => GateDecision::Render(route),
    }
}

/// Public API prefixes (login, sign-up, session status, logout)
const PUBLIC_API_PREFIX: &str = "/api/auth/";

/// Session gate middleware
///
/// | Request | Logged out | Logged in |
/// |---------|------------|-----------|
/// | protected screen | 307 → /login | render |
/// | /login, /signup | render | 307 → / |
/// | /api/auth/* | pass | pass |
/// | other /api/* | 401 | pass |
/// | /health, unknown paths | pass | pass |
pub async fn require_session(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let path = req.uri().path();

    if path.starts_with("/api/") {
        if path.starts_with(PUBLIC_API_PREFIX) {
            return Ok(next.run(req).await);
        }
        if !state.session.is_authenticated() {
            security_log!("WARN", "api_unauthenticated", uri = path.to_string());
            return Err(AppError::not_authenticated());
        }
        return Ok(next.run(req).await);
    }

    // Non-screen paths fall through to the router (health, fallback)
    let Some(route) = Route::from_path(path) else {
        return Ok(next.run(req).await);
    };

    match resolve(route, state.session.is_authenticated()) {
        GateDecision::Render(_) => Ok(next.run(req).await),
        GateDecision::Redirect(target) => {
            security_log!(
                "INFO",
                "gate_redirect",
                from = route.path(),
                to = target.path()
            );
            Ok(Redirect::temporary(target.path()).into_response())
        }
    }
}
