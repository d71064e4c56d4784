//! Auth screens and session API
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /login | GET | mount login screen (gate: logged out only) |
//! | /signup | GET | mount sign-up screen (gate: logged out only) |
//! | /api/auth/login | PATCH | live field edit |
//! | /api/auth/login | POST | submit |
//! | /api/auth/signup | PATCH | live field edit, returns password strength |
//! | /api/auth/signup | POST | submit |
//! | /api/auth/logout | POST | clear flag, full reset, 307 → /login |
//! | /api/auth/session | GET | `{ isAuthenticated }` |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/login", get(handler::login_screen))
        .route("/signup", get(handler::signup_screen))
        .nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login).patch(handler::edit_login))
        .route("/signup", post(handler::signup).patch(handler::edit_signup))
        .route("/logout", post(handler::logout))
        .route("/session", get(handler::session))
}
