//! Layout shell: notifications menu and theme toggle
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /api/notifications | GET | list and unread count |
//! | /api/notifications/{id}/read | POST | mark one read |
//! | /api/shell/dark-mode | PUT | `{ "enabled": true }`, or no body to toggle |

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::views::NotificationsView;
use shared::error::{ApiResponse, AppResult};
use shared::models::Notification;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/notifications", get(list_notifications))
        .route("/api/notifications/{id}/read", post(mark_read))
        .route("/api/shell/dark-mode", put(set_dark_mode))
}

#[derive(Debug, Default, Deserialize)]
pub struct DarkModeInput {
    pub enabled: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkModeView {
    pub dark_mode: bool,
}

/// GET /api/notifications
async fn list_notifications(State(state): State<ServerState>) -> ApiResponse<NotificationsView> {
    let mut views = state.views.lock();
    let (_, shell) = views.shell();
    ApiResponse::success(shell.notifications_view())
}

/// POST /api/notifications/{id}/read
async fn mark_read(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Notification>> {
    let mut views = state.views.lock();
    let (_, shell) = views.shell();
    let notification = shell.mark_read(id)?.clone();
    Ok(ApiResponse::success(notification))
}

/// PUT /api/shell/dark-mode
async fn set_dark_mode(
    State(state): State<ServerState>,
    body: Option<Json<DarkModeInput>>,
) -> ApiResponse<DarkModeView> {
    let enabled = body.and_then(|Json(input)| input.enabled);
    let mut views = state.views.lock();
    let (_, shell) = views.shell();
    ApiResponse::success(DarkModeView {
        dark_mode: shell.set_dark_mode(enabled),
    })
}
