//! Settings screen
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /settings | GET | mount with defaults |
//! | /api/settings | PATCH | apply one `SettingsEdit` |
//! | /api/settings/save | POST | simulated save, raises the success banner |
//! | /api/settings/dismiss | POST | hide the banner |

use axum::{
    Json, Router,
    extract::State,
    routing::{get, patch, post},
};
use std::time::Instant;

use crate::core::ServerState;
use crate::views::{SettingsScreen, SettingsView, run_detached};
use shared::error::{ApiResponse, AppResult};
use shared::models::SettingsEdit;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/settings", get(settings_screen))
        .route("/api/settings", patch(edit))
        .route("/api/settings/save", post(save))
        .route("/api/settings/dismiss", post(dismiss))
}

/// GET /settings
async fn settings_screen(State(state): State<ServerState>) -> AppResult<ApiResponse<SettingsView>> {
    let mut views = state.views.lock();
    let (_, screen) = views.navigate::<SettingsScreen>()?;
    Ok(ApiResponse::success(screen.view(Instant::now())))
}

/// PATCH /api/settings
async fn edit(
    State(state): State<ServerState>,
    Json(edit): Json<SettingsEdit>,
) -> AppResult<ApiResponse<SettingsView>> {
    let mut views = state.views.lock();
    let (_, screen) = views.screen_or_mount::<SettingsScreen>()?;
    screen.edit(edit);
    Ok(ApiResponse::success(screen.view(Instant::now())))
}

/// POST /api/settings/save
async fn save(State(state): State<ServerState>) -> AppResult<ApiResponse<SettingsView>> {
    let (mount_id, settings) = {
        let mut views = state.views.lock();
        let (mount_id, screen) = views.screen_or_mount::<SettingsScreen>()?;
        (mount_id, screen.settings.clone())
    };

    let client = state.client.clone();
    let views = state.views.clone();
    let view = run_detached(async move {
        if let Err(e) = client.save_settings(&settings).await {
            tracing::error!(error = %e, "Saving settings failed");
            return Err(e);
        }

        let now = Instant::now();
        let mut views = views.lock();
        let view = match views.screen_if_current::<SettingsScreen>(mount_id) {
            Some(screen) => {
                screen.mark_saved(now);
                screen.view(now)
            }
            None => SettingsView {
                settings,
                show_success: false,
            },
        };
        Ok(view)
    })
    .await?;

    Ok(ApiResponse::success_with_message("Settings saved", view))
}

/// POST /api/settings/dismiss
async fn dismiss(State(state): State<ServerState>) -> AppResult<ApiResponse<SettingsView>> {
    let mut views = state.views.lock();
    let (_, screen) = views.screen_or_mount::<SettingsScreen>()?;
    screen.dismiss();
    Ok(ApiResponse::success(screen.view(Instant::now())))
}
