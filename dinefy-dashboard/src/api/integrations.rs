//! Integration panels
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /integrations | GET | both panels, disconnected |
//! | /api/integrations/{platform}/api-key | PUT | `{ "apiKey": "..." }` |
//! | /api/integrations/{platform}/connect | POST | empty key → 400 and panel error |
//! | /api/integrations/{platform}/disconnect | POST | back to initial state |
//! | /api/integrations/{platform}/sync | POST | connected only (422 otherwise) |
//!
//! `{platform}` is `clover` or `shopify`; anything else is 404.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::time::now_local;
use crate::views::{IntegrationPanel, IntegrationPanelView, IntegrationsScreen, IntegrationsView};
use shared::error::{ApiResponse, AppResult};
use shared::models::Platform;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/integrations", get(integrations_screen))
        .route("/api/integrations/{platform}/api-key", put(set_api_key))
        .route("/api/integrations/{platform}/connect", post(connect))
        .route("/api/integrations/{platform}/disconnect", post(disconnect))
        .route("/api/integrations/{platform}/sync", post(sync))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyInput {
    #[serde(default)]
    pub api_key: String,
}

/// GET /integrations
async fn integrations_screen(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<IntegrationsView>> {
    let mut views = state.views.lock();
    let (_, screen) = views.navigate::<IntegrationsScreen>()?;
    Ok(ApiResponse::success(screen.view()))
}

/// Run `action` on one panel of the mounted screen and return its view
///
/// The panel keeps whatever `action` changed even when it fails (the
/// "enter an API key" message is part of the panel state).
fn with_panel(
    state: &ServerState,
    platform: &str,
    action: impl FnOnce(&mut IntegrationPanel) -> AppResult<()>,
) -> AppResult<ApiResponse<IntegrationPanelView>> {
    let platform: Platform = platform.parse()?;

    let mut views = state.views.lock();
    let (_, screen) = views.screen_or_mount::<IntegrationsScreen>()?;
    if let Err(e) = action(screen.panel_mut(platform)) {
        tracing::warn!(platform = %platform, error = %e, "Integration action rejected");
        return Err(e);
    }
    Ok(ApiResponse::success(screen.panel_view(platform)))
}

/// PUT /api/integrations/{platform}/api-key
async fn set_api_key(
    State(state): State<ServerState>,
    Path(platform): Path<String>,
    Json(input): Json<ApiKeyInput>,
) -> AppResult<ApiResponse<IntegrationPanelView>> {
    with_panel(&state, &platform, |panel| {
        panel.set_api_key(input.api_key);
        Ok(())
    })
}

/// POST /api/integrations/{platform}/connect
async fn connect(
    State(state): State<ServerState>,
    Path(platform): Path<String>,
) -> AppResult<ApiResponse<IntegrationPanelView>> {
    with_panel(&state, &platform, |panel| {
        panel.connect(now_local())?;
        tracing::info!(platform = %platform, "Integration connected");
        Ok(())
    })
}

/// POST /api/integrations/{platform}/disconnect
async fn disconnect(
    State(state): State<ServerState>,
    Path(platform): Path<String>,
) -> AppResult<ApiResponse<IntegrationPanelView>> {
    with_panel(&state, &platform, |panel| {
        panel.disconnect();
        tracing::info!(platform = %platform, "Integration disconnected");
        Ok(())
    })
}

/// POST /api/integrations/{platform}/sync
async fn sync(
    State(state): State<ServerState>,
    Path(platform): Path<String>,
) -> AppResult<ApiResponse<IntegrationPanelView>> {
    with_panel(&state, &platform, |panel| panel.sync(now_local()))
}
