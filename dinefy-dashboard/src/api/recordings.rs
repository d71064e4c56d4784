//! Call logs
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /recordings | GET | `?phone=&start=&end=` |
//! | /api/recordings/{id} | GET | open the detail dialog |
//! | /api/recordings/selected | DELETE | close it |

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::{delete, get},
};

use crate::core::ServerState;
use crate::views::{
    CallRecordView, RecordingFilter, RecordingsQuery, RecordingsScreen, RecordingsView,
};
use shared::error::{ApiResponse, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/recordings", get(recordings_screen))
        .route("/api/recordings/selected", delete(close))
        .route("/api/recordings/{id}", get(select))
}

/// GET /recordings
async fn recordings_screen(
    State(state): State<ServerState>,
    Query(query): Query<RecordingsQuery>,
) -> AppResult<ApiResponse<RecordingsView>> {
    let filter = RecordingFilter::from_query(&query)?;

    let mut views = state.views.lock();
    let (_, screen) = views.navigate::<RecordingsScreen>()?;
    screen.set_filter(filter);
    Ok(ApiResponse::success(screen.view()))
}

/// GET /api/recordings/{id}
async fn select(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<CallRecordView>> {
    let mut views = state.views.lock();
    let (_, screen) = views.screen_or_mount::<RecordingsScreen>()?;
    Ok(ApiResponse::success(screen.select(id)?))
}

/// DELETE /api/recordings/selected
async fn close(State(state): State<ServerState>) -> AppResult<ApiResponse<RecordingsView>> {
    let mut views = state.views.lock();
    let (_, screen) = views.screen_or_mount::<RecordingsScreen>()?;
    screen.selected = None;
    Ok(ApiResponse::success(screen.view()))
}
