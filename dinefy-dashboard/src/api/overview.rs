//! Overview screen
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | / | GET | `?range=7d|1m|3m|6m` (default `6m`) |

use axum::{
    Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::views::{OverviewScreen, OverviewView};
use shared::error::{ApiResponse, AppResult};
use shared::models::TimeRange;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(overview))
}

#[derive(Debug, Default, Deserialize)]
pub struct OverviewQuery {
    pub range: Option<String>,
}

/// GET /
async fn overview(
    State(state): State<ServerState>,
    Query(query): Query<OverviewQuery>,
) -> AppResult<ApiResponse<OverviewView>> {
    let range = match query.range.as_deref() {
        Some(text) if !text.is_empty() => text.parse::<TimeRange>()?,
        _ => TimeRange::default(),
    };

    let mut views = state.views.lock();
    let (_, screen) = views.navigate::<OverviewScreen>()?;
    screen.range = range;
    Ok(ApiResponse::success(screen.view()))
}
