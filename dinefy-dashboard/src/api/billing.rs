//! Billing screen
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /billing | GET | usage, history, cards, purchase form |
//! | /api/billing/purchase-amount | PUT | `{ "amount": "50" }`, returns minutes |
//! | /api/billing/purchase | POST | buy minutes |
//! | /api/billing/card | PATCH | live card field edit |
//! | /api/billing/cards | POST | add a card |

use axum::{
    Json, Router,
    extract::State,
    routing::{get, patch, post, put},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::metrics::{RATE_PER_MINUTE, purchased_minutes};
use crate::views::{BillingScreen, BillingView, FormState, PurchaseView, run_detached};
use shared::error::{ApiResponse, AppResult};
use shared::forms::{CardForm, FieldEdit, PurchaseForm};
use shared::models::PaymentMethod;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/billing", get(billing_screen))
        .route("/api/billing/purchase-amount", put(set_amount))
        .route("/api/billing/purchase", post(purchase))
        .route("/api/billing/card", patch(edit_card))
        .route("/api/billing/cards", post(add_card))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResult {
    pub amount: String,
    pub minutes: u64,
}

/// GET /billing
async fn billing_screen(State(state): State<ServerState>) -> AppResult<ApiResponse<BillingView>> {
    let mut views = state.views.lock();
    let (_, screen) = views.navigate::<BillingScreen>()?;
    Ok(ApiResponse::success(screen.view()))
}

/// PUT /api/billing/purchase-amount
async fn set_amount(
    State(state): State<ServerState>,
    Json(input): Json<PurchaseForm>,
) -> AppResult<ApiResponse<PurchaseView>> {
    let mut views = state.views.lock();
    let (_, screen) = views.screen_or_mount::<BillingScreen>()?;
    screen.purchase.edit("amount", input.amount)?;
    Ok(ApiResponse::success(screen.purchase_view()))
}

/// POST /api/billing/purchase
async fn purchase(
    State(state): State<ServerState>,
    body: Option<Json<PurchaseForm>>,
) -> AppResult<ApiResponse<PurchaseResult>> {
    let (mount_id, values) = {
        let mut views = state.views.lock();
        let (mount_id, screen) = views.screen_or_mount::<BillingScreen>()?;
        let values = screen
            .purchase
            .begin_submit(body.map(|Json(v)| v), &state.form_context())?;
        (mount_id, values)
    };
    let minutes = purchased_minutes(&values.amount, RATE_PER_MINUTE);

    let client = state.client.clone();
    let views = state.views.clone();
    let (message, amount) = run_detached(async move {
        let result = client.purchase_minutes(&values.amount, minutes).await;
        let mut views = views.lock();
        let screen = views.screen_if_current::<BillingScreen>(mount_id);
        match result {
            Ok(()) => {
                let message = format!("Purchased {minutes} minutes");
                if let Some(screen) = screen {
                    screen.purchase.succeed_and_reset(message.clone());
                }
                Ok((message, values.amount))
            }
            Err(e) => {
                tracing::error!(error = %e, "Minutes purchase failed");
                if let Some(screen) = screen {
                    screen.purchase.abandon();
                }
                Err(e)
            }
        }
    })
    .await?;

    Ok(ApiResponse::success_with_message(
        message,
        PurchaseResult { amount, minutes },
    ))
}

/// PATCH /api/billing/card
async fn edit_card(
    State(state): State<ServerState>,
    Json(edit): Json<FieldEdit>,
) -> AppResult<ApiResponse<FormState<CardForm>>> {
    let mut views = state.views.lock();
    let (_, screen) = views.screen_or_mount::<BillingScreen>()?;
    screen.card.edit(&edit.field, edit.value)?;
    Ok(ApiResponse::success(screen.card.redacted()))
}

/// POST /api/billing/cards
///
/// The card lives only on this screen; it is gone after navigating away.
async fn add_card(
    State(state): State<ServerState>,
    body: Option<Json<CardForm>>,
) -> AppResult<ApiResponse<Option<PaymentMethod>>> {
    let (mount_id, card) = {
        let mut views = state.views.lock();
        let (mount_id, screen) = views.screen_or_mount::<BillingScreen>()?;
        let card = screen
            .card
            .begin_submit(body.map(|Json(v)| v), &state.form_context())?;
        (mount_id, card)
    };

    let client = state.client.clone();
    let views = state.views.clone();
    let added = run_detached(async move {
        let result = client.add_card(&card).await;
        let mut views = views.lock();
        let screen = views.screen_if_current::<BillingScreen>(mount_id);
        match result {
            Ok(()) => Ok(screen.map(|screen| {
                let method = screen.add_card(&card).clone();
                screen.card.succeed_and_reset("Card added");
                method
            })),
            Err(e) => {
                tracing::error!(error = %e, "Adding card failed");
                if let Some(screen) = screen {
                    screen.card.abandon();
                }
                Err(e)
            }
        }
    })
    .await?;

    Ok(ApiResponse::success_with_message("Card added", added))
}
