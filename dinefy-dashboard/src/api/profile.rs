//! Profile dialogs in the layout shell
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /api/profile | GET | state of all three dialogs |
//! | /api/profile/email | PATCH / POST | live edit / change email |
//! | /api/profile/password | PATCH / POST | live edit / change password |
//! | /api/profile/delete | PATCH / POST | live edit / delete account |
//!
//! Deleting the account does not end the session.

use axum::{Json, Router, extract::State, routing::get, routing::post};
use std::future::Future;
use std::sync::Arc;

use crate::client::AccountClient;
use crate::core::ServerState;
use crate::forms::Form;
use crate::views::{FormState, ProfileView, ShellState, run_detached};
use shared::error::{ApiResponse, AppResult};
use shared::forms::{DeleteAccountForm, EmailChangeForm, FieldEdit, PasswordChangeForm};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/profile", get(profile))
        .route("/api/profile/email", post(change_email).patch(edit_email))
        .route("/api/profile/password", post(change_password).patch(edit_password))
        .route("/api/profile/delete", post(delete_account).patch(edit_delete))
}

type FormSlot<F> = fn(&mut ShellState) -> &mut FormState<F>;

fn email_form(shell: &mut ShellState) -> &mut FormState<EmailChangeForm> {
    &mut shell.email_form
}

fn password_form(shell: &mut ShellState) -> &mut FormState<PasswordChangeForm> {
    &mut shell.password_form
}

fn delete_form(shell: &mut ShellState) -> &mut FormState<DeleteAccountForm> {
    &mut shell.delete_form
}

/// GET /api/profile
async fn profile(State(state): State<ServerState>) -> ApiResponse<ProfileView> {
    let mut views = state.views.lock();
    let (_, shell) = views.shell();
    ApiResponse::success(shell.profile_view())
}

fn edit<F: Form>(
    state: &ServerState,
    slot: FormSlot<F>,
    edit: FieldEdit,
) -> AppResult<ApiResponse<FormState<F>>> {
    let mut views = state.views.lock();
    let (_, shell) = views.shell();
    let form = slot(shell);
    form.edit(&edit.field, edit.value)?;
    Ok(ApiResponse::success(form.redacted()))
}

/// Validate, run the simulated call, then settle the dialog
///
/// The dialog is updated only if the shell it was submitted from still
/// exists (a logout in between drops the result).
async fn submit<F, Fut>(
    state: &ServerState,
    slot: FormSlot<F>,
    body: Option<F>,
    call: impl FnOnce(Arc<dyn AccountClient>, F) -> Fut,
    success: &'static str,
) -> AppResult<ApiResponse<FormState<F>>>
where
    F: Form,
    Fut: Future<Output = AppResult<()>> + Send + 'static,
{
    let (generation, values) = {
        let mut views = state.views.lock();
        let (generation, shell) = views.shell();
        let values = slot(shell).begin_submit(body, &state.form_context())?;
        (generation, values)
    };

    let pending = call(state.client.clone(), values);
    let views = state.views.clone();
    let settled = run_detached(async move {
        let result = pending.await;
        let mut views = views.lock();
        let shell = views.shell_if_current(generation);
        match result {
            Ok(()) => Ok(shell.map(|shell| {
                let form = slot(shell);
                form.succeed_and_reset(success);
                form.redacted()
            })),
            Err(e) => {
                tracing::error!(error = %e, "Profile update failed");
                if let Some(shell) = shell {
                    slot(shell).abandon();
                }
                Err(e)
            }
        }
    })
    .await?;

    Ok(ApiResponse::success_with_message(
        success,
        settled.unwrap_or_default(),
    ))
}

/// PATCH /api/profile/email
async fn edit_email(
    State(state): State<ServerState>,
    Json(field): Json<FieldEdit>,
) -> AppResult<ApiResponse<FormState<EmailChangeForm>>> {
    edit(&state, email_form, field)
}

/// PATCH /api/profile/password
async fn edit_password(
    State(state): State<ServerState>,
    Json(field): Json<FieldEdit>,
) -> AppResult<ApiResponse<FormState<PasswordChangeForm>>> {
    edit(&state, password_form, field)
}

/// PATCH /api/profile/delete
async fn edit_delete(
    State(state): State<ServerState>,
    Json(field): Json<FieldEdit>,
) -> AppResult<ApiResponse<FormState<DeleteAccountForm>>> {
    edit(&state, delete_form, field)
}

/// POST /api/profile/email
async fn change_email(
    State(state): State<ServerState>,
    body: Option<Json<EmailChangeForm>>,
) -> AppResult<ApiResponse<FormState<EmailChangeForm>>> {
    submit(
        &state,
        email_form,
        body.map(|Json(v)| v),
        |client, values| async move { client.change_email(&values.new_email).await },
        "Email updated successfully",
    )
    .await
}

/// POST /api/profile/password
async fn change_password(
    State(state): State<ServerState>,
    body: Option<Json<PasswordChangeForm>>,
) -> AppResult<ApiResponse<FormState<PasswordChangeForm>>> {
    submit(
        &state,
        password_form,
        body.map(|Json(v)| v),
        |client, _values| async move { client.change_password().await },
        "Password updated successfully",
    )
    .await
}

/// POST /api/profile/delete
async fn delete_account(
    State(state): State<ServerState>,
    body: Option<Json<DeleteAccountForm>>,
) -> AppResult<ApiResponse<FormState<DeleteAccountForm>>> {
    let email = state.config.account_email.clone();
    submit(
        &state,
        delete_form,
        body.map(|Json(v)| v),
        |client, _values| async move { client.delete_account(&email).await },
        "Account deleted",
    )
    .await
}
