//! Auth API Handlers

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::forms::invalid_credentials;
use crate::security_log;
use crate::session::Route;
use crate::views::{FormState, LoginScreen, SignUpScreen, SignUpView, run_detached};
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::forms::{FieldEdit, LoginForm, SignUpForm};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub is_authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<&'static str>,
}

/// GET /login
pub async fn login_screen(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<FormState<LoginForm>>> {
    let mut views = state.views.lock();
    let (_, screen) = views.navigate::<LoginScreen>()?;
    Ok(ApiResponse::success(screen.view()))
}

/// GET /signup
pub async fn signup_screen(State(state): State<ServerState>) -> AppResult<ApiResponse<SignUpView>> {
    let mut views = state.views.lock();
    let (_, screen) = views.navigate::<SignUpScreen>()?;
    Ok(ApiResponse::success(screen.view()))
}

/// PATCH /api/auth/login
pub async fn edit_login(
    State(state): State<ServerState>,
    Json(edit): Json<FieldEdit>,
) -> AppResult<ApiResponse<FormState<LoginForm>>> {
    let mut views = state.views.lock();
    let (_, screen) = views.screen_or_mount::<LoginScreen>()?;
    screen.form.edit(&edit.field, edit.value)?;
    Ok(ApiResponse::success(screen.view()))
}

/// PATCH /api/auth/signup
pub async fn edit_signup(
    State(state): State<ServerState>,
    Json(edit): Json<FieldEdit>,
) -> AppResult<ApiResponse<SignUpView>> {
    let mut views = state.views.lock();
    let (_, screen) = views.screen_or_mount::<SignUpScreen>()?;
    screen.form.edit(&edit.field, edit.value)?;
    Ok(ApiResponse::success(screen.view()))
}

/// POST /api/auth/login
///
/// The body, when present, replaces the values typed so far. Credentials
/// are checked before the simulated call; the session flag is set only
/// after it completes.
pub async fn login(
    State(state): State<ServerState>,
    body: Option<Json<LoginForm>>,
) -> AppResult<ApiResponse<SessionView>> {
    if state.session.is_authenticated() {
        return Err(AppError::new(ErrorCode::AlreadyAuthenticated));
    }

    let (mount_id, values) = {
        let mut views = state.views.lock();
        let (mount_id, screen) = views.screen_or_mount::<LoginScreen>()?;
        let values = screen
            .form
            .begin_submit(body.map(|Json(v)| v), &state.form_context())?;

        if !state.credentials.verify(&values.email, &values.password) {
            let errors = invalid_credentials();
            screen.form.reject(errors.clone());
            security_log!("WARN", "login_failed", email = values.email);
            return Err(AppError::invalid_credentials().with_detail("fields", errors.to_json()));
        }
        (mount_id, values)
    };

    let client = state.client.clone();
    let session = state.session.clone();
    let views = state.views.clone();
    run_detached(async move {
        let outcome = async {
            client.sign_in(&values.email).await?;
            session.login()?;
            Ok::<(), AppError>(())
        }
        .await;

        match outcome {
            Ok(()) => {
                views.lock().reset();
                security_log!("INFO", "login_success", email = values.email);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Sign-in failed");
                if let Some(screen) = views.lock().screen_if_current::<LoginScreen>(mount_id) {
                    screen.form.abandon();
                }
                Err(e)
            }
        }
    })
    .await?;

    Ok(ApiResponse::success_with_message(
        "Signed in",
        SessionView {
            is_authenticated: true,
            redirect_to: Some(Route::Overview.path()),
        },
    ))
}

/// POST /api/auth/signup
///
/// Success does not sign the viewer in; they are sent to the login screen.
pub async fn signup(
    State(state): State<ServerState>,
    body: Option<Json<SignUpForm>>,
) -> AppResult<ApiResponse<SessionView>> {
    if state.session.is_authenticated() {
        return Err(AppError::new(ErrorCode::AlreadyAuthenticated));
    }

    let (mount_id, values) = {
        let mut views = state.views.lock();
        let (mount_id, screen) = views.screen_or_mount::<SignUpScreen>()?;
        let values = screen
            .form
            .begin_submit(body.map(|Json(v)| v), &state.form_context())?;
        (mount_id, values)
    };

    let client = state.client.clone();
    let views = state.views.clone();
    run_detached(async move {
        let result = client.sign_up(&values).await;
        let mut views = views.lock();
        let screen = views.screen_if_current::<SignUpScreen>(mount_id);
        match result {
            Ok(()) => {
                if let Some(screen) = screen {
                    screen.form.succeed_and_reset("Account created");
                }
                security_log!("INFO", "signup_success", email = values.email);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Sign-up failed");
                if let Some(screen) = screen {
                    screen.form.abandon();
                }
                Err(e)
            }
        }
    })
    .await?;

    Ok(ApiResponse::success_with_message(
        "Account created",
        SessionView {
            is_authenticated: false,
            redirect_to: Some(Route::Login.path()),
        },
    ))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<ServerState>) -> AppResult<Response> {
    state.session.logout()?;
    state.reset_views();
    security_log!("INFO", "logout", to = Route::Login.path());
    Ok(Redirect::temporary(Route::Login.path()).into_response())
}

/// GET /api/auth/session
pub async fn session(State(state): State<ServerState>) -> ApiResponse<SessionView> {
    ApiResponse::success(SessionView {
        is_authenticated: state.session.is_authenticated(),
        redirect_to: None,
    })
}
