//! Form submission state and transient UI flags

use serde::Serialize;
use std::future::Future;
use std::time::{Duration, Instant};

use crate::forms::{Form, FormContext};
use shared::error::{AppError, AppResult};
use shared::FieldErrors;

/// `Idle → Submitting → Succeeded | Rejected`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        message: String,
    },
    /// Validation or credential failure; messages are in the error map
    Rejected,
}

/// Values, per-field errors and submit status of one form
#[derive(Debug, Clone, Serialize)]
pub struct FormState<F> {
    pub values: F,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
}

impl<F: Form> Default for FormState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Form> FormState<F> {
    pub fn new() -> Self {
        Self {
            values: F::default(),
            errors: F::clean_errors(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// What the viewer gets back: same state, secrets blanked
    pub fn redacted(&self) -> Self {
        Self {
            values: self.values.redacted(),
            errors: self.errors.clone(),
            status: self.status.clone(),
        }
    }

    /// Live edit of one field: store the value, clear that field's error,
    /// then let the form re-derive dependent errors
    pub fn edit(&mut self, field: &str, value: impl Into<String>) -> AppResult<()> {
        self.values.set_field(field, value)?;
        self.errors.clear(field);
        self.values.after_edit(field, &mut self.errors);
        Ok(())
    }

    /// Validate and enter `Submitting`
    ///
    /// `values`, when given, replace the stored values first. On validation
    /// failure the form moves to `Rejected` with every message set and the
    /// error is returned; no call may be made.
    pub fn begin_submit(&mut self, values: Option<F>, ctx: &FormContext<'_>) -> AppResult<F> {
        if self.is_submitting() {
            return Err(AppError::submission_in_progress());
        }
        if let Some(values) = values {
            self.values = values;
        }

        let errors = self.values.validate(ctx);
        if errors.has_errors() {
            self.errors = errors.clone();
            self.status = SubmitStatus::Rejected;
            return Err(errors.into());
        }

        self.errors = errors;
        self.status = SubmitStatus::Submitting;
        Ok(self.values.clone())
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.status = SubmitStatus::Succeeded {
            message: message.into(),
        };
    }

    /// Succeed and clear the inputs
    pub fn succeed_and_reset(&mut self, message: impl Into<String>) {
        self.values = F::default();
        self.errors = F::clean_errors();
        self.succeed(message);
    }

    /// Failure discovered after validation (e.g. wrong credentials)
    pub fn reject(&mut self, errors: FieldErrors) {
        self.errors = errors;
        self.status = SubmitStatus::Rejected;
    }

    /// The call itself failed; it is logged elsewhere and not shown
    pub fn abandon(&mut self) {
        self.status = SubmitStatus::Idle;
    }
}

/// A flag that lowers itself once `ttl` has passed
#[derive(Debug, Clone, Copy)]
pub struct TransientFlag {
    raised_at: Option<Instant>,
    ttl: Duration,
}

impl TransientFlag {
    pub fn new(ttl: Duration) -> Self {
        Self {
            raised_at: None,
            ttl,
        }
    }

    pub fn raise(&mut self, now: Instant) {
        self.raised_at = Some(now);
    }

    pub fn clear(&mut self) {
        self.raised_at = None;
    }

    pub fn is_raised(&self, now: Instant) -> bool {
        self.raised_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.ttl)
    }
}

/// Run a submission on its own task
///
/// Once started, a simulated call always completes and applies its effect,
/// even if the request that started it goes away.
pub async fn run_detached<T, Fut>(work: Fut) -> AppResult<T>
where
    T: Send + 'static,
    Fut: Future<Output = AppResult<T>> + Send + 'static,
{
    tokio::spawn(work)
        .await
        .map_err(|e| AppError::internal(format!("Submission task failed: {e}")))?
}
