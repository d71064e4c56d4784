//! Form validation
//!
//! Each form validates into a complete [`FieldErrors`] map covering every one
//! of its fields. A submit is aborted when any message is non-empty.

mod billing;
mod login;
mod profile;
pub mod rules;
mod signup;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::FieldErrors;

pub use login::invalid_credentials;

/// Facts some validators need beyond the form's own values
#[derive(Debug, Clone, Copy)]
pub struct FormContext<'a> {
    /// Address the delete-account confirmation must match
    pub account_email: &'a str,
}

pub trait Form: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Field names in display order (camelCase, as on the wire)
    const FIELDS: &'static [&'static str];

    /// Fields blanked before values are sent back to the viewer
    const SECRET_FIELDS: &'static [&'static str] = &[];

    fn validate(&self, ctx: &FormContext<'_>) -> FieldErrors;

    fn field_mut(&mut self, field: &str) -> Option<&mut String>;

    /// Hook run after a live edit has been stored and its own error cleared
    fn after_edit(&self, _field: &str, _errors: &mut FieldErrors) {}

    fn fields() -> &'static [&'static str] {
        Self::FIELDS
    }

    fn set_field(&mut self, field: &str, value: impl Into<String>) -> AppResult<()> {
        match self.field_mut(field) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(
                AppError::with_message(ErrorCode::FieldInvalid, format!("Unknown field: {field}"))
                    .with_detail("field", field),
            ),
        }
    }

    /// Error map with every field present and clean
    fn clean_errors() -> FieldErrors {
        FieldErrors::for_fields(Self::FIELDS)
    }

    /// Copy with every secret field emptied
    fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for field in Self::SECRET_FIELDS {
            if let Some(slot) = copy.field_mut(field) {
                slot.clear();
            }
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::forms::{
        CardForm, DeleteAccountForm, EmailChangeForm, LoginForm, PasswordChangeForm, PurchaseForm,
        SignUpForm,
    };

    const CTX: FormContext<'static> = FormContext {
        account_email: "user@example.com",
    };

    fn assert_complete<F: Form>() {
        let errors = F::default().validate(&CTX);
        let names: Vec<&str> = errors.iter().map(|(k, _)| k).collect();
        assert_eq!(names, F::FIELDS);
    }

    #[test]
    fn test_validate_covers_every_field() {
        assert_complete::<LoginForm>();
        assert_complete::<SignUpForm>();
        assert_complete::<EmailChangeForm>();
        assert_complete::<PasswordChangeForm>();
        assert_complete::<DeleteAccountForm>();
        assert_complete::<CardForm>();
        assert_complete::<PurchaseForm>();
    }

    #[test]
    fn test_set_field_unknown() {
        let mut form = LoginForm::default();
        let err = form.set_field("username", "x").unwrap_err();
        assert_eq!(err.code, ErrorCode::FieldInvalid);

        form.set_field("email", "a@b.co").unwrap();
        assert_eq!(form.email, "a@b.co");
    }

    #[test]
    fn test_redacted_blanks_secrets() {
        let form = CardForm {
            cardholder_name: "Ann Lee".into(),
            card_number: "4242424242424242".into(),
            expiry_date: "12/27".into(),
            cvv: "123".into(),
        };
        let shown = form.redacted();
        assert_eq!(shown.cardholder_name, "Ann Lee");
        assert_eq!(shown.expiry_date, "12/27");
        assert!(shown.card_number.is_empty());
        assert!(shown.cvv.is_empty());

        let shown = PasswordChangeForm {
            current_password: "a".into(),
            new_password: "b".into(),
            confirm_password: "c".into(),
        }
        .redacted();
        assert_eq!(shown, PasswordChangeForm::default());
    }
}
