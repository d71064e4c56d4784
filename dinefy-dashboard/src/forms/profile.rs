use shared::FieldErrors;
use shared::forms::{DeleteAccountForm, EmailChangeForm, PasswordChangeForm};

use super::rules::{
    MIN_PASSWORD_CHARS, MSG_CONFIRM_REQUIRED, MSG_PASSWORDS_DIFFER, Rule, check,
    live_confirm_check,
};
use super::{Form, FormContext};

impl Form for EmailChangeForm {
    const FIELDS: &'static [&'static str] = &["newEmail", "password"];
    const SECRET_FIELDS: &'static [&'static str] = &["password"];

    fn validate(&self, _ctx: &FormContext<'_>) -> FieldErrors {
        let mut errors = Self::clean_errors();
        errors.set(
            "newEmail",
            check(&self.new_email, &[Rule::Required("Email is required"), Rule::Email]),
        );
        errors.set(
            "password",
            check(&self.password, &[Rule::Required("Password is required")]),
        );
        errors
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "newEmail" => Some(&mut self.new_email),
            "password" => Some(&mut self.password),
            _ => None,
        }
    }
}

impl Form for PasswordChangeForm {
    const FIELDS: &'static [&'static str] = &["currentPassword", "newPassword", "confirmPassword"];
    const SECRET_FIELDS: &'static [&'static str] = Self::FIELDS;

    fn validate(&self, _ctx: &FormContext<'_>) -> FieldErrors {
        let mut errors = Self::clean_errors();
        errors.set(
            "currentPassword",
            check(
                &self.current_password,
                &[Rule::Required("Current password is required")],
            ),
        );
        errors.set(
            "newPassword",
            check(
                &self.new_password,
                &[
                    Rule::Required("New password is required"),
                    Rule::MinChars(MIN_PASSWORD_CHARS),
                ],
            ),
        );
        errors.set(
            "confirmPassword",
            check(
                &self.confirm_password,
                &[
                    Rule::Required(MSG_CONFIRM_REQUIRED),
                    Rule::Equals(&self.new_password, MSG_PASSWORDS_DIFFER),
                ],
            ),
        );
        errors
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "currentPassword" => Some(&mut self.current_password),
            "newPassword" => Some(&mut self.new_password),
            "confirmPassword" => Some(&mut self.confirm_password),
            _ => None,
        }
    }

    fn after_edit(&self, field: &str, errors: &mut FieldErrors) {
        live_confirm_check(
            field,
            "newPassword",
            "confirmPassword",
            &self.new_password,
            &self.confirm_password,
            errors,
        );
    }
}

impl Form for DeleteAccountForm {
    const FIELDS: &'static [&'static str] = &["confirmEmail"];

    fn validate(&self, ctx: &FormContext<'_>) -> FieldErrors {
        let mut errors = Self::clean_errors();
        errors.set(
            "confirmEmail",
            check(
                &self.confirm_email,
                &[Rule::Equals(
                    ctx.account_email,
                    "Email does not match your account",
                )],
            ),
        );
        errors
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "confirmEmail" => Some(&mut self.confirm_email),
            _ => None,
        }
    }
}
