use shared::FieldErrors;
use shared::forms::SignUpForm;

use super::rules::{
    MIN_PASSWORD_CHARS, MSG_CONFIRM_REQUIRED, MSG_PASSWORDS_DIFFER, Rule, check,
    live_confirm_check,
};
use super::{Form, FormContext};

impl Form for SignUpForm {
    const FIELDS: &'static [&'static str] = &["fullName", "email", "password", "confirmPassword"];
    const SECRET_FIELDS: &'static [&'static str] = &["password", "confirmPassword"];

    fn validate(&self, _ctx: &FormContext<'_>) -> FieldErrors {
        let mut errors = Self::clean_errors();
        errors.set(
            "fullName",
            check(&self.full_name, &[Rule::Required("Full name is required")]),
        );
        errors.set(
            "email",
            check(&self.email, &[Rule::Required("Email is required"), Rule::Email]),
        );
        errors.set(
            "password",
            check(
                &self.password,
                &[
                    Rule::Required("Password is required"),
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
                    Rule::Equals(&self.password, MSG_PASSWORDS_DIFFER),
                ],
            ),
        );
        errors
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "fullName" => Some(&mut self.full_name),
            "email" => Some(&mut self.email),
            "password" => Some(&mut self.password),
            "confirmPassword" => Some(&mut self.confirm_password),
            _ => None,
        }
    }

    fn after_edit(&self, field: &str, errors: &mut FieldErrors) {
        live_confirm_check(
            field,
            "password",
            "confirmPassword",
            &self.password,
            &self.confirm_password,
            errors,
        );
    }
}
