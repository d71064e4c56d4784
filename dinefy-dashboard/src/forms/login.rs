use shared::FieldErrors;
use shared::forms::LoginForm;

use super::rules::{Rule, check};
use super::{Form, FormContext};

const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";

impl Form for LoginForm {
    const FIELDS: &'static [&'static str] = &["email", "password"];
    const SECRET_FIELDS: &'static [&'static str] = &["password"];

    fn validate(&self, _ctx: &FormContext<'_>) -> FieldErrors {
        let mut errors = Self::clean_errors();
        errors.set(
            "email",
            check(&self.email, &[Rule::Required("Email is required"), Rule::Email]),
        );
        errors.set(
            "password",
            check(&self.password, &[Rule::Required("Password is required")]),
        );
        errors
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "email" => Some(&mut self.email),
            "password" => Some(&mut self.password),
            _ => None,
        }
    }
}

/// Same message on both fields; never reveals which one was wrong
pub fn invalid_credentials() -> FieldErrors {
    let mut errors = LoginForm::clean_errors();
    errors.set("email", MSG_INVALID_CREDENTIALS);
    errors.set("password", MSG_INVALID_CREDENTIALS);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: FormContext<'static> = FormContext {
        account_email: "user@example.com",
    };

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_login_empty() {
        let errors = login("", "").validate(&CTX);
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_login_bad_email() {
        let errors = login("root", "x").validate(&CTX);
        assert_eq!(errors.get("email"), Some("Invalid email format"));
        assert_eq!(errors.get("password"), None);
    }

    #[test]
    fn test_login_has_no_length_rule() {
        let errors = login("root@gmail.com", "1").validate(&CTX);
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_invalid_credentials_on_both_fields() {
        let errors = invalid_credentials();
        assert_eq!(errors.get("email"), Some("Invalid credentials"));
        assert_eq!(errors.get("password"), Some("Invalid credentials"));
    }
}
