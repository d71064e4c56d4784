use serde::Serialize;

use super::screen::MountContext;
use super::submission::FormState;
use crate::metrics::{PasswordStrength, password_strength};
use shared::forms::{LoginForm, SignUpForm};

#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    pub form: FormState<LoginForm>,
}

impl LoginScreen {
    pub fn new(_ctx: &MountContext) -> Self {
        Self::default()
    }

    pub fn view(&self) -> FormState<LoginForm> {
        self.form.redacted()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignUpScreen {
    pub form: FormState<SignUpForm>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpView {
    #[serde(flatten)]
    pub form: FormState<SignUpForm>,
    pub password_strength: PasswordStrength,
}

impl SignUpScreen {
    pub fn new(_ctx: &MountContext) -> Self {
        Self::default()
    }

    pub fn view(&self) -> SignUpView {
        SignUpView {
            password_strength: password_strength(&self.form.values.password),
            form: self.form.redacted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_view_scores_before_redacting() {
        let mut screen = SignUpScreen::default();
        screen.form.edit("password", "Passw0rd!").unwrap();
        screen.form.edit("email", "a@b.co").unwrap();

        let json = serde_json::to_value(screen.view()).unwrap();
        assert_eq!(json["passwordStrength"]["score"], 4);
        assert_eq!(json["passwordStrength"]["label"], "Strong");
        assert_eq!(json["values"]["password"], "");
        assert_eq!(json["values"]["email"], "a@b.co");
        assert_eq!(json["status"]["state"], "idle");
    }

    #[test]
    fn test_login_view_hides_password() {
        let mut screen = LoginScreen::default();
        screen.form.edit("password", "12345678").unwrap();
        assert_eq!(screen.view().values.password, "");
        assert_eq!(screen.form.values.password, "12345678");
    }
}
