//! Layout state around the protected screens
//!
//! Notifications, dark mode and the profile dialogs outlive screen changes
//! and are dropped only when the session ends.

use serde::Serialize;

use super::submission::FormState;
use crate::fixtures;
use shared::error::{AppError, AppResult};
use shared::forms::{DeleteAccountForm, EmailChangeForm, PasswordChangeForm};
use shared::models::Notification;

#[derive(Debug, Clone)]
pub struct ShellState {
    pub notifications: Vec<Notification>,
    pub dark_mode: bool,
    pub email_form: FormState<EmailChangeForm>,
    pub password_form: FormState<PasswordChangeForm>,
    pub delete_form: FormState<DeleteAccountForm>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            notifications: fixtures::notifications(),
            dark_mode: false,
            email_form: FormState::new(),
            password_form: FormState::new(),
            delete_form: FormState::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsView {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub email: FormState<EmailChangeForm>,
    pub password: FormState<PasswordChangeForm>,
    pub delete: FormState<DeleteAccountForm>,
}

impl ShellState {
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: i64) -> AppResult<&Notification> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found(format!("Notification {id}")))?;
        notification.read = true;
        Ok(&*notification)
    }

    /// `None` flips the current value
    pub fn set_dark_mode(&mut self, enabled: Option<bool>) -> bool {
        self.dark_mode = enabled.unwrap_or(!self.dark_mode);
        self.dark_mode
    }

    pub fn notifications_view(&self) -> NotificationsView {
        NotificationsView {
            notifications: self.notifications.clone(),
            unread_count: self.unread_count(),
        }
    }

    pub fn profile_view(&self) -> ProfileView {
        ProfileView {
            email: self.email_form.redacted(),
            password: self.password_form.redacted(),
            delete: self.delete_form.redacted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_mark_read() {
        let mut shell = ShellState::default();
        assert_eq!(shell.unread_count(), 2);

        assert!(shell.mark_read(1).unwrap().read);
        assert_eq!(shell.unread_count(), 1);

        // Already read stays read
        shell.mark_read(3).unwrap();
        assert_eq!(shell.unread_count(), 1);

        let err = shell.mark_read(42).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_dark_mode_toggle_and_set() {
        let mut shell = ShellState::default();
        assert!(shell.set_dark_mode(None));
        assert!(!shell.set_dark_mode(None));
        assert!(shell.set_dark_mode(Some(true)));
        assert!(shell.set_dark_mode(Some(true)));
    }
}
