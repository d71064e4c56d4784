//! Field rules; the first failing rule gives the field's message

use regex::Regex;
use shared::FieldErrors;
use std::sync::LazyLock;

pub const MIN_PASSWORD_CHARS: usize = 8;

pub const MSG_INVALID_EMAIL: &str = "Invalid email format";
pub const MSG_PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const MSG_CONFIRM_REQUIRED: &str = "Please confirm your password";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy)]
pub enum Rule<'a> {
    /// Non-empty, otherwise the given message
    Required(&'static str),
    /// `local@domain.tld` shape
    Email,
    /// At least n characters
    MinChars(usize),
    /// Equal to another value, otherwise the given message
    Equals(&'a str, &'static str),
}

impl Rule<'_> {
    fn failure(&self, value: &str) -> Option<String> {
        match self {
            Rule::Required(msg) => value.is_empty().then(|| (*msg).to_string()),
            Rule::Email => (!is_valid_email(value)).then(|| MSG_INVALID_EMAIL.to_string()),
            Rule::MinChars(n) => (value.chars().count() < *n)
                .then(|| format!("Password must be at least {n} characters")),
            Rule::Equals(other, msg) => (value != *other).then(|| (*msg).to_string()),
        }
    }
}

/// First failing rule's message, or `""` when all pass
pub fn check(value: &str, rules: &[Rule<'_>]) -> String {
    rules
        .iter()
        .find_map(|rule| rule.failure(value))
        .unwrap_or_default()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Recompute the confirmation error after an edit of either password field
///
/// Editing the confirmation flags a mismatch with the password. Editing the
/// password flags it only when a confirmation is present and differs. A
/// matching edit leaves the existing message alone.
pub fn live_confirm_check(
    edited: &str,
    password_field: &str,
    confirm_field: &str,
    password: &str,
    confirm: &str,
    errors: &mut FieldErrors,
) {
    if edited == confirm_field && confirm != password {
        errors.set(confirm_field, MSG_PASSWORDS_DIFFER);
    } else if edited == password_field && !confirm.is_empty() && password != confirm {
        errors.set(confirm_field, MSG_PASSWORDS_DIFFER);
    }
}
