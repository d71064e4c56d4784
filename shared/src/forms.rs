//! Form payloads and per-field error maps
//!
//! Every form deserializes from camelCase JSON and defaults missing fields to
//! the empty string, which the validators then report as required.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Ordered field → message map. An empty message means the field is clean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map with every field present and clean
    pub fn for_fields(fields: &[&str]) -> Self {
        Self {
            entries: fields
                .iter()
                .map(|f| ((*f).to_string(), String::new()))
                .collect(),
        }
    }

    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, slot)) => *slot = message,
            None => self.entries.push((field.to_string(), message)),
        }
    }

    /// Clear one field's message, keeping its slot
    pub fn clear(&mut self, field: &str) {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(name, _)| name == field) {
            slot.clear();
        }
    }

    /// The field's message; `None` if the field is absent or clean
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, msg)| msg.as_str())
            .filter(|msg| !msg.is_empty())
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|(_, msg)| !msg.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::validation("Validation failed").with_detail("fields", errors.to_json())
    }
}

// ==================== Forms ====================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmailChangeForm {
    pub new_email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteAccountForm {
    pub confirm_email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardForm {
    pub cardholder_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseForm {
    /// Dollar amount as typed
    pub amount: String,
}

/// Live single-field edit: `{"field": "email", "value": "a@b.co"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEdit {
    pub field: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_field_errors_keep_order() {
        let mut errors = FieldErrors::for_fields(&["fullName", "email", "password"]);
        errors.set("password", "Password is required");
        errors.set("fullName", "Full name is required");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(
            json,
            r#"{"fullName":"Full name is required","email":"","password":"Password is required"}"#
        );
    }

    #[test]
    fn test_field_errors_clear_one() {
        let mut errors = FieldErrors::for_fields(&["email", "password"]);
        errors.set("email", "Email is required");
        errors.set("password", "Password is required");
        assert!(errors.has_errors());

        errors.clear("email");
        assert_eq!(errors.get("email"), None);
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(errors.len(), 2);

        errors.clear("password");
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_field_errors_into_app_error() {
        let mut errors = FieldErrors::for_fields(&["email"]);
        errors.set("email", "Invalid email format");

        let err: AppError = errors.into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details["fields"]["email"], "Invalid email format");
    }

    #[test]
    fn test_form_defaults_missing_fields() {
        let form: SignUpForm = serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();
        assert_eq!(form.email, "a@b.co");
        assert!(form.full_name.is_empty());
        assert!(form.confirm_password.is_empty());

        let form: CardForm =
            serde_json::from_str(r#"{"cardholderName":"Ann","cardNumber":"4242"}"#).unwrap();
        assert_eq!(form.cardholder_name, "Ann");
        assert!(form.cvv.is_empty());
    }
}
