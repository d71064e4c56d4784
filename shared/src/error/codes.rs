//! Unified error codes for the Dinefy dashboard
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Form submission errors
//! - 3xxx: Integration errors
//! - 4xxx: Billing errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare `u16` so any front end can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// Viewer is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Viewer is already authenticated
    AlreadyAuthenticated = 1003,

    // ==================== 2xxx: Forms ====================
    /// A submission for this form is still running
    SubmissionInProgress = 2001,
    /// A single field failed a rule
    FieldInvalid = 2002,

    // ==================== 3xxx: Integrations ====================
    /// Connect attempted without an API key
    IntegrationApiKeyMissing = 3001,
    /// Operation requires a connected integration
    IntegrationNotConnected = 3002,
    /// Platform name is not one of the supported integrations
    UnknownPlatform = 3003,

    // ==================== 4xxx: Billing ====================
    /// Purchase amount buys no minutes
    PurchaseAmountInvalid = 4001,
    /// Card details incomplete
    PaymentMethodInvalid = 4002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Session store read or write failed
    StorageError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field missing",

            // Auth
            ErrorCode::NotAuthenticated => "Authentication required",
            ErrorCode::InvalidCredentials => "Invalid credentials",
            ErrorCode::AlreadyAuthenticated => "Already signed in",

            // Forms
            ErrorCode::SubmissionInProgress => "A submission is already in progress",
            ErrorCode::FieldInvalid => "Field is invalid",

            // Integrations
            ErrorCode::IntegrationApiKeyMissing => "Please enter an API key",
            ErrorCode::IntegrationNotConnected => "Integration is not connected",
            ErrorCode::UnknownPlatform => "Unknown integration platform",

            // Billing
            ErrorCode::PurchaseAmountInvalid => "Amount must purchase at least one minute",
            ErrorCode::PaymentMethodInvalid => "Invalid payment method",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageError => "Storage error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::AlreadyAuthenticated),

            2001 => Ok(ErrorCode::SubmissionInProgress),
            2002 => Ok(ErrorCode::FieldInvalid),

            3001 => Ok(ErrorCode::IntegrationApiKeyMissing),
            3002 => Ok(ErrorCode::IntegrationNotConnected),
            3003 => Ok(ErrorCode::UnknownPlatform),

            4001 => Ok(ErrorCode::PurchaseAmountInvalid),
            4002 => Ok(ErrorCode::PaymentMethodInvalid),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 20] = [
        ErrorCode::Success,
        ErrorCode::Unknown,
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::InvalidRequest,
        ErrorCode::RequiredField,
        ErrorCode::NotAuthenticated,
        ErrorCode::InvalidCredentials,
        ErrorCode::AlreadyAuthenticated,
        ErrorCode::SubmissionInProgress,
        ErrorCode::FieldInvalid,
        ErrorCode::IntegrationApiKeyMissing,
        ErrorCode::IntegrationNotConnected,
        ErrorCode::UnknownPlatform,
        ErrorCode::PurchaseAmountInvalid,
        ErrorCode::PaymentMethodInvalid,
        ErrorCode::InternalError,
        ErrorCode::StorageError,
        ErrorCode::ConfigError,
    ];

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::SubmissionInProgress.code(), 2001);
        assert_eq!(ErrorCode::IntegrationNotConnected.code(), 3002);
        assert_eq!(ErrorCode::PurchaseAmountInvalid.code(), 4001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_matches_code() {
        for code in ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(6), Err(InvalidErrorCode(6)));
        assert_eq!(ErrorCode::try_from(8888), Err(InvalidErrorCode(8888)));
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::InvalidCredentials).unwrap();
        assert_eq!(json, "1002");

        let code: ErrorCode = serde_json::from_str("3001").unwrap();
        assert_eq!(code, ErrorCode::IntegrationApiKeyMissing);

        assert!(serde_json::from_str::<ErrorCode>("42").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NotAuthenticated.to_string(), "1001");
        assert_eq!(
            InvalidErrorCode(77).to_string(),
            "invalid error code: 77"
        );
    }
}
