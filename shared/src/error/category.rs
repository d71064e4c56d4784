//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category, derived from the leading digit of the error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Form submission errors (2xxx)
    Form,
    /// Integration errors (3xxx)
    Integration,
    /// Billing errors (4xxx)
    Billing,
    /// System errors (9xxx and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Form,
            3000..4000 => Self::Integration,
            4000..5000 => Self::Billing,
            _ => Self::System,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Form => "form",
            Self::Integration => "integration",
            Self::Billing => "billing",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Form);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Integration);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Billing);
        assert_eq!(ErrorCategory::from_code(5000), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::InvalidCredentials.category(), ErrorCategory::Auth);
        assert_eq!(
            ErrorCode::SubmissionInProgress.category(),
            ErrorCategory::Form
        );
        assert_eq!(
            ErrorCode::IntegrationNotConnected.category(),
            ErrorCategory::Integration
        );
        assert_eq!(
            ErrorCode::PurchaseAmountInvalid.category(),
            ErrorCategory::Billing
        );
        assert_eq!(ErrorCode::StorageError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Integration).unwrap();
        assert_eq!(json, "\"integration\"");

        let category: ErrorCategory = serde_json::from_str("\"billing\"").unwrap();
        assert_eq!(category, ErrorCategory::Billing);
        assert_eq!(category.name(), "billing");
    }
}
