//! Password strength meter shown under the sign-up form

use serde::Serialize;

const SPECIAL_CHARS: &str = "!@#$%^&*";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    /// 0..=4
    pub score: u8,
    pub label: &'static str,
    /// Hex color; `None` at score 0
    pub color: Option<&'static str>,
    /// `score / 4 × 100`
    pub percent: u8,
}

/// One point each for: length ≥ 8, an uppercase letter, a digit, a special
/// character from `!@#$%^&*`
pub fn password_strength(password: &str) -> PasswordStrength {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    ];
    let score = checks.iter().filter(|passed| **passed).count() as u8;

    let (label, color) = match score {
        0 => ("Weak", None),
        1 => ("Weak", Some("#f44336")),
        2 => ("Fair", Some("#ff9800")),
        3 => ("Good", Some("#2196f3")),
        _ => ("Strong", Some("#4caf50")),
    };

    PasswordStrength {
        score,
        label,
        color,
        percent: score * 25,
    }
}
