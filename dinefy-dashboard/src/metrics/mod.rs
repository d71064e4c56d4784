//! Derived metrics
//!
//! Pure functions over the static datasets and form input. Recomputed on
//! every read, never stored.

pub mod billing;
pub mod overview;
pub mod password;

pub use billing::{
    FREE_MINUTES, RATE_PER_MINUTE, parse_amount, purchased_minutes, remaining_minutes,
    total_minutes, usage_percentage, usage_progress,
};
pub use overview::{OverviewStats, overview_stats, satisfaction_level};
pub use password::{PasswordStrength, password_strength};
