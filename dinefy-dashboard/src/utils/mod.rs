//! Utilities
//!
//! - [`logger`] - tracing subscriber setup
//! - [`time`] - wall-clock helpers

pub mod logger;
pub mod time;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
