//! Shared types for the Dinefy dashboard
//!
//! Error codes and the response envelope, form payloads with their field
//! error maps, and the dashboard's data models.

pub mod error;
pub mod forms;
pub mod models;

// Re-exports
pub use axum::Json;
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use forms::FieldErrors;
pub use http;
pub use serde::{Deserialize, Serialize};
