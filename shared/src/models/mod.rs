//! Data models
//!
//! Shared between the dashboard service and any front end (via API).
//! All datasets behind these types are static; nothing here does I/O.

pub mod billing;
pub mod call_record;
pub mod integration;
pub mod notification;
pub mod overview;
pub mod settings;

// Re-exports
pub use billing::*;
pub use call_record::*;
pub use integration::*;
pub use notification::*;
pub use overview::*;
pub use settings::*;
