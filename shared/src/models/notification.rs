//! Notification Model

use serde::{Deserialize, Serialize};

/// Entry in the header notification menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    /// Relative time as displayed ("5 minutes ago")
    pub time: String,
    pub read: bool,
}
