//! Call Record Model

use serde::{Deserialize, Serialize};

/// Outcome of one handled call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Completed,
    Failed,
    Warning,
}

/// Coarse bucket for a 0..=5 satisfaction score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SatisfactionLevel {
    High,
    Medium,
    Low,
}

/// One historical call (read-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    pub id: i64,
    pub status: CallStatus,
    /// Caller phone number as displayed
    pub from: String,
    /// `m:ss`
    pub duration: String,
    /// `YYYY-MM-DD HH:MM`
    pub date: String,
    pub transcript: String,
    /// Recording file name
    pub audio: String,
    pub satisfaction: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_status_serde() {
        assert_eq!(
            serde_json::to_string(&CallStatus::Warning).unwrap(),
            "\"warning\""
        );
        let status: CallStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(status, CallStatus::Failed);
    }
}
