//! Integration Status Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Timestamp format shown in the "Last Sync" field
pub const LAST_SYNC_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// External point-of-sale platforms the assistant can sync with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Clover,
    Shopify,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Clover, Platform::Shopify];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Clover => "clover",
            Platform::Shopify => "shopify",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clover" => Ok(Platform::Clover),
            "shopify" => Ok(Platform::Shopify),
            other => Err(AppError::new(ErrorCode::UnknownPlatform).with_detail("platform", other)),
        }
    }
}

/// Last successful sync: either `"Never"` or a local timestamp string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastSync {
    #[default]
    Never,
    At(NaiveDateTime),
}

impl fmt::Display for LastSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastSync::Never => f.write_str("Never"),
            LastSync::At(ts) => write!(f, "{}", ts.format(LAST_SYNC_FORMAT)),
        }
    }
}

impl Serialize for LastSync {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LastSync {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == "Never" {
            return Ok(LastSync::Never);
        }
        NaiveDateTime::parse_from_str(&raw, LAST_SYNC_FORMAT)
            .map(LastSync::At)
            .map_err(serde::de::Error::custom)
    }
}

/// Connection state for one platform
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationStatus {
    pub connected: bool,
    pub last_sync: LastSync,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntegrationStatus {
    /// Initial state: disconnected, never synced
    pub fn disconnected() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_platform_from_str() {
        assert_eq!("clover".parse::<Platform>().unwrap(), Platform::Clover);
        assert_eq!("shopify".parse::<Platform>().unwrap(), Platform::Shopify);

        let err = "square".parse::<Platform>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownPlatform);
    }

    #[test]
    fn test_last_sync_serde() {
        assert_eq!(serde_json::to_string(&LastSync::Never).unwrap(), "\"Never\"");

        let ts = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap();
        let json = serde_json::to_string(&LastSync::At(ts)).unwrap();
        assert_eq!(json, "\"2024-03-15 14:30:05\"");

        let back: LastSync = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LastSync::At(ts));
        assert!(serde_json::from_str::<LastSync>("\"yesterday\"").is_err());
    }

    #[test]
    fn test_disconnected_status_json() {
        let json = serde_json::to_value(IntegrationStatus::disconnected()).unwrap();
        assert_eq!(json["connected"], false);
        assert_eq!(json["lastSync"], "Never");
        assert!(json.get("error").is_none());
    }
}
