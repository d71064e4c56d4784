//! Overview Models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AppError;

/// Daily call-volume data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallDataPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub calls: u32,
    pub minutes: u32,
    pub orders: u32,
    pub satisfaction: f64,
}

/// Time-range selector on the overview screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6m")]
    SixMonths,
}

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::SevenDays => "Last 7 days",
            TimeRange::OneMonth => "Last month",
            TimeRange::ThreeMonths => "Last 3 months",
            TimeRange::SixMonths => "Last 6 months",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7d",
            TimeRange::OneMonth => "1m",
            TimeRange::ThreeMonths => "3m",
            TimeRange::SixMonths => "6m",
        }
    }
}

impl FromStr for TimeRange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(TimeRange::SevenDays),
            "1m" => Ok(TimeRange::OneMonth),
            "3m" => Ok(TimeRange::ThreeMonths),
            "6m" => Ok(TimeRange::SixMonths),
            other => Err(AppError::invalid_request(format!("Unknown time range: {other}"))
                .with_detail("range", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_default_and_serde() {
        assert_eq!(TimeRange::default(), TimeRange::SixMonths);
        assert_eq!(serde_json::to_string(&TimeRange::SevenDays).unwrap(), "\"7d\"");
        let range: TimeRange = serde_json::from_str("\"3m\"").unwrap();
        assert_eq!(range, TimeRange::ThreeMonths);
        assert_eq!(range.label(), "Last 3 months");
    }

    #[test]
    fn test_time_range_from_str() {
        assert_eq!("1m".parse::<TimeRange>().unwrap(), TimeRange::OneMonth);
        assert_eq!(TimeRange::SevenDays.as_str().parse::<TimeRange>().unwrap(), TimeRange::SevenDays);
        let err = "2w".parse::<TimeRange>().unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InvalidRequest);
    }
}
