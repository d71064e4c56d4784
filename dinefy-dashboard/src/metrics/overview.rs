//! Overview statistics

use serde::Serialize;
use shared::models::{CallDataPoint, SatisfactionLevel};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_calls: u32,
    pub total_minutes: u32,
    pub total_orders: u32,
    /// Mean of the daily scores, one decimal
    pub average_satisfaction: f64,
}

pub fn overview_stats(series: &[CallDataPoint]) -> OverviewStats {
    let average_satisfaction = if series.is_empty() {
        0.0
    } else {
        let sum: f64 = series.iter().map(|p| p.satisfaction).sum();
        round_one(sum / series.len() as f64)
    };

    OverviewStats {
        total_calls: series.iter().map(|p| p.calls).sum(),
        total_minutes: series.iter().map(|p| p.minutes).sum(),
        total_orders: series.iter().map(|p| p.orders).sum(),
        average_satisfaction,
    }
}

/// `≥ 4` high, `≥ 3` medium, otherwise low
pub fn satisfaction_level(score: f64) -> SatisfactionLevel {
    if score >= 4.0 {
        SatisfactionLevel::High
    } else if score >= 3.0 {
        SatisfactionLevel::Medium
    } else {
        SatisfactionLevel::Low
    }
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
