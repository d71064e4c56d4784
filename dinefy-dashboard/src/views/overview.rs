use serde::Serialize;

use super::screen::MountContext;
use crate::fixtures;
use crate::metrics::{OverviewStats, overview_stats};
use shared::models::{CallDataPoint, TimeRange};

#[derive(Debug, Clone, Default)]
pub struct OverviewScreen {
    pub range: TimeRange,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    pub range: TimeRange,
    pub range_label: &'static str,
    pub stats: OverviewStats,
    pub series: Vec<CallDataPoint>,
}

impl OverviewScreen {
    pub fn new(_ctx: &MountContext) -> Self {
        Self::default()
    }

    /// The selector only changes the label; the dataset is the same fixture
    pub fn view(&self) -> OverviewView {
        let series = fixtures::call_series();
        OverviewView {
            range: self.range,
            range_label: self.range.label(),
            stats: overview_stats(&series),
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_uses_range() {
        let screen = OverviewScreen {
            range: TimeRange::SevenDays,
        };
        let view = screen.view();
        assert_eq!(view.range_label, "Last 7 days");
        assert_eq!(view.series.len(), 7);
        assert_eq!(view.stats.total_calls, 436);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["range"], "7d");
        assert_eq!(json["stats"]["totalOrders"], 75);
    }
}
