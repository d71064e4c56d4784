use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::screen::MountContext;
use crate::fixtures;
use crate::metrics::satisfaction_level;
use shared::error::{AppError, AppResult};
use shared::models::{CallRecord, SatisfactionLevel};

/// Format of [`CallRecord::date`]
const RECORD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Accepted shapes for the `start` / `end` query values
const FILTER_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Raw query string of `GET /recordings`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordingsQuery {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingFilter {
    pub phone: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl RecordingFilter {
    pub fn from_query(query: &RecordingsQuery) -> AppResult<Self> {
        Ok(Self {
            phone: query.phone.clone().unwrap_or_default(),
            start: parse_bound("start", query.start.as_deref())?,
            end: parse_bound("end", query.end.as_deref())?,
        })
    }

    /// Phone is a case-insensitive substring; both bounds are inclusive
    pub fn matches(&self, record: &CallRecord) -> bool {
        if !self.phone.is_empty()
            && !record
                .from
                .to_lowercase()
                .contains(&self.phone.to_lowercase())
        {
            return false;
        }
        if self.start.is_none() && self.end.is_none() {
            return true;
        }

        // An unreadable record date never satisfies a date bound
        let Ok(date) = NaiveDateTime::parse_from_str(&record.date, RECORD_DATE_FORMAT) else {
            return false;
        };
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Empty means unset. A bare date means midnight.
fn parse_bound(name: &str, value: Option<&str>) -> AppResult<Option<NaiveDateTime>> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    for format in FILTER_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(Some(parsed));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Some(date.and_time(chrono::NaiveTime::MIN)));
    }

    Err(
        AppError::invalid_request(format!("Invalid {name} date: {value}"))
            .with_detail("field", name)
            .with_detail("value", value),
    )
}

#[derive(Debug, Clone)]
pub struct RecordingsScreen {
    pub records: Vec<CallRecord>,
    pub filter: RecordingFilter,
    pub selected: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecordView {
    #[serde(flatten)]
    pub record: CallRecord,
    pub satisfaction_level: SatisfactionLevel,
}

impl From<&CallRecord> for CallRecordView {
    fn from(record: &CallRecord) -> Self {
        Self {
            record: record.clone(),
            satisfaction_level: satisfaction_level(record.satisfaction),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordingsView {
    pub filter: RecordingFilter,
    pub calls: Vec<CallRecordView>,
    pub selected: Option<CallRecordView>,
}

impl RecordingsScreen {
    pub fn new(_ctx: &MountContext) -> Self {
        Self {
            records: fixtures::call_records(),
            filter: RecordingFilter::default(),
            selected: None,
        }
    }

    pub fn set_filter(&mut self, filter: RecordingFilter) {
        self.filter = filter;
    }

    pub fn filtered(&self) -> impl Iterator<Item = &CallRecord> {
        self.records.iter().filter(|r| self.filter.matches(r))
    }

    /// Open the detail dialog
    pub fn select(&mut self, id: i64) -> AppResult<CallRecordView> {
        let record = self
            .records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(format!("Call {id}")))?;
        self.selected = Some(id);
        Ok(record.into())
    }

    pub fn view(&self) -> RecordingsView {
        RecordingsView {
            filter: self.filter.clone(),
            calls: self.filtered().map(CallRecordView::from).collect(),
            selected: self
                .selected
                .and_then(|id| self.records.iter().find(|r| r.id == id))
                .map(CallRecordView::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    fn screen() -> RecordingsScreen {
        RecordingsScreen::new(&MountContext::default())
    }

    fn query(phone: Option<&str>, start: Option<&str>, end: Option<&str>) -> RecordingsQuery {
        RecordingsQuery {
            phone: phone.map(String::from),
            start: start.map(String::from),
            end: end.map(String::from),
        }
    }

    fn ids(screen: &RecordingsScreen) -> Vec<i64> {
        screen.filtered().map(|r| r.id).collect()
    }

    #[test]
    fn test_no_filter_shows_everything() {
        assert_eq!(ids(&screen()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_phone_substring() {
        let mut screen = screen();
        screen.set_filter(RecordingFilter::from_query(&query(Some("234"), None, None)).unwrap());
        assert_eq!(ids(&screen), vec![2]);

        screen.set_filter(RecordingFilter::from_query(&query(Some("(555)"), None, None)).unwrap());
        assert_eq!(ids(&screen).len(), 4);
    }

    #[test]
    fn test_date_bounds() {
        let mut screen = screen();
        let filter =
            RecordingFilter::from_query(&query(None, Some("2024-03-15T15:00"), None)).unwrap();
        screen.set_filter(filter);
        assert_eq!(ids(&screen), vec![2, 3, 4]);

        let filter = RecordingFilter::from_query(&query(
            None,
            Some("2024-03-15 15:00"),
            Some("2024-03-15 16:15"),
        ))
        .unwrap();
        screen.set_filter(filter);
        assert_eq!(ids(&screen), vec![2, 3]);

        // A bare end date is midnight, so that day's calls are excluded
        let filter = RecordingFilter::from_query(&query(None, None, Some("2024-03-15"))).unwrap();
        screen.set_filter(filter);
        assert!(ids(&screen).is_empty());
    }

    #[test]
    fn test_invalid_bound_rejected() {
        let err = RecordingFilter::from_query(&query(None, Some("yesterday"), None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);

        let filter = RecordingFilter::from_query(&query(Some(""), Some(""), Some("  "))).unwrap();
        assert_eq!(filter, RecordingFilter::default());
    }

    #[test]
    fn test_select() {
        let mut screen = screen();
        let view = screen.select(1).unwrap();
        assert_eq!(view.satisfaction_level, SatisfactionLevel::High);
        assert_eq!(screen.selected, Some(1));
        assert_eq!(screen.view().selected.map(|s| s.record.id), Some(1));

        let err = screen.select(99).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(screen.selected, Some(1));
    }
}
