//! Wall-clock helpers

use chrono::{NaiveDateTime, Timelike};

/// Local time, truncated to whole seconds (the resolution of "Last Sync")
pub fn now_local() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_local_has_no_fraction() {
        assert_eq!(now_local().nanosecond(), 0);
    }
}
