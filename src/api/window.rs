use crate::utils::date::utc_midnight_epoch;
use chrono::{FixedOffset, NaiveDate};

const LAST_SECOND_OF_DAY: i64 = 86_399;

/// Millisecond epoch bounds used to query time entries.
///
/// Both dates are taken as whole days of the reporting timezone: the start is
/// local midnight of the start date, the end the last second of the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl EntryWindow {
    pub fn for_dates(start: NaiveDate, end: NaiveDate, tz: FixedOffset) -> Self {
        let offset = tz.local_minus_utc() as i64;
        let start_ts = utc_midnight_epoch(start);
        let end_ts = utc_midnight_epoch(end);

        Self {
            start_ms: (start_ts - offset) * 1000,
            end_ms: (end_ts + LAST_SECOND_OF_DAY) * 1000 - offset * 1000,
        }
    }
}
