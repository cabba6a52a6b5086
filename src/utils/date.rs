//! Date utilities: parsing CLI dates, report labels and span arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveTime};

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse a start/end pair and make sure the range is not reversed.
pub fn parse_range(start: &str, end: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let s = parse_date(start)?;
    let e = parse_date(end)?;

    if e < s {
        return Err(AppError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok((s, e))
}

/// "Jan 06" style label used in sheet captions and file names.
pub fn month_day(d: NaiveDate) -> String {
    d.format("%b %d").to_string()
}

/// Number of calendar days covered by an inclusive range.
pub fn span_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

pub fn iso_week(d: NaiveDate) -> u32 {
    d.iso_week().week()
}

/// Midnight UTC of `d` as epoch seconds.
pub fn utc_midnight_epoch(d: NaiveDate) -> i64 {
    d.and_time(NaiveTime::MIN).and_utc().timestamp()
}
