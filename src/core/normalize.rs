use crate::errors::{AppError, AppResult};
use crate::models::{NormalizedEntry, RawTimeEntry, ReportDay, SENTINEL};
use chrono::{DateTime, Datelike, FixedOffset};

/// Fixed offset of the reporting timezone, e.g. 330 minutes for UTC+5:30.
pub fn reporting_offset(minutes: i32) -> AppResult<FixedOffset> {
    FixedOffset::east_opt(minutes * 60)
        .ok_or_else(|| AppError::Config(format!("invalid UTC offset: {minutes} minutes")))
}

fn or_sentinel(v: &Option<String>) -> String {
    match v {
        Some(s) if !s.is_empty() => s.clone(),
        _ => SENTINEL.to_string(),
    }
}

/// Normalize a single entry. `position` is only used for error reporting.
///
/// The calendar date is taken in UTC while the weekday is taken in the
/// reporting timezone. Only the weekday drives bucketing.
pub fn normalize_entry(
    raw: &RawTimeEntry,
    position: usize,
    tz: FixedOffset,
) -> AppResult<NormalizedEntry> {
    let duration_ms: i64 = raw
        .duration_ms
        .trim()
        .parse()
        .map_err(|_| AppError::DataFormat {
            position,
            value: raw.duration_ms.clone(),
        })?;

    let start = DateTime::from_timestamp(raw.start_epoch_seconds, 0).ok_or_else(|| {
        AppError::InvalidTimestamp {
            position,
            value: raw.start_epoch_seconds.to_string(),
        }
    })?;

    Ok(NormalizedEntry {
        task_id: or_sentinel(&raw.task_id),
        task_name: or_sentinel(&raw.task_name),
        task_status: or_sentinel(&raw.task_status),
        duration_ms,
        calendar_date: start.date_naive(),
        weekday: ReportDay::from_weekday(start.with_timezone(&tz).weekday()),
    })
}

/// Normalize a whole batch. The first malformed entry aborts the batch: no
/// partial report is built from silently corrected data.
pub fn normalize_entries(
    raws: &[RawTimeEntry],
    tz: FixedOffset,
) -> AppResult<Vec<NormalizedEntry>> {
    raws.iter()
        .enumerate()
        .map(|(i, raw)| normalize_entry(raw, i + 1, tz))
        .collect()
}
