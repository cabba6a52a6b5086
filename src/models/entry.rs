use crate::models::ReportDay;
use chrono::NaiveDate;
use serde::Serialize;

/// Placeholder used for task metadata an entry does not carry.
pub const SENTINEL: &str = "0";

/// A time entry as delivered by the time-tracking service.
///
/// Task metadata is optional (entries logged without a task, or with a
/// malformed task object). The duration is kept in its raw textual form and
/// validated by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawTimeEntry {
    pub task_id: Option<String>,
    pub task_name: Option<String>,
    pub task_status: Option<String>,
    pub duration_ms: String,
    pub start_epoch_seconds: i64,
}

impl RawTimeEntry {
    /// Entry attached to a task.
    pub fn for_task(
        task_id: &str,
        task_name: &str,
        task_status: &str,
        duration_ms: i64,
        start_epoch_seconds: i64,
    ) -> Self {
        Self {
            task_id: Some(task_id.to_string()),
            task_name: Some(task_name.to_string()),
            task_status: Some(task_status.to_string()),
            duration_ms: duration_ms.to_string(),
            start_epoch_seconds,
        }
    }
}

/// Entry after normalization: sentinel-filled metadata, parsed duration and
/// the weekday bucket it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedEntry {
    pub task_id: String,
    pub task_name: String,
    pub task_status: String,
    pub duration_ms: i64,
    /// UTC calendar date of the entry start
    pub calendar_date: NaiveDate,
    /// Weekday of the entry start in the reporting timezone
    pub weekday: ReportDay,
}
