use crate::core::aggregate::DayBuckets;
use crate::models::{NormalizedEntry, TaskWeekRow};
use crate::utils::ms_to_hours;
use std::collections::HashSet;

/// One row per distinct task, in first-seen order.
///
/// Name and status come from the first entry of each task. Every day starts at
/// 0.0 and gets the bucketed milliseconds converted to hours (2 decimals).
pub fn build_rows(entries: &[NormalizedEntry], buckets: &DayBuckets) -> Vec<TaskWeekRow> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut rows = Vec::new();

    for e in entries {
        if !seen.insert(e.task_id.as_str()) {
            continue;
        }

        let mut row = TaskWeekRow::new(&e.task_id, &e.task_name, &e.task_status);
        if let Some(days) = buckets.days(&e.task_id) {
            for (day, ms) in days {
                row.hours.set(*day, ms_to_hours(*ms));
            }
        }
        rows.push(row);
    }

    rows
}
