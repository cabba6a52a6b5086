use crate::models::{NormalizedEntry, ReportDay};
use std::collections::HashMap;

/// task_id → weekday → summed duration in milliseconds.
///
/// Weekdays without entries have no key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayBuckets {
    inner: HashMap<String, HashMap<ReportDay, i64>>,
}

impl DayBuckets {
    pub fn add(&mut self, task_id: &str, day: ReportDay, duration_ms: i64) {
        *self
            .inner
            .entry(task_id.to_string())
            .or_default()
            .entry(day)
            .or_insert(0) += duration_ms;
    }

    pub fn days(&self, task_id: &str) -> Option<&HashMap<ReportDay, i64>> {
        self.inner.get(task_id)
    }

    pub fn get(&self, task_id: &str, day: ReportDay) -> Option<i64> {
        self.days(task_id).and_then(|d| d.get(&day).copied())
    }

    /// Sum of all buckets of one task
    pub fn task_total(&self, task_id: &str) -> i64 {
        self.days(task_id).map(|d| d.values().sum()).unwrap_or(0)
    }

    pub fn task_count(&self) -> usize {
        self.inner.len()
    }
}

/// Group entries by (task, weekday) and sum their durations.
pub fn aggregate(entries: &[NormalizedEntry]) -> DayBuckets {
    let mut buckets = DayBuckets::default();
    for e in entries {
        buckets.add(&e.task_id, e.weekday, e.duration_ms);
    }
    buckets
}
