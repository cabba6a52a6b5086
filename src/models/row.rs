use crate::models::ReportDay;
use serde::Serialize;
use std::collections::HashMap;

/// Hours for each of the seven report days, indexed by [`ReportDay`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WeekHours([f64; 7]);

impl WeekHours {
    pub fn get(&self, day: ReportDay) -> f64 {
        self.0[day.index()]
    }

    pub fn set(&mut self, day: ReportDay, hours: f64) {
        self.0[day.index()] = hours;
    }

    pub fn add(&mut self, day: ReportDay, hours: f64) {
        self.0[day.index()] += hours;
    }

    /// (day, hours) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (ReportDay, f64)> + '_ {
        ReportDay::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// One row of the report: a task and its hours for the period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskWeekRow {
    pub task_id: String,
    pub task_name: String,
    pub task_status: String,
    pub hours: WeekHours,
    /// Lifetime tracked time as "Hh Mm"; `None` when the task details could
    /// not be fetched.
    pub lifetime_tracked: Option<String>,
    /// Resolved drop-down custom fields (field name → option name)
    pub custom_fields: HashMap<String, String>,
    pub total_this_week: f64,
}

impl TaskWeekRow {
    pub fn new(task_id: &str, task_name: &str, task_status: &str) -> Self {
        Self {
            task_id: task_id.to_string(),
            task_name: task_name.to_string(),
            task_status: task_status.to_string(),
            hours: WeekHours::default(),
            lifetime_tracked: None,
            custom_fields: HashMap::new(),
            total_this_week: 0.0,
        }
    }
}

/// Column totals appended after the task rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsRow {
    pub label: &'static str,
    pub hours: WeekHours,
}

/// Closing row: human readable period label and the grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrandTotalRow {
    pub range_label: String,
    pub caption: &'static str,
    pub grand_total: f64,
}
