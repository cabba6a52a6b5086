use crate::models::{GrandTotalRow, ReportDay, TaskWeekRow, TotalsRow, WeekHours};
use crate::utils::date::{iso_week, month_day, span_days};
use crate::utils::round2;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const DAILY_TOTALS_LABEL: &str = "Daily Totals ->";
pub const WEEK_TOTAL_CAPTION: &str = "Week's total =";
pub const RANGE_TOTAL_CAPTION: &str = "Total Hours Tracked =";

/// Longest span (in days) still labelled as a single week.
pub const WEEK_SPAN_DAYS: i64 = 7;

/// Inclusive reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn days(&self) -> i64 {
        span_days(self.start, self.end)
    }

    pub fn is_weekly(&self) -> bool {
        self.days() <= WEEK_SPAN_DAYS
    }

    /// "Jan 06, 2025 - Jan 12, 2025", prefixed with the ISO week of the end
    /// date for weekly reports. Both halves use the start year.
    pub fn label(&self) -> String {
        let year = self.start.year();
        let range = format!(
            "{}, {year} - {}, {year}",
            month_day(self.start),
            month_day(self.end)
        );

        if self.is_weekly() {
            format!("Week #{} - {range}", iso_week(self.end))
        } else {
            range
        }
    }

    pub fn caption(&self) -> &'static str {
        if self.is_weekly() {
            WEEK_TOTAL_CAPTION
        } else {
            RANGE_TOTAL_CAPTION
        }
    }
}

/// The two synthetic rows closing the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub totals: TotalsRow,
    pub grand: GrandTotalRow,
}

/// Fill `total_this_week` on every row and build the totals rows.
pub fn summarize(rows: &mut [TaskWeekRow], span: ReportSpan) -> Summary {
    let mut totals = WeekHours::default();

    for row in rows.iter_mut() {
        row.total_this_week = round2(row.hours.total());
        for (day, hours) in row.hours.iter() {
            totals.add(day, hours);
        }
    }

    for day in ReportDay::ALL {
        totals.set(day, round2(totals.get(day)));
    }

    Summary {
        grand: GrandTotalRow {
            range_label: span.label(),
            caption: span.caption(),
            grand_total: round2(totals.total()),
        },
        totals: TotalsRow {
            label: DAILY_TOTALS_LABEL,
            hours: totals,
        },
    }
}
