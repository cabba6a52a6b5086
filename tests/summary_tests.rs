mod common;
use common::date;
use weeksheet::core::summary::{
    DAILY_TOTALS_LABEL, RANGE_TOTAL_CAPTION, WEEK_TOTAL_CAPTION,
};
use weeksheet::core::{ReportSpan, summarize};
use weeksheet::models::{ReportDay, TaskWeekRow};

fn row(task_id: &str, hours: &[(ReportDay, f64)]) -> TaskWeekRow {
    let mut r = TaskWeekRow::new(task_id, task_id, "open");
    for (day, h) in hours {
        r.hours.set(*day, *h);
    }
    r
}

fn week() -> ReportSpan {
    ReportSpan::new(date(2025, 1, 6), date(2025, 1, 12))
}

#[test]
fn test_row_totals_and_column_totals() {
    let mut rows = vec![
        row("T1", &[(ReportDay::Monday, 1.5), (ReportDay::Tuesday, 0.1)]),
        row("T2", &[(ReportDay::Saturday, 2.0), (ReportDay::Tuesday, 0.2)]),
    ];
    let summary = summarize(&mut rows, week());

    assert_eq!(rows[0].total_this_week, 1.6);
    assert_eq!(rows[1].total_this_week, 2.2);

    assert_eq!(summary.totals.label, DAILY_TOTALS_LABEL);
    assert_eq!(summary.totals.hours.get(ReportDay::Monday), 1.5);
    assert_eq!(summary.totals.hours.get(ReportDay::Saturday), 2.0);
    assert_eq!(summary.totals.hours.get(ReportDay::Tuesday), 0.3);
    assert_eq!(summary.totals.hours.get(ReportDay::Friday), 0.0);

    assert_eq!(summary.grand.grand_total, 3.8);
}

#[test]
fn test_grand_total_matches_sum_of_row_totals() {
    let mut rows: Vec<TaskWeekRow> = (0..10)
        .map(|i| {
            let h = 0.01 * (i as f64 + 1.0) + 0.33;
            row(
                &format!("T{i}"),
                &[(ReportDay::ALL[i % 7], h), (ReportDay::ALL[(i + 3) % 7], h * 2.0)],
            )
        })
        .collect();
    let summary = summarize(&mut rows, week());

    let by_rows: f64 = rows.iter().map(|r| r.total_this_week).sum();
    let by_columns: f64 = summary.totals.hours.total();

    assert!((summary.grand.grand_total - by_rows).abs() < 1e-6);
    assert!((summary.grand.grand_total - by_columns).abs() < 1e-6);

    for day in ReportDay::ALL {
        let column: f64 = rows.iter().map(|r| r.hours.get(day)).sum();
        assert!((summary.totals.hours.get(day) - column).abs() < 1e-6);
    }
}

#[test]
fn test_seven_day_span_is_weekly() {
    let span = week();
    assert_eq!(span.days(), 7);
    assert!(span.is_weekly());

    let summary = summarize(&mut [], span);
    assert_eq!(summary.grand.caption, WEEK_TOTAL_CAPTION);
    assert_eq!(
        summary.grand.range_label,
        "Week #2 - Jan 06, 2025 - Jan 12, 2025"
    );
    assert_eq!(summary.grand.grand_total, 0.0);
}

#[test]
fn test_eight_day_span_is_a_range() {
    let span = ReportSpan::new(date(2025, 1, 6), date(2025, 1, 13));
    assert_eq!(span.days(), 8);
    assert!(!span.is_weekly());

    let summary = summarize(&mut [], span);
    assert_eq!(summary.grand.caption, RANGE_TOTAL_CAPTION);
    assert_eq!(summary.grand.range_label, "Jan 06, 2025 - Jan 13, 2025");
}

#[test]
fn test_single_day_is_weekly() {
    let span = ReportSpan::new(date(2025, 3, 3), date(2025, 3, 3));
    assert_eq!(span.days(), 1);
    assert_eq!(span.label(), "Week #10 - Mar 03, 2025 - Mar 03, 2025");
}

#[test]
fn test_week_label_uses_start_year_and_end_week() {
    // ISO week 1 of 2025 starts on Monday Dec 30, 2024
    let span = ReportSpan::new(date(2024, 12, 30), date(2025, 1, 5));
    assert_eq!(span.label(), "Week #1 - Dec 30, 2024 - Jan 05, 2024");
}
