use crate::api::{EntryWindow, MemberDirectory, TaskDetailProvider, TimeEntrySource};
use crate::config::Config;
use crate::core::assemble::{ReportTable, assemble};
use crate::core::enrich::{Diagnostic, enrich_rows};
use crate::core::normalize::{normalize_entries, reporting_offset};
use crate::core::summary::{ReportSpan, Summary, summarize};
use crate::core::{aggregate, build_rows};
use crate::errors::{AppError, AppResult};
use crate::models::{RawTimeEntry, TaskWeekRow};
use crate::utils::date::month_day;
use chrono::{Datelike, FixedOffset, NaiveDate};
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// What the user asked for: one employee over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub employee_code: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportRequest {
    pub fn new(employee_code: &str, start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        let code = employee_code.trim().to_uppercase();
        if code.is_empty() {
            return Err(AppError::UnknownEmployee(code));
        }
        if end < start {
            return Err(AppError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            employee_code: code,
            start,
            end,
        })
    }

    pub fn span(&self) -> ReportSpan {
        ReportSpan::new(self.start, self.end)
    }

    pub fn start_fmt(&self) -> String {
        month_day(self.start)
    }

    pub fn end_fmt(&self) -> String {
        month_day(self.end)
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// `<CODE>_<Mon DD>_to_<Mon DD>_<year>`; the sink adds the extension.
    pub fn file_stem(&self) -> String {
        format!(
            "{}_{}_to_{}_{}",
            self.employee_code,
            self.start_fmt(),
            self.end_fmt(),
            self.year()
        )
    }
}

/// Engine knobs taken from the configuration.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub reporting_offset: FixedOffset,
    pub max_concurrency: usize,
    pub link_base: String,
}

impl ReportSettings {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            reporting_offset: reporting_offset(cfg.reporting_utc_offset_minutes)?,
            max_concurrency: cfg.max_concurrent_requests,
            link_base: cfg.task_link_base.clone(),
        })
    }
}

/// The finished report.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    pub employee_code: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub rows: Vec<TaskWeekRow>,
    pub custom_columns: Vec<String>,
    pub summary: Summary,
    pub table: ReportTable,
    pub diagnostics: Vec<Diagnostic>,
}

impl WeeklyReport {
    pub fn request(&self) -> ReportRequest {
        ReportRequest {
            employee_code: self.employee_code.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

/// Runs the pipeline against the external collaborators.
pub struct ReportEngine<'a> {
    settings: ReportSettings,
    members: &'a dyn MemberDirectory,
    entries: &'a dyn TimeEntrySource,
    tasks: &'a dyn TaskDetailProvider,
}

impl<'a> ReportEngine<'a> {
    pub fn new(
        settings: ReportSettings,
        members: &'a dyn MemberDirectory,
        entries: &'a dyn TimeEntrySource,
        tasks: &'a dyn TaskDetailProvider,
    ) -> Self {
        Self {
            settings,
            members,
            entries,
            tasks,
        }
    }

    pub fn generate(&self, request: &ReportRequest) -> AppResult<WeeklyReport> {
        let started = Instant::now();

        let assignee = self
            .members
            .resolve_member(&request.employee_code)?
            .ok_or_else(|| AppError::UnknownEmployee(request.employee_code.clone()))?;

        let window = EntryWindow::for_dates(request.start, request.end, self.settings.reporting_offset);
        let raws = self.entries.fetch_entries(&assignee, &window)?;

        let report = build_report(&raws, request, &self.settings, self.tasks)?;

        info!(
            "Processing time: {:.2} seconds",
            started.elapsed().as_secs_f64()
        );
        Ok(report)
    }
}

/// Pipeline from fetched entries to the finished table.
pub fn build_report(
    raws: &[RawTimeEntry],
    request: &ReportRequest,
    settings: &ReportSettings,
    tasks: &dyn TaskDetailProvider,
) -> AppResult<WeeklyReport> {
    if raws.is_empty() {
        return Err(AppError::NoEntries);
    }

    let entries = normalize_entries(raws, settings.reporting_offset)?;
    let buckets = aggregate(&entries);
    let mut rows = build_rows(&entries, &buckets);
    info!(
        "Bucketed {} entries into {} task rows",
        entries.len(),
        rows.len()
    );

    let enrichment = enrich_rows(&mut rows, tasks, settings.max_concurrency)?;
    let summary = summarize(&mut rows, request.span());
    let table = assemble(&rows, &enrichment.custom_columns, &summary, &settings.link_base);

    Ok(WeeklyReport {
        employee_code: request.employee_code.clone(),
        start: request.start,
        end: request.end,
        rows,
        custom_columns: enrichment.custom_columns,
        summary,
        table,
        diagnostics: enrichment.diagnostics,
    })
}
