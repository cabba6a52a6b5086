// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use json_csv::{export_csv, export_json};
pub use xlsx::{export_xlsx, xlsx_bytes};

use crate::core::WeeklyReport;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Report file name, e.g. `AB12_Jan 06_to_Jan 12_2025.xlsx`
    pub fn file_name(&self, report: &WeeklyReport) -> String {
        format!("{}.{}", report.request().file_stem(), self.as_str())
    }
}

/// Write the report in the requested format.
pub fn write_report(report: &WeeklyReport, format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Xlsx => export_xlsx(&report.table, path),
        ExportFormat::Csv => export_csv(&report.table, path),
        ExportFormat::Json => export_json(report, path),
    }
}
