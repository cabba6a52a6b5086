//! Report engine: the pipeline turning raw time entries into the weekly table.

pub mod aggregate;
pub mod assemble;
pub mod enrich;
pub mod normalize;
pub mod pivot;
pub mod report;
pub mod summary;

pub use aggregate::{DayBuckets, aggregate};
pub use assemble::{Cell, Hyperlink, ReportTable, assemble};
pub use enrich::{Diagnostic, Enrichment, enrich_rows, format_lifetime, resolve_custom_fields};
pub use normalize::{normalize_entries, normalize_entry, reporting_offset};
pub use pivot::build_rows;
pub use report::{ReportEngine, ReportRequest, ReportSettings, WeeklyReport, build_report};
pub use summary::{ReportSpan, Summary, summarize};
