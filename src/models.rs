pub mod entry;
pub mod report_day;
pub mod row;
pub mod task;

pub use entry::{NormalizedEntry, RawTimeEntry, SENTINEL};
pub use report_day::ReportDay;
pub use row::{GrandTotalRow, TaskWeekRow, TotalsRow, WeekHours};
pub use task::{CustomField, TaskDetail};
