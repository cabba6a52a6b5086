use crate::core::summary::Summary;
use crate::models::{ReportDay, TaskWeekRow};
use serde::Serialize;

pub const COL_TASK_NAME: &str = "Task Name";
pub const COL_TASK_ID: &str = "Task ID";
pub const COL_TASK_STATUS: &str = "Task Status";
pub const COL_WEEK_TOTAL: &str = "Total Tracked this week in this task";
pub const COL_LIFETIME: &str = "Total Time tracked for this task till now (hrs)";

pub const TASK_NAME_COLUMN: usize = 0;
pub const TASK_ID_COLUMN: usize = 1;
pub const TASK_STATUS_COLUMN: usize = 2;
const FIRST_DAY_COLUMN: usize = 3;
pub const WEEK_TOTAL_COLUMN: usize = 10;
pub const LIFETIME_COLUMN: usize = 11;

/// A single sheet cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Blank,
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(s: &str) -> Self {
        Cell::Text(s.to_string())
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Blank => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Plain-text rendering (CSV, terminal preview)
    pub fn render(&self) -> String {
        match self {
            Cell::Blank => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(v) => format!("{v:.2}"),
        }
    }
}

/// Link attached to a Task ID cell. `row` is the 0-based data row (the header
/// is not counted).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hyperlink {
    pub row: usize,
    pub column: usize,
    pub url: String,
    pub text: String,
}

/// The finished report table handed to the spreadsheet sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub links: Vec<Hyperlink>,
}

impl ReportTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)
    }
}

/// Fixed leading columns followed by the custom-field columns.
pub fn column_names(custom_columns: &[String]) -> Vec<String> {
    let mut columns: Vec<String> = [COL_TASK_NAME, COL_TASK_ID, COL_TASK_STATUS]
        .iter()
        .map(|c| c.to_string())
        .collect();
    columns.extend(ReportDay::ALL.iter().map(|d| d.label().to_string()));
    columns.push(COL_WEEK_TOTAL.to_string());
    columns.push(COL_LIFETIME.to_string());
    columns.extend(custom_columns.iter().cloned());
    columns
}

/// Whether `name` is one of the fixed leading columns. Custom fields cannot
/// take these names.
pub fn is_fixed_column(name: &str) -> bool {
    [COL_TASK_NAME, COL_TASK_ID, COL_TASK_STATUS, COL_WEEK_TOTAL, COL_LIFETIME].contains(&name)
        || ReportDay::ALL.iter().any(|d| d.label() == name)
}

fn day_column(day: ReportDay) -> usize {
    FIRST_DAY_COLUMN + day.index()
}

fn task_cells(row: &TaskWeekRow, custom_columns: &[String], width: usize) -> Vec<Cell> {
    let mut cells = vec![Cell::Blank; width];
    cells[TASK_NAME_COLUMN] = Cell::text(&row.task_name);
    cells[TASK_ID_COLUMN] = Cell::text(&row.task_id);
    cells[TASK_STATUS_COLUMN] = Cell::text(&row.task_status);
    for (day, hours) in row.hours.iter() {
        cells[day_column(day)] = Cell::Number(hours);
    }
    cells[WEEK_TOTAL_COLUMN] = Cell::Number(row.total_this_week);
    if let Some(lifetime) = &row.lifetime_tracked {
        cells[LIFETIME_COLUMN] = Cell::text(lifetime);
    }
    for (i, name) in custom_columns.iter().enumerate() {
        if let Some(v) = row.custom_fields.get(name) {
            cells[LIFETIME_COLUMN + 1 + i] = Cell::text(v);
        }
    }
    cells
}

fn summary_cells(summary: &Summary, width: usize) -> [Vec<Cell>; 2] {
    let mut totals = vec![Cell::Blank; width];
    totals[TASK_STATUS_COLUMN] = Cell::text(summary.totals.label);
    for (day, hours) in summary.totals.hours.iter() {
        totals[day_column(day)] = Cell::Number(hours);
    }

    let mut grand = vec![Cell::Blank; width];
    grand[TASK_NAME_COLUMN] = Cell::text(&summary.grand.range_label);
    grand[TASK_STATUS_COLUMN] = Cell::text(summary.grand.caption);
    grand[WEEK_TOTAL_COLUMN] = Cell::Number(summary.grand.grand_total);

    [totals, grand]
}

/// Task links for the leading run of rows carrying a task id.
pub fn task_links(rows: &[Vec<Cell>], link_base: &str) -> Vec<Hyperlink> {
    let base = link_base.trim_end_matches('/');
    rows.iter()
        .enumerate()
        .map_while(|(i, cells)| {
            let cell = cells.get(TASK_ID_COLUMN).filter(|c| !c.is_blank())?;
            let Cell::Text(id) = cell else {
                return None;
            };
            Some(Hyperlink {
                row: i,
                column: TASK_ID_COLUMN,
                url: format!("{base}/{id}"),
                text: id.clone(),
            })
        })
        .collect()
}

/// Lay out task rows and summary rows in their final shape.
pub fn assemble(
    rows: &[TaskWeekRow],
    custom_columns: &[String],
    summary: &Summary,
    link_base: &str,
) -> ReportTable {
    let columns = column_names(custom_columns);
    let width = columns.len();

    let mut table_rows: Vec<Vec<Cell>> = rows
        .iter()
        .map(|r| task_cells(r, custom_columns, width))
        .collect();
    table_rows.extend(summary_cells(summary, width));

    let links = task_links(&table_rows, link_base);

    ReportTable {
        columns,
        rows: table_rows,
        links,
    }
}
