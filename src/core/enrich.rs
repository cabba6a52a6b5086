use crate::api::TaskDetailProvider;
use crate::core::assemble::is_fixed_column;
use crate::errors::{AppError, AppResult};
use crate::models::{CustomField, SENTINEL, TaskWeekRow};
use crate::models::task::value_as_i64;
use crate::utils::time::ms_to_hours_minutes;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Something that went wrong while enriching one task (or one of its fields).
/// Enrichment problems never abort the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub task_id: String,
    pub field: Option<String>,
    pub reason: String,
}

impl Diagnostic {
    fn task(task_id: &str, reason: String) -> Self {
        Self {
            task_id: task_id.to_string(),
            field: None,
            reason,
        }
    }

    fn field(task_id: &str, field: Option<&str>, reason: impl Into<String>) -> Self {
        Self {
            task_id: task_id.to_string(),
            field: field.map(str::to_string),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "task {} / field '{}': {}", self.task_id, field, self.reason),
            None => write!(f, "task {}: {}", self.task_id, self.reason),
        }
    }
}

/// Resolved drop-down values of one task plus the fields that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldResolution {
    pub values: Vec<(String, String)>,
    pub issues: Vec<Diagnostic>,
}

/// Outcome of the enrichment stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enrichment {
    /// Custom-field column names in first-encounter order
    pub custom_columns: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// "12h 5m" rendering of a lifetime tracked time.
pub fn format_lifetime(ms: i64) -> String {
    let (h, m) = ms_to_hours_minutes(ms);
    format!("{h}h {m}m")
}

/// Resolve the drop-down custom fields of a task to their option names.
///
/// Fields without a value, and fields of any other type, are ignored. A field
/// that cannot be resolved yields a diagnostic and is skipped on its own.
pub fn resolve_custom_fields(task_id: &str, fields: Option<&Value>) -> FieldResolution {
    let mut out = FieldResolution::default();

    let items = match fields {
        None | Some(Value::Null) => return out,
        Some(Value::Array(items)) => items,
        Some(_) => {
            out.issues.push(Diagnostic::field(
                task_id,
                None,
                "custom_fields is not a list",
            ));
            return out;
        }
    };

    for raw in items {
        match resolve_field(task_id, raw) {
            Ok(Some(pair)) => out.values.push(pair),
            Ok(None) => {}
            Err(issue) => out.issues.push(issue),
        }
    }

    out
}

fn resolve_field(task_id: &str, raw: &Value) -> Result<Option<(String, String)>, Diagnostic> {
    let raw_name = raw.get("name").and_then(Value::as_str);

    let field: CustomField = serde_json::from_value(raw.clone()).map_err(|e| {
        Diagnostic::field(task_id, raw_name, format!("malformed custom field: {e}"))
    })?;

    let Some(value) = &field.value else {
        return Ok(None);
    };

    if field.field_type.is_none() {
        return Err(Diagnostic::field(task_id, raw_name, "missing field type"));
    }
    if !field.is_drop_down() {
        return Ok(None);
    }

    let name = field
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| Diagnostic::field(task_id, None, "drop-down field without a name"))?;
    if is_fixed_column(&name) {
        return Err(Diagnostic::field(
            task_id,
            Some(&name),
            "field name clashes with a fixed report column",
        ));
    }

    let index = value_as_i64(value)
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(|| {
            Diagnostic::field(task_id, Some(&name), format!("invalid option index: {value}"))
        })?;

    let options = field
        .type_config
        .as_ref()
        .and_then(|c| c.get("options"))
        .and_then(Value::as_array)
        .ok_or_else(|| Diagnostic::field(task_id, Some(&name), "missing options list"))?;

    let option = options.get(index).ok_or_else(|| {
        Diagnostic::field(
            task_id,
            Some(&name),
            format!("option index {index} out of range ({} options)", options.len()),
        )
    })?;

    let option_name = option
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| Diagnostic::field(task_id, Some(&name), "option without a name"))?;

    Ok(Some((name, option_name.to_string())))
}

#[derive(Default)]
struct TaskOutcome {
    lifetime: Option<String>,
    fields: FieldResolution,
}

fn enrich_one(task_id: &str, provider: &dyn TaskDetailProvider) -> TaskOutcome {
    // entries logged without a task: nothing to look up
    if task_id == SENTINEL {
        return TaskOutcome {
            lifetime: Some(format_lifetime(0)),
            fields: FieldResolution::default(),
        };
    }

    debug!(task_id, "fetching task details");
    match provider.task_detail(task_id) {
        Ok(detail) => TaskOutcome {
            lifetime: Some(format_lifetime(detail.time_spent_ms.unwrap_or(0))),
            fields: resolve_custom_fields(task_id, detail.custom_fields.as_ref()),
        },
        Err(e) => TaskOutcome {
            lifetime: None,
            fields: FieldResolution {
                values: Vec::new(),
                issues: vec![Diagnostic::task(task_id, format!("task details unavailable: {e}"))],
            },
        },
    }
}

/// Add lifetime tracked time and drop-down custom fields to every row.
///
/// Provider calls run on a pool of at most `max_concurrency` threads. Results
/// are applied afterwards in row order, so each row is written once and the
/// custom columns come out in a stable order.
pub fn enrich_rows(
    rows: &mut [TaskWeekRow],
    provider: &dyn TaskDetailProvider,
    max_concurrency: usize,
) -> AppResult<Enrichment> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(max_concurrency.max(1))
        .build()
        .map_err(|e| AppError::Other(format!("cannot start enrichment workers: {e}")))?;

    let outcomes: Vec<TaskOutcome> = pool.install(|| {
        rows.par_iter()
            .map(|row| enrich_one(&row.task_id, provider))
            .collect()
    });

    let mut enrichment = Enrichment::default();
    for (row, outcome) in rows.iter_mut().zip(outcomes) {
        row.lifetime_tracked = outcome.lifetime;

        for (name, value) in outcome.fields.values {
            if !enrichment.custom_columns.contains(&name) {
                enrichment.custom_columns.push(name.clone());
            }
            row.custom_fields.insert(name, value);
        }

        for issue in outcome.fields.issues {
            warn!(
                task_id = %issue.task_id,
                field = issue.field.as_deref().unwrap_or("-"),
                "{}",
                issue.reason
            );
            enrichment.diagnostics.push(issue);
        }
    }

    Ok(enrichment)
}
