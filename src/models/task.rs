use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Task details returned by the Task Detail Provider.
///
/// Custom fields are kept as raw JSON: the list and each field in it are
/// validated during enrichment, one field at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDetail {
    #[serde(default, rename = "time_spent", deserialize_with = "lenient_ms")]
    pub time_spent_ms: Option<i64>,
    #[serde(default)]
    pub custom_fields: Option<Value>,
}

/// Typed view of one custom field. Every attribute is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomField {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub type_config: Option<Value>,
}

impl CustomField {
    pub const DROP_DOWN: &'static str = "drop_down";

    pub fn is_drop_down(&self) -> bool {
        self.field_type.as_deref() == Some(Self::DROP_DOWN)
    }
}

/// Read an integer that may come as JSON number or numeric string.
pub fn value_as_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_ms<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(v.as_ref().and_then(value_as_i64))
}
