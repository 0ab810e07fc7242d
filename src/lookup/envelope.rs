//! Response envelope unwrapping
//!
//! Lookup endpoints wrap their lists in whatever shape the backend author
//! chose: a bare array, `{data: [...]}`, `{data: {employees: [...]}}`,
//! `{generated_codes: [...]}` and so on. The rules below are tried in order
//! and the first match wins. New shapes go at the end of [`ENVELOPE_RULES`].

use serde_json::Value;

/// Keys that may hold the list inside a `data` object
const NESTED_LIST_KEYS: &[&str] = &[
    "items",
    "result",
    "employees",
    "employeeList",
    "employeesList",
    "employee_list",
    "employees_list",
];

/// Keys that may hold the list at the top level
const TOP_LEVEL_LIST_KEYS: &[&str] = &[
    "result",
    "items",
    "employees",
    "employeesList",
    "employeeList",
    "employees_list",
    "employee_list",
];

/// One recognised response shape
pub struct EnvelopeRule {
    pub name: &'static str,
    pub matches: fn(&Value) -> bool,
    pub extract: fn(&Value) -> Vec<Value>,
}

/// Ordered rule table
pub static ENVELOPE_RULES: &[EnvelopeRule] = &[
    EnvelopeRule {
        name: "bare_list",
        matches: Value::is_array,
        extract: |v| array_of(Some(v)),
    },
    EnvelopeRule {
        name: "generated_codes",
        matches: |v| v.get("generated_codes").is_some_and(Value::is_array),
        extract: |v| array_of(v.get("generated_codes")),
    },
    EnvelopeRule {
        name: "data_list",
        matches: |v| v.get("data").is_some_and(Value::is_array),
        extract: |v| array_of(v.get("data")),
    },
    EnvelopeRule {
        name: "data_nested_list",
        matches: |v| nested_list(v).is_some(),
        extract: |v| array_of(nested_list(v)),
    },
    // Shadowed by `data_list`; kept so the order mirrors the backend contract
    EnvelopeRule {
        name: "success_data",
        matches: |v| v.get("success").is_some() && v.get("data").is_some_and(Value::is_array),
        extract: |v| array_of(v.get("data")),
    },
    EnvelopeRule {
        name: "top_level_list",
        matches: |v| top_level_list(v).is_some(),
        extract: |v| array_of(top_level_list(v)),
    },
];

/// Result of unwrapping a response
#[derive(Debug, Clone, PartialEq)]
pub struct Unwrapped {
    /// Name of the rule that matched, `None` if the shape was unrecognised
    pub rule: Option<&'static str>,
    pub items: Vec<Value>,
}

/// Unwrap a response body into its list of raw records
///
/// Unrecognised shapes yield an empty list and a warning, never an error.
pub fn unwrap_envelope(body: &Value) -> Unwrapped {
    match ENVELOPE_RULES.iter().find(|rule| (rule.matches)(body)) {
        Some(rule) => Unwrapped {
            rule: Some(rule.name),
            items: (rule.extract)(body),
        },
        None => {
            tracing::warn!(
                shape = %describe_shape(body),
                "Lookup response matched no known envelope, treating as empty"
            );
            Unwrapped {
                rule: None,
                items: Vec::new(),
            }
        }
    }
}

fn nested_list(body: &Value) -> Option<&Value> {
    let data = body.get("data").filter(|d| d.is_object())?;
    NESTED_LIST_KEYS
        .iter()
        .filter_map(|k| data.get(*k))
        .find(|v| v.is_array())
}

fn top_level_list(body: &Value) -> Option<&Value> {
    TOP_LEVEL_LIST_KEYS
        .iter()
        .filter_map(|k| body.get(*k))
        .find(|v| v.is_array())
}

fn array_of(value: Option<&Value>) -> Vec<Value> {
    value
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Short description for logs; avoids dumping whole payloads
fn describe_shape(body: &Value) -> String {
    match body {
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).take(8).collect();
            format!("object{{{}}}", keys.join(","))
        }
        Value::Array(_) => "array".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "bool".to_string(),
        Value::Null => "null".to_string(),
    }
}
