//! Uniform lookup record and the normalizing mapper
//!
//! Every endpoint names its fields differently (`category_name`, `vendor_id`,
//! `emp_id`, ...). Normalization picks the id and display name from ordered
//! candidate lists and keeps the rest of the source record untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::category::LookupCategory;

/// A normalized dropdown entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupRecord {
    /// Opaque identifier used for de-duplication
    #[serde(default)]
    pub id: Value,
    /// What a form should submit; equals `id`
    #[serde(default)]
    pub value: Value,
    /// Human-readable display string
    #[serde(default)]
    pub label: String,
    /// Remaining source fields, preserved as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LookupRecord {
    /// Normalize one raw record for the given category
    pub fn normalize(category: LookupCategory, raw: &Value) -> Self {
        let obj = match raw {
            Value::Object(obj) => obj,
            scalar => return Self::from_scalar(scalar),
        };

        let name = first_present(obj, category.name_fields())
            .map(display_string)
            .or_else(|| {
                if category.composes_person_name() {
                    person_name(obj)
                } else {
                    None
                }
            });

        let id = first_present(obj, category.id_fields())
            .cloned()
            .or_else(|| name.clone().map(Value::String))
            .unwrap_or(Value::Null);

        let label = match name {
            Some(name) => name,
            None if id.is_null() => String::new(),
            None => display_string(&id),
        };

        let extra = obj
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "id" | "value" | "label"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Self {
            value: id.clone(),
            id,
            label,
            extra,
        }
    }

    /// Bare strings/numbers serve as id, value and label at once
    fn from_scalar(raw: &Value) -> Self {
        let id = if is_blank(raw) { Value::Null } else { raw.clone() };
        let label = if id.is_null() {
            String::new()
        } else {
            display_string(&id)
        };
        Self {
            value: id.clone(),
            id,
            label,
            extra: Map::new(),
        }
    }

    /// Strip a fixed textual prefix from string ids, values and labels
    ///
    /// Source fields in `extra` that carried the prefixed id or label are
    /// stripped too, otherwise re-normalizing the record would pick the
    /// prefixed candidate up again.
    pub fn strip_value_prefix(&mut self, prefix: &str) {
        if prefix.is_empty() {
            return;
        }
        let originals = [display_string(&self.id), self.label.clone()];

        for field in self.extra.values_mut() {
            if let Value::String(s) = field {
                if originals.contains(s) {
                    strip_in_place(s, prefix);
                }
            }
        }
        for field in [&mut self.id, &mut self.value] {
            if let Value::String(s) = field {
                strip_in_place(s, prefix);
            }
        }
        strip_in_place(&mut self.label, prefix);
    }

    /// `value` as a string, for callers that bind to text inputs
    pub fn value_string(&self) -> String {
        display_string(&self.value)
    }
}

/// Normalize a list of raw records
pub fn normalize_all(category: LookupCategory, items: &[Value]) -> Vec<LookupRecord> {
    items
        .iter()
        .map(|raw| LookupRecord::normalize(category, raw))
        .collect()
}

fn first_present<'a>(obj: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    fields
        .iter()
        .filter_map(|f| obj.get(*f))
        .find(|v| !is_blank(v))
}

/// Null, empty strings and non-scalars never count as a candidate value
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn strip_in_place(s: &mut String, prefix: &str) {
    if let Some(rest) = s.strip_prefix(prefix) {
        *s = rest.to_string();
    }
}

fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn person_name(obj: &Map<String, Value>) -> Option<String> {
    let parts: Vec<String> = ["first_name", "last_name"]
        .iter()
        .filter_map(|f| obj.get(*f))
        .filter(|v| !is_blank(v))
        .map(|v| display_string(v).trim().to_string())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
