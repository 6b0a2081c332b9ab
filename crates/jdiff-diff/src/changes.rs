//! Audit change sets: split a `{ field: { from, to } }` map into two documents.
//!
//! Audit entries record only the fields that changed. To show them in a
//! side-by-side diff the map is split into a "from" document and a "to"
//! document with the same keys in the same order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DiffError, DiffResult};

/// The before and after values of one changed field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    #[serde(default)]
    pub from: Value,
    #[serde(default)]
    pub to: Value,
}

/// Parse a change map into its fields, in document order.
///
/// A missing `from` or `to` is read as `null`.
pub fn parse_changes(changes: &Value) -> DiffResult<Vec<(String, FieldChange)>> {
    let map = changes.as_object().ok_or_else(|| {
        DiffError::InvalidChangeSet(format!("expected an object, got {}", type_name(changes)))
    })?;

    map.iter()
        .map(|(field, entry)| {
            if !entry.is_object() {
                return Err(DiffError::InvalidChangeSet(format!(
                    "field {field:?}: expected an object with from/to, got {}",
                    type_name(entry)
                )));
            }
            let change: FieldChange = serde_json::from_value(entry.clone())?;
            Ok((field.clone(), change))
        })
        .collect()
}

/// Split a change map into `(from_document, to_document)`.
pub fn split_changes(changes: &Value) -> DiffResult<(Value, Value)> {
    let mut from = Map::new();
    let mut to = Map::new();

    for (field, change) in parse_changes(changes)? {
        from.insert(field.clone(), change.from);
        to.insert(field, change.to);
    }

    Ok((Value::Object(from), Value::Object(to)))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structural::diff_values;
    use serde_json::json;

    #[test]
    fn empty_change_set() {
        let (from, to) = split_changes(&json!({})).unwrap();
        assert_eq!(from, json!({}));
        assert_eq!(to, json!({}));
    }

    #[test]
    fn splits_into_two_documents() {
        let changes = json!({
            "status": {"from": "New", "to": "InTransit"},
            "weight": {"from": 100, "to": 120}
        });
        let (from, to) = split_changes(&changes).unwrap();
        assert_eq!(from, json!({"status": "New", "weight": 100}));
        assert_eq!(to, json!({"status": "InTransit", "weight": 120}));
    }

    #[test]
    fn field_order_is_preserved() {
        let changes: Value = serde_json::from_str(
            r#"{"zeta": {"from": 1, "to": 2}, "alpha": {"from": 3, "to": 4}}"#,
        )
        .unwrap();
        let (from, _) = split_changes(&changes).unwrap();
        let keys: Vec<_> = from.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn missing_side_becomes_null() {
        let changes = json!({"notes": {"to": "fragile"}});
        let parsed = parse_changes(&changes).unwrap();
        assert_eq!(parsed[0].1.from, Value::Null);
        assert_eq!(parsed[0].1.to, json!("fragile"));
    }

    #[test]
    fn nested_values_survive() {
        let changes = json!({"stop": {"from": {"city": "Reno"}, "to": {"city": "Elko"}}});
        let (from, to) = split_changes(&changes).unwrap();
        let diff = diff_values(&from, &to).unwrap();
        assert_eq!(diff.modifications(), 1);
    }

    #[test]
    fn non_object_change_set_is_rejected() {
        let err = split_changes(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, DiffError::InvalidChangeSet(ref msg) if msg.contains("array")));
    }

    #[test]
    fn non_object_entry_is_rejected() {
        let err = split_changes(&json!({"status": "New"})).unwrap_err();
        match err {
            DiffError::InvalidChangeSet(msg) => assert!(msg.contains("status")),
            other => panic!("expected InvalidChangeSet, got {:?}", other),
        }
    }
}
