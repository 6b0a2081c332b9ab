//! Leaf equality by canonical serialization.

use serde_json::{Map, Value};

/// Largest integer an `f64` represents exactly.
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

/// Compare two values by their canonical JSON text.
///
/// Integral floats serialize like integers, so `1` and `1.0` are equal.
/// Object keys are compared in document order. A value without a canonical
/// form never equals anything.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (canonical(a), canonical(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Canonical JSON text of a value, or `None` if it cannot be serialized.
pub fn canonical(value: &Value) -> Option<String> {
    serde_json::to_string(&normalize(value)?).ok()
}

/// Rewrite integral floats as integers, recursively.
fn normalize(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) if n.is_f64() => {
            let f = n.as_f64()?;
            if !f.is_finite() {
                return None;
            }
            if f.fract() == 0.0 && f.abs() <= MAX_EXACT_F64_INT {
                Some(Value::from(f as i64))
            } else {
                Some(value.clone())
            }
        }
        Value::Array(items) => items
            .iter()
            .map(normalize)
            .collect::<Option<Vec<_>>>()
            .map(Value::Array),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| normalize(v).map(|v| (k.clone(), v)))
            .collect::<Option<Map<String, Value>>>()
            .map(Value::Object),
        other => Some(other.clone()),
    }
}
