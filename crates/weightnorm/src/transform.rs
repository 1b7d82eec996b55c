//! Recursive coercion pass over a parsed JSON document.

use serde_json::Value;

use crate::error::{CoercionReason, Error, Result};

/// The one key this tool rewrites. Match is exact and case-sensitive.
pub const WEIGHT_KEY: &str = "weight";

/// Coerce every value under a `"weight"` key, anywhere in the tree, to an
/// f64 number. Mutates `value` in place and returns how many values were
/// coerced.
///
/// Traversal is depth-first: object entries in insertion order, array
/// elements in index order. The first value that cannot be coerced aborts
/// the walk with `Error::Coercion` naming its location.
pub fn normalize_weights(value: &mut Value) -> Result<usize> {
    walk(value, "")
}

fn walk(node: &mut Value, location: &str) -> Result<usize> {
    let mut converted = 0;
    match node {
        Value::Object(map) => {
            for (key, value) in map.iter_mut() {
                let child = if location.is_empty() {
                    key.clone()
                } else {
                    format!("{location}.{key}")
                };
                if key == WEIGHT_KEY {
                    let number = coerce_to_f64(value).map_err(|reason| Error::Coercion {
                        location: child,
                        reason,
                    })?;
                    *value = Value::Number(number);
                    converted += 1;
                } else {
                    converted += walk(value, &child)?;
                }
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter_mut().enumerate() {
                converted += walk(item, &format!("{location}[{index}]"))?;
            }
        }
        // Scalars not reached through a "weight" key stay as they are.
        _ => {}
    }
    Ok(converted)
}

/// Numbers (integer or float) and numeric strings coerce; everything else is
/// rejected. Booleans are rejected deliberately rather than read as 0/1.
fn coerce_to_f64(value: &Value) -> core::result::Result<serde_json::Number, CoercionReason> {
    let float = match value {
        Value::Number(n) => n.as_f64().ok_or(CoercionReason::NonFinite)?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| CoercionReason::NonNumericString)?,
        Value::Bool(_) => return Err(CoercionReason::Bool),
        Value::Null => return Err(CoercionReason::Null),
        Value::Array(_) => return Err(CoercionReason::Array),
        Value::Object(_) => return Err(CoercionReason::Object),
    };
    // f64::from_str accepts "inf"/"nan"; serde_json numbers cannot hold them.
    serde_json::Number::from_f64(float).ok_or(CoercionReason::NonFinite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_integers_and_numeric_strings() {
        assert_eq!(coerce_to_f64(&json!(70)).unwrap().as_f64(), Some(70.0));
        assert_eq!(coerce_to_f64(&json!(70.5)).unwrap().as_f64(), Some(70.5));
        assert_eq!(coerce_to_f64(&json!("50")).unwrap().as_f64(), Some(50.0));
        assert_eq!(
            coerce_to_f64(&json!(" 12.5 ")).unwrap().as_f64(),
            Some(12.5)
        );
        assert_eq!(coerce_to_f64(&json!("1e3")).unwrap().as_f64(), Some(1000.0));
    }

    #[test]
    fn rejects_non_numeric_shapes() {
        assert_eq!(coerce_to_f64(&json!(true)), Err(CoercionReason::Bool));
        assert_eq!(coerce_to_f64(&json!(null)), Err(CoercionReason::Null));
        assert_eq!(coerce_to_f64(&json!([1])), Err(CoercionReason::Array));
        assert_eq!(coerce_to_f64(&json!({"kg": 1})), Err(CoercionReason::Object));
        assert_eq!(
            coerce_to_f64(&json!("heavy")),
            Err(CoercionReason::NonNumericString)
        );
        assert_eq!(coerce_to_f64(&json!("inf")), Err(CoercionReason::NonFinite));
    }

    #[test]
    fn coercion_error_names_the_location() {
        let mut doc = json!({"sets": [{"weight": 50}, {"weight": null}]});
        let err = normalize_weights(&mut doc).unwrap_err();
        match err {
            Error::Coercion { location, reason } => {
                assert_eq!(location, "sets[1].weight");
                assert_eq!(reason, CoercionReason::Null);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
