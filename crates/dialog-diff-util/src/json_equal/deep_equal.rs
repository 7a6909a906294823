use serde_json::Value;

/// Performs a deep equality check between two JSON values.
///
/// Arrays compare element-by-element in order; objects compare key-by-key
/// regardless of member order. Numbers compare by value, so `1` and `1.0`
/// are equal.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use dialog_diff_util::json_equal::deep_equal;
///
/// let a = json!({"foo": [1, 2, 3], "bar": true});
/// let b = json!({"bar": true, "foo": [1, 2, 3]});
/// let c = json!({"foo": [1, 2, 4], "bar": true});
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            obj_a.iter().all(|(key, val_a)| match obj_b.get(key) {
                Some(val_b) => deep_equal(val_a, val_b),
                None => false,
            })
        }

        // Different types are never equal
        _ => false,
    }
}

fn numbers_equal(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    if a == b {
        return true;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
