//! Value-shape predicates.

use serde_json::Value;

/// Coarse structural shape of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Array,
    Object,
}

impl Shape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Array(_) => Shape::Array,
            Value::Object(_) => Shape::Object,
            _ => Shape::Scalar,
        }
    }
}

/// Returns `true` for arrays and objects.
pub fn is_container(value: &Value) -> bool {
    Shape::of(value) != Shape::Scalar
}

/// Returns `true` when both values are arrays or both are objects.
///
/// Two scalars are not the same shape in this sense: only containers can be
/// merged member-by-member.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use dialog_diff_util::same_shape;
///
/// assert!(same_shape(&json!([1]), &json!([])));
/// assert!(same_shape(&json!({"a": 1}), &json!({})));
/// assert!(!same_shape(&json!([]), &json!({})));
/// assert!(!same_shape(&json!(1), &json!(1)));
/// ```
pub fn same_shape(a: &Value, b: &Value) -> bool {
    let shape = Shape::of(a);
    shape != Shape::Scalar && shape == Shape::of(b)
}
