use serde_json::{Number, Value};

/// Numeric equality across integer and float representations.
///
/// `2` and `2.0` are equal. An integer equals a float only when the float
/// is integral and converts back to exactly that integer, so nearby values
/// beyond `f64` precision stay distinct.
pub fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (a.is_f64(), b.is_f64()) {
        (true, true) => a.as_f64() == b.as_f64(),
        (false, false) => integers_equal(a, b),
        (true, false) => float_equals_integer(a, b),
        (false, true) => float_equals_integer(b, a),
    }
}

fn integers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    // One side is a negative i64, the other a u64 above i64::MAX.
    false
}

fn float_equals_integer(float: &Number, integer: &Number) -> bool {
    let Some(f) = float.as_f64() else {
        return false;
    };
    if f.fract() != 0.0 {
        return false;
    }
    if let Some(i) = integer.as_i64() {
        return f >= i64::MIN as f64 && f < i64::MAX as f64 && f as i64 == i;
    }
    if let Some(u) = integer.as_u64() {
        return f >= 0.0 && f < u64::MAX as f64 && f as u64 == u;
    }
    false
}

/// Deep equality with numeric semantics for numbers.
///
/// Booleans never equal numbers. Mappings compare as sets of keys, so key
/// order does not matter; sequences compare positionally.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| values_equal(x, y)))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_equals_integral_float() {
        assert!(values_equal(&json!(2), &json!(2.0)));
        assert!(values_equal(&json!(-3.0), &json!(-3)));
        assert!(!values_equal(&json!(2), &json!(2.5)));
    }

    #[test]
    fn integer_and_float_beyond_f64_precision_differ() {
        // 2^53 + 1 has no exact f64; it must not match its rounded neighbour.
        assert!(!values_equal(&json!(9_007_199_254_740_993_i64), &json!(9_007_199_254_740_992.0)));
        assert!(!values_equal(&json!(9_007_199_254_740_992.0), &json!(9_007_199_254_740_993_u64)));
        assert!(values_equal(&json!(9_007_199_254_740_992_i64), &json!(9_007_199_254_740_992.0)));
        assert!(!values_equal(&json!(u64::MAX), &json!(u64::MAX as f64)));
    }

    #[test]
    fn large_unsigned_values_compare_exactly() {
        assert!(values_equal(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!values_equal(&json!(u64::MAX), &json!(u64::MAX - 1)));
        assert!(!values_equal(&json!(u64::MAX), &json!(-1)));
    }

    #[test]
    fn booleans_are_not_numbers() {
        assert!(!values_equal(&json!(true), &json!(1)));
        assert!(!values_equal(&json!(false), &json!(0)));
    }

    #[test]
    fn null_only_equals_null() {
        assert!(values_equal(&json!(null), &json!(null)));
        assert!(!values_equal(&json!(null), &json!(0)));
        assert!(!values_equal(&json!(null), &json!([])));
    }

    #[test]
    fn composite_equality_is_deep() {
        assert!(values_equal(
            &json!({"a": [1, {"b": 2.0}]}),
            &json!({"a": [1.0, {"b": 2}]})
        ));
        assert!(!values_equal(&json!([1, 2]), &json!([1, 2, 3])));
        assert!(!values_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    }

    #[test]
    fn mapping_key_order_is_irrelevant() {
        assert!(values_equal(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
    }
}
