use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an index expression `left[index]`.
///
/// Arrays and strings index by integer and produce `null` when the index
/// is negative or out of range; strings index by Unicode scalar position
/// and produce a single-scalar string. Hashes index by any hashable key
/// and produce `null` on a miss. Every other combination is an error.
pub fn eval_index(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(idx)) => {
            if *idx < 0 {
                return Ok(Value::Null);
            }
            let elements = elements.borrow();
            Ok(elements.get(*idx as usize).cloned().unwrap_or(Value::Null))
        },
        (Value::Str(value), Value::Integer(idx)) => {
            if *idx < 0 {
                return Ok(Value::Null);
            }
            Ok(value
                .chars()
                .nth(*idx as usize)
                .map_or(Value::Null, |ch| Value::Str(ch.to_string())))
        },
        (Value::Hash(pairs), key) => {
            let hash_key = match key.hash_key() {
                Some(hash_key) => hash_key,
                None => {
                    return Err(RuntimeError::UnusableHashKey { key_type: key.type_name() });
                },
            };
            let pairs = pairs.borrow();
            Ok(pairs.get(&hash_key).map_or(Value::Null, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { left: left.type_name() }),
    }
}
