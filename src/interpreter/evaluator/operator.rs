use std::rc::Rc;

use crate::{
    ast::{InfixOperator, PrefixOperator},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{almost_equal, python_mod_f64, python_mod_i64, FLOAT_TOLERANCE},
};

/// Evaluates a prefix operation.
///
/// `!` negates truthiness (`false` and `null` are falsy, everything else
/// is truthy); `-` negates integers and floats and errors on other types.
pub fn eval_prefix(operator: PrefixOperator, right: &Value) -> EvalResult<Value> {
    match operator {
        PrefixOperator::Bang => Ok(Value::Bool(!right.is_truthy())),
        PrefixOperator::Minus => match right {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            Value::Float(value) => Ok(Value::Float(-value)),
            other => Err(RuntimeError::UnknownPrefixOperator {
                operator: "-".to_string(),
                right: other.type_name(),
            }),
        },
    }
}

/// Evaluates an infix operation between two values.
///
/// The operand pair selects the rule set: integer pairs use integer
/// arithmetic, mixed numeric pairs promote to float, pairs involving a
/// string use string coercion, and everything else falls through to
/// identity equality, the boolean combinators, or an error.
pub fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::Integer(_) | Value::Float(_), Value::Integer(_) | Value::Float(_)) => {
            eval_float_infix(operator, left, right)
        },
        (
            Value::Str(_),
            Value::Str(_) | Value::Integer(_) | Value::Float(_) | Value::Bool(_)
            | Value::Array(_) | Value::Hash(_),
        )
        | (
            Value::Integer(_) | Value::Float(_) | Value::Bool(_) | Value::Array(_)
            | Value::Hash(_),
            Value::Str(_),
        ) => eval_string_infix(operator, left, right),
        _ => match operator {
            InfixOperator::Equal => Ok(Value::Bool(identity_eq(left, right))),
            InfixOperator::NotEqual => Ok(Value::Bool(!identity_eq(left, right))),
            InfixOperator::And | InfixOperator::Or => eval_boolean_infix(operator, left, right),
            _ => {
                if left.type_name() == right.type_name() {
                    Err(RuntimeError::UnknownInfixOperator {
                        left: left.type_name(),
                        operator: operator.to_string(),
                        right: right.type_name(),
                    })
                } else {
                    Err(RuntimeError::TypeMismatch {
                        left: left.type_name(),
                        operator: operator.to_string(),
                        right: right.type_name(),
                    })
                }
            },
        },
    }
}

/// Evaluates an integer/integer operation.
///
/// Arithmetic wraps on overflow; division truncates toward zero; `%` is
/// Python-style (the result's sign follows the divisor). Division or
/// modulo by zero is an error.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    let value = match operator {
        InfixOperator::Add => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        },
        InfixOperator::Mod => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(python_mod_i64(left, right))
        },
        InfixOperator::Less => Value::Bool(left < right),
        InfixOperator::LessEqual => Value::Bool(left <= right),
        InfixOperator::Greater => Value::Bool(left > right),
        InfixOperator::GreaterEqual => Value::Bool(left >= right),
        InfixOperator::Equal => Value::Bool(left == right),
        InfixOperator::NotEqual => Value::Bool(left != right),
        InfixOperator::And | InfixOperator::Or => {
            return Err(RuntimeError::UnknownInfixOperator {
                left: "INTEGER",
                operator: operator.to_string(),
                right: "INTEGER",
            });
        },
    };
    Ok(value)
}

/// Evaluates a float or mixed numeric operation after promotion.
///
/// Comparisons for `==`, `!=`, `<=`, `>=` use the `1e-5` absolute
/// tolerance; `<` and `>` are strict. `%` is Python-style float modulo.
fn eval_float_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    let l = float_of(left);
    let r = float_of(right);

    let value = match operator {
        InfixOperator::Add => Value::Float(l + r),
        InfixOperator::Sub => Value::Float(l - r),
        InfixOperator::Mul => Value::Float(l * r),
        InfixOperator::Div => Value::Float(l / r),
        InfixOperator::Mod => Value::Float(python_mod_f64(l, r)),
        InfixOperator::Less => Value::Bool(l < r),
        InfixOperator::LessEqual => {
            Value::Bool(l < r || almost_equal(l, r, FLOAT_TOLERANCE))
        },
        InfixOperator::Greater => Value::Bool(l > r),
        InfixOperator::GreaterEqual => {
            Value::Bool(l > r || almost_equal(l, r, FLOAT_TOLERANCE))
        },
        InfixOperator::Equal => Value::Bool(almost_equal(l, r, FLOAT_TOLERANCE)),
        InfixOperator::NotEqual => Value::Bool(!almost_equal(l, r, FLOAT_TOLERANCE)),
        InfixOperator::And | InfixOperator::Or => {
            return Err(RuntimeError::UnknownInfixOperator {
                left: left.type_name(),
                operator: operator.to_string(),
                right: right.type_name(),
            });
        },
    };
    Ok(value)
}

/// Extracts the float value of a numeric operand.
fn float_of(value: &Value) -> f64 {
    match value {
        Value::Integer(value) => *value as f64,
        Value::Float(value) => *value,
        _ => unreachable!("float_of used with non-numeric operand"),
    }
}

/// Evaluates an operation where either operand is a string.
///
/// Both operands are stringified through their inspect forms; `+`
/// concatenates, `==`/`!=` compare, anything else is an error.
fn eval_string_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    let l = left.to_string();
    let r = right.to_string();

    match operator {
        InfixOperator::Add => Ok(Value::Str(format!("{l}{r}"))),
        InfixOperator::Equal => Ok(Value::Bool(l == r)),
        InfixOperator::NotEqual => Ok(Value::Bool(l != r)),
        _ => Err(RuntimeError::UnknownInfixOperator {
            left: "STRING",
            operator: operator.to_string(),
            right: "STRING",
        }),
    }
}

/// Evaluates `&&`/`||` between two booleans.
///
/// Both operands have already been evaluated; the combinators are not
/// short-circuiting.
fn eval_boolean_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Bool(l), Value::Bool(r)) => {
            let value = match operator {
                InfixOperator::And => *l && *r,
                _ => *l || *r,
            };
            Ok(Value::Bool(value))
        },
        _ => Err(RuntimeError::UnknownInfixOperator {
            left: left.type_name(),
            operator: operator.to_string(),
            right: right.type_name(),
        }),
    }
}

/// Compares two values by identity.
///
/// `null` and the booleans compare as singletons, arrays/hashes/functions
/// by reference identity; any remaining pair is unequal.
fn identity_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::Array(l), Value::Array(r)) => Rc::ptr_eq(l, r),
        (Value::Hash(l), Value::Hash(r)) => Rc::ptr_eq(l, r),
        (Value::Function(l), Value::Function(r)) => Rc::ptr_eq(l, r),
        _ => false,
    }
}
