use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Binding, Environment},
        evaluator::core::{self, EvalResult, ENV_FOR_FLAG, ENV_WHILE_FLAG},
        value::{core::Value, hash_key::HashPair},
    },
};

/// Evaluates a classic `for (let …; cond; update) { … }` loop.
///
/// The header opens a new scope shared by the body, marked with the `for`
/// flag after the initialization runs. Iteration order per round is
/// condition, body, update; `continue` falls through to the update,
/// `break` exits, `return` propagates out. The flag is removed on exit and
/// the loop's value is `Empty`.
pub fn eval_for_loop(
    init: &Statement,
    condition: &Expr,
    update: &Statement,
    body: &Block,
    env: &Rc<Environment>,
) -> EvalResult<Value> {
    let for_env = Environment::new_enclosed(env);
    core::eval_statement(init, &for_env)?;
    for_env.set(ENV_FOR_FLAG, Binding::new(Value::Bool(true)));

    let result = run_for_loop(condition, update, body, &for_env);
    for_env.delete(ENV_FOR_FLAG);
    result
}

fn run_for_loop(
    condition: &Expr,
    update: &Statement,
    body: &Block,
    for_env: &Rc<Environment>,
) -> EvalResult<Value> {
    loop {
        if !core::eval_expression(condition, for_env)?.is_truthy() {
            break;
        }

        match core::eval_block(body, for_env)? {
            Value::Break => break,
            result @ Value::Return(_) => return Ok(result),
            _ => {},
        }

        core::eval_statement(update, for_env)?;
    }

    Ok(Value::Empty)
}

/// Evaluates a `for (key, value in iterable) { … }` loop.
///
/// The iterable evaluates in the enclosing scope and must be an array,
/// hash, or string. Arrays bind the 0-based index and element; strings
/// bind the byte offset of each Unicode scalar and a single-scalar
/// string; hashes bind each pair in unspecified order.
pub fn eval_for_in_loop(
    key: &str,
    value: &str,
    iterable: &Expr,
    body: &Block,
    env: &Rc<Environment>,
) -> EvalResult<Value> {
    let iterable = core::eval_expression(iterable, env)?;

    let for_env = Environment::new_enclosed(env);
    for_env.set(ENV_FOR_FLAG, Binding::new(Value::Bool(true)));

    let result = run_for_in_loop(key, value, &iterable, body, &for_env);
    for_env.delete(ENV_FOR_FLAG);
    result
}

fn run_for_in_loop(
    key: &str,
    value: &str,
    iterable: &Value,
    body: &Block,
    for_env: &Rc<Environment>,
) -> EvalResult<Value> {
    match iterable {
        Value::Array(elements) => {
            let snapshot = elements.borrow().clone();
            for (index, element) in snapshot.into_iter().enumerate() {
                for_env.set(key, Binding::new(Value::Integer(index as i64)));
                for_env.set(value, Binding::new(element));

                match core::eval_block(body, for_env)? {
                    Value::Break => break,
                    result @ Value::Return(_) => return Ok(result),
                    _ => {},
                }
            }
        },
        Value::Hash(pairs) => {
            let snapshot: Vec<HashPair> = pairs.borrow().values().cloned().collect();
            for pair in snapshot {
                for_env.set(key, Binding::new(pair.key));
                for_env.set(value, Binding::new(pair.value));

                match core::eval_block(body, for_env)? {
                    Value::Break => break,
                    result @ Value::Return(_) => return Ok(result),
                    _ => {},
                }
            }
        },
        Value::Str(string) => {
            for (index, ch) in string.char_indices() {
                for_env.set(key, Binding::new(Value::Integer(index as i64)));
                for_env.set(value, Binding::new(Value::Str(ch.to_string())));

                match core::eval_block(body, for_env)? {
                    Value::Break => break,
                    result @ Value::Return(_) => return Ok(result),
                    _ => {},
                }
            }
        },
        other => return Err(RuntimeError::NotIterable { iterable: other.type_name() }),
    }

    Ok(Value::Empty)
}

/// Evaluates a `while (cond) { … }` loop.
///
/// `while` does not open a scope; it marks the current scope with the
/// `while` flag for the duration of the loop so `break`/`continue`
/// validate. Sentinel handling matches the classic `for` loop.
pub fn eval_while_loop(condition: &Expr, body: &Block, env: &Rc<Environment>) -> EvalResult<Value> {
    env.set(ENV_WHILE_FLAG, Binding::new(Value::Bool(true)));

    let result = run_while_loop(condition, body, env);
    env.delete(ENV_WHILE_FLAG);
    result
}

fn run_while_loop(condition: &Expr, body: &Block, env: &Rc<Environment>) -> EvalResult<Value> {
    while core::eval_expression(condition, env)?.is_truthy() {
        match core::eval_block(body, env)? {
            Value::Break => break,
            result @ Value::Return(_) => return Ok(result),
            _ => {},
        }
    }

    Ok(Value::Empty)
}
