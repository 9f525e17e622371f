use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{AssignOperator, Block, Expr, PostfixOperator, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Binding, Environment},
        evaluator::{builtin, function, index, loops, operator},
        value::{
            core::{Function, Value},
            hash_key::HashPair,
            methods,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value or a [`RuntimeError`]
/// describing the failure; `?` propagation gives errors their
/// short-circuiting behavior.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Scope marker set while a classic or `for-in` loop body runs.
pub const ENV_FOR_FLAG: &str = "ENV_FOR_FLAG";
/// Scope marker set while a `while` loop body runs.
pub const ENV_WHILE_FLAG: &str = "ENV_WHILE_FLAG";
/// Scope entry holding the receiver during method-name resolution.
pub const ENV_OBJECT_BUILTIN_FLAG: &str = "ENV_OBJECT_BUILTIN_FLAG";

/// Evaluates a complete program.
///
/// Iterates the top-level statements, unwrapping a `return` sentinel into
/// its inner value and stopping there. The program's value is the last
/// statement's value; statements with no user-visible result contribute
/// [`Value::Empty`].
///
/// # Parameters
/// - `program`: The parsed program.
/// - `env`: The root environment to evaluate against.
///
/// # Returns
/// The final value, or the first runtime error raised.
pub fn eval_program(program: &Program, env: &Rc<Environment>) -> EvalResult<Value> {
    let mut result = Value::Empty;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Value::Return(value) = result {
            return Ok(*value);
        }
    }

    Ok(result)
}

/// Evaluates a braced block against the current environment.
///
/// Blocks do not open scopes. `return` sentinels propagate unchanged;
/// `break`/`continue` sentinels propagate when the current scope is marked
/// as a loop, and convert to an error otherwise.
pub fn eval_block(block: &Block, env: &Rc<Environment>) -> EvalResult<Value> {
    let in_loop = env.exists_in_scope(ENV_FOR_FLAG) || env.exists_in_scope(ENV_WHILE_FLAG);
    let mut result = Value::Empty;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        match &result {
            Value::Return(_) => return Ok(result),
            Value::Break | Value::Continue => {
                if in_loop {
                    return Ok(result);
                }
                return Err(RuntimeError::SentinelOutsideLoop { sentinel: result.type_name() });
            },
            _ => {},
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
pub fn eval_statement(statement: &Statement, env: &Rc<Environment>) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, constant, value } => eval_let(name, *constant, value, env),
        Statement::FunctionDeclaration { name, function } => {
            eval_function_declaration(name, function, env)
        },
        Statement::Reassign { name, operator, value } => {
            eval_reassign(name, *operator, value, env)
        },
        Statement::Return(value) => {
            let value = eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        },
        Statement::Expression(expression) => eval_expression(expression, env),
        Statement::ForLoop { init, condition, update, body } => {
            loops::eval_for_loop(init, condition, update, body, env)
        },
        Statement::ForIn { key, value, iterable, body } => {
            loops::eval_for_in_loop(key, value, iterable, body, env)
        },
        Statement::While { condition, body } => loops::eval_while_loop(condition, body, env),
        Statement::Break => {
            if in_loop_scope(env) {
                Ok(Value::Break)
            } else {
                Err(RuntimeError::LoopControlOutsideLoop { keyword: "break" })
            }
        },
        Statement::Continue => {
            if in_loop_scope(env) {
                Ok(Value::Continue)
            } else {
                Err(RuntimeError::LoopControlOutsideLoop { keyword: "continue" })
            }
        },
    }
}

/// Evaluates an expression.
pub fn eval_expression(expression: &Expr, env: &Rc<Environment>) -> EvalResult<Value> {
    match expression {
        Expr::Integer(value) => Ok(Value::Integer(*value)),
        Expr::Float(value) => Ok(Value::Float(*value)),
        Expr::Str(value) => Ok(Value::Str(value.clone())),
        Expr::Boolean(value) => Ok(Value::Bool(*value)),
        Expr::Null => Ok(Value::Null),
        Expr::Identifier(name) => eval_identifier(name, env),
        Expr::Array(elements) => {
            let elements = function::eval_expressions(elements, env)?;
            Ok(Value::array(elements))
        },
        Expr::Hash(pairs) => eval_hash_literal(pairs, env),
        Expr::Function { parameters, body } => Ok(Value::Function(Rc::new(Function {
            parameters: parameters.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        }))),
        Expr::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            operator::eval_prefix(*operator, &right)
        },
        Expr::Infix { left, operator, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            operator::eval_infix(*operator, &left, &right)
        },
        Expr::Postfix { operator, target } => eval_postfix(*operator, target, env),
        Expr::If { conditions, alternative } => eval_if(conditions, alternative.as_ref(), env),
        Expr::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            index::eval_index(&left, &index)
        },
        Expr::Call { function, arguments } => function::eval_call(function, arguments, env),
        Expr::Method { receiver, name, arguments } => {
            function::eval_method(receiver, name, arguments, env)
        },
    }
}

/// Resolves an identifier.
///
/// Resolution order: (1) the environment chain; (2) when the current scope
/// marks a method-receiver context, the receiver's per-type method table;
/// (3) the free built-in registry.
pub fn eval_identifier(name: &str, env: &Rc<Environment>) -> EvalResult<Value> {
    if let Some(binding) = env.get(name) {
        return Ok(binding.value);
    }

    if let Some(receiver) = env.get_in_scope(ENV_OBJECT_BUILTIN_FLAG) {
        let method = match &receiver.value {
            Value::Array(_) => methods::array::lookup(name),
            Value::Hash(_) => methods::hash::lookup(name),
            Value::Str(_) => methods::string::lookup(name),
            _ => return Err(RuntimeError::NotMethodable),
        };
        return method.map(Value::Builtin).ok_or(RuntimeError::MethodNotFound);
    }

    if let Some(builtin) = builtin::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }

    Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
}

/// Tests whether the current scope is marked as a loop scope.
fn in_loop_scope(env: &Rc<Environment>) -> bool {
    env.exists_in_scope(ENV_FOR_FLAG) || env.exists_in_scope(ENV_WHILE_FLAG)
}

/// Evaluates a `let`/`const` declaration.
///
/// The name must not collide with a free built-in or an existing binding
/// in the current scope. The `for`-header scope is exempt from the
/// redeclaration check so induction re-`let`s work.
fn eval_let(name: &str, constant: bool, value: &Expr, env: &Rc<Environment>) -> EvalResult<Value> {
    if builtin::exists(name) {
        return Err(RuntimeError::BuiltinNameCollision { name: name.to_string() });
    }
    if env.exists_in_scope(name) && !env.exists_in_scope(ENV_FOR_FLAG) {
        return Err(RuntimeError::AlreadyDeclared { name: name.to_string() });
    }

    let value = eval_expression(value, env)?;
    let binding = if constant { Binding::constant(value) } else { Binding::new(value) };
    env.set(name, binding);

    Ok(Value::Empty)
}

/// Evaluates a named function declaration; the name binds as `const`.
fn eval_function_declaration(
    name: &str,
    function: &Expr,
    env: &Rc<Environment>,
) -> EvalResult<Value> {
    if env.exists_in_scope(name) {
        return Err(RuntimeError::FunctionAlreadyDeclared { name: name.to_string() });
    }
    if builtin::exists(name) {
        return Err(RuntimeError::BuiltinNameCollision { name: name.to_string() });
    }

    let function = eval_expression(function, env)?;
    env.set(name, Binding::constant(function));

    Ok(Value::Empty)
}

/// Evaluates an assignment or compound assignment.
///
/// The target must exist somewhere on the chain and not be `const`.
/// Compound operators apply the corresponding infix operation between the
/// old value and the right-hand side. The statement's value is the value
/// written.
fn eval_reassign(
    name: &str,
    operator: AssignOperator,
    value: &Expr,
    env: &Rc<Environment>,
) -> EvalResult<Value> {
    if builtin::exists(name) {
        return Err(RuntimeError::BuiltinReassignment { name: name.to_string() });
    }

    let binding = env
        .get(name)
        .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string() })?;
    if binding.constant {
        return Err(RuntimeError::ConstReassignment { name: name.to_string() });
    }

    let rhs = eval_expression(value, env)?;
    let new_value = match operator.infix() {
        Some(infix) => operator::eval_infix(infix, &binding.value, &rhs)?,
        None => rhs,
    };

    assign_walking_outward(name, new_value.clone(), env);
    Ok(new_value)
}

/// Writes a binding per the loop-body assignment rule.
///
/// Inside a `for` scope, a name that is not loop-local but exists in an
/// ancestor is written to that ancestor; everything else writes to the
/// current scope. This is what lets `for` bodies update outer counters
/// while still permitting loop-local shadowing.
fn assign_walking_outward(name: &str, value: Value, env: &Rc<Environment>) {
    if env.exists_in_scope(ENV_FOR_FLAG)
        && !env.exists_in_scope(name)
        && env.exists_outside_scope(name)
    {
        env.set_outside_scope(name, Binding::new(value));
    } else {
        env.set(name, Binding::new(value));
    }
}

/// Evaluates postfix `++`/`--`.
///
/// The target must be a non-`const` identifier bound to an integer or
/// float. The incremented value is written back under the loop-body
/// assignment rule; the expression's result is the original value.
fn eval_postfix(
    operator: PostfixOperator,
    target: &Expr,
    env: &Rc<Environment>,
) -> EvalResult<Value> {
    let name = match target {
        Expr::Identifier(name) => name,
        _ => return Err(RuntimeError::InvalidPostfixTarget),
    };

    let binding = env
        .get(name)
        .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string() })?;
    if binding.constant {
        return Err(RuntimeError::ConstReassignment { name: name.to_string() });
    }

    let (new_value, original) = match (&binding.value, operator) {
        (Value::Integer(value), PostfixOperator::Increment) => {
            (Value::Integer(value.wrapping_add(1)), Value::Integer(*value))
        },
        (Value::Integer(value), PostfixOperator::Decrement) => {
            (Value::Integer(value.wrapping_sub(1)), Value::Integer(*value))
        },
        (Value::Float(value), PostfixOperator::Increment) => {
            (Value::Float(value + 1.0), Value::Float(*value))
        },
        (Value::Float(value), PostfixOperator::Decrement) => {
            (Value::Float(value - 1.0), Value::Float(*value))
        },
        _ => return Err(RuntimeError::WrongPostfixType),
    };

    assign_walking_outward(name, new_value, env);
    Ok(original)
}

/// Evaluates an `if`/`else if`/`else` chain.
///
/// Branch conditions evaluate in order; the first truthy condition's block
/// is the result. With no match, the `else` block applies when present,
/// `null` otherwise.
fn eval_if(
    conditions: &[(Expr, Block)],
    alternative: Option<&Block>,
    env: &Rc<Environment>,
) -> EvalResult<Value> {
    for (condition, block) in conditions {
        let condition = eval_expression(condition, env)?;
        if condition.is_truthy() {
            return eval_block(block, env);
        }
    }

    match alternative {
        Some(block) => eval_block(block, env),
        None => Ok(Value::Null),
    }
}

/// Evaluates a hash literal, checking key hashability.
fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Rc<Environment>) -> EvalResult<Value> {
    let mut map = HashMap::new();

    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env)?;
        let hash_key = match key.hash_key() {
            Some(hash_key) => hash_key,
            None => return Err(RuntimeError::UnusableHashKey { key_type: key.type_name() }),
        };

        let value = eval_expression(value_expression, env)?;
        map.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::hash(map))
}
