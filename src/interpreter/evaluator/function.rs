use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Binding, Environment},
        evaluator::core::{self, EvalResult, ENV_OBJECT_BUILTIN_FLAG},
        value::core::Value,
    },
};

/// Evaluates a list of expressions left to right.
///
/// The first error aborts the whole list.
pub fn eval_expressions(expressions: &[Expr], env: &Rc<Environment>) -> EvalResult<Vec<Value>> {
    expressions.iter().map(|expression| core::eval_expression(expression, env)).collect()
}

/// Evaluates a call expression `callee(args)`.
pub fn eval_call(function: &Expr, arguments: &[Expr], env: &Rc<Environment>) -> EvalResult<Value> {
    let function = core::eval_expression(function, env)?;
    let arguments = eval_expressions(arguments, env)?;
    apply_function(&function, arguments)
}

/// Applies a function value to already-evaluated arguments.
///
/// User functions evaluate their body in a fresh scope enclosing the
/// captured environment, with parameters bound positionally; a `return`
/// sentinel unwraps at this boundary. Built-ins receive the argument
/// vector directly.
pub fn apply_function(function: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match function {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Err(RuntimeError::WrongNumberOfArguments {
                    got: arguments.len(),
                    want: function.parameters.len().to_string(),
                });
            }

            let env = Environment::new_enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                env.set(parameter, Binding::new(argument));
            }

            let result = core::eval_block(&function.body, &env)?;
            Ok(unwrap_return(result))
        },
        Value::Builtin(builtin) => (builtin.func)(&arguments),
        other => Err(RuntimeError::NotAFunction { callee: other.type_name() }),
    }
}

/// Evaluates a method call `receiver.name(args)`.
///
/// The receiver is stashed in an enclosed scope under the receiver-context
/// sentinel and the method name resolves through ordinary identifier
/// lookup, so an environment binding can shadow a built-in method. The
/// receiver is prepended to the argument vector before application.
pub fn eval_method(
    receiver: &Expr,
    name: &str,
    arguments: &[Expr],
    env: &Rc<Environment>,
) -> EvalResult<Value> {
    let receiver = core::eval_expression(receiver, env)?;

    let method_env = Environment::new_enclosed(env);
    method_env.set(ENV_OBJECT_BUILTIN_FLAG, Binding::new(receiver.clone()));
    let method = core::eval_identifier(name, &method_env)?;

    let mut arguments = eval_expressions(arguments, env)?;
    arguments.insert(0, receiver);
    apply_function(&method, arguments)
}

/// Unwraps a `return` sentinel into its inner value.
fn unwrap_return(value: Value) -> Value {
    match value {
        Value::Return(value) => *value,
        value => value,
    }
}
