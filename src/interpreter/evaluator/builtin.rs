use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::Value,
            methods::{array, Builtin},
        },
    },
};

/// The free built-in registry.
///
/// These names resolve globally when no environment binding matches, and
/// may not be declared or reassigned by programs. The array helpers are
/// the same implementations the array method table exposes, so the free
/// and method forms behave identically.
pub const BUILTINS: &[Builtin] = &[
    Builtin { name: "len", func: len },
    Builtin { name: "first", func: array::first },
    Builtin { name: "last", func: array::last },
    Builtin { name: "rest", func: array::rest },
    Builtin { name: "push", func: array::push },
    Builtin { name: "pop", func: array::pop },
    Builtin { name: "pushleft", func: array::pushleft },
    Builtin { name: "popleft", func: array::popleft },
    Builtin { name: "print", func: print },
];

/// Looks up a free built-in by name.
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name).copied()
}

/// Tests whether a name is a registered free built-in.
#[must_use]
pub fn exists(name: &str) -> bool {
    lookup(name).is_some()
}

/// Returns the length of an array, string (in bytes), or hash.
fn len(args: &[Value]) -> EvalResult<Value> {
    if args.len() != 1 {
        return Err(RuntimeError::WrongNumberOfArguments {
            got: args.len(),
            want: "1".to_string(),
        });
    }

    match &args[0] {
        Value::Array(elements) => Ok(Value::Integer(elements.borrow().len() as i64)),
        Value::Str(value) => Ok(Value::Integer(value.len() as i64)),
        Value::Hash(pairs) => Ok(Value::Integer(pairs.borrow().len() as i64)),
        other => Err(RuntimeError::LenNotSupported { got: other.type_name() }),
    }
}

/// Prints each argument's inspect form on its own line and returns `null`.
fn print(args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        println!("{arg}");
    }
    Ok(Value::Null)
}
