use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value, value::methods::Builtin},
};

/// The method table for string values.
pub const METHODS: &[Builtin] = &[
    Builtin { name: "lower", func: lower },
    Builtin { name: "upper", func: upper },
    Builtin { name: "capitalize", func: capitalize },
    Builtin { name: "split", func: split },
];

/// Looks up a string method by name.
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    METHODS.iter().find(|builtin| builtin.name == name).copied()
}

/// Extracts a non-empty string receiver, or reports an error.
///
/// Strings are immutable values; every method returns a new string.
fn receiver<'a>(function: &'static str, args: &'a [Value]) -> EvalResult<&'a str> {
    let value = match &args[0] {
        Value::Str(value) => value,
        other => {
            return Err(RuntimeError::WrongArgumentType {
                function,
                want: "STRING",
                got: other.type_name(),
            });
        },
    };
    if value.is_empty() {
        return Err(RuntimeError::EmptyString);
    }
    Ok(value)
}

/// Checks the exact argument count of a built-in.
fn check_arity(args: &[Value], total: usize, want: &str) -> EvalResult<()> {
    if args.len() == total {
        Ok(())
    } else {
        Err(RuntimeError::WrongNumberOfArguments { got: args.len(), want: want.to_string() })
    }
}

/// Returns the lowercase form of the receiver.
pub fn lower(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1, "0")?;
    let value = receiver("lower", args)?;
    Ok(Value::Str(value.to_lowercase()))
}

/// Returns the uppercase form of the receiver.
pub fn upper(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1, "0")?;
    let value = receiver("upper", args)?;
    Ok(Value::Str(value.to_uppercase()))
}

/// Returns the receiver with its first Unicode scalar uppercased.
pub fn capitalize(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1, "0")?;
    let value = receiver("capitalize", args)?;
    let mut chars = value.chars();
    let capitalized = match chars.next() {
        Some(head) => head.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    Ok(Value::Str(capitalized))
}

/// Splits the receiver around a delimiter into an array of strings.
///
/// An empty delimiter splits into single-scalar strings.
pub fn split(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2, "1")?;
    let value = receiver("split", args)?;
    let delimiter = match &args[1] {
        Value::Str(delimiter) => delimiter,
        other => {
            return Err(RuntimeError::WrongArgumentType {
                function: "split",
                want: "STRING",
                got: other.type_name(),
            });
        },
    };

    let parts: Vec<Value> = if delimiter.is_empty() {
        value.chars().map(|c| Value::Str(c.to_string())).collect()
    } else {
        value.split(delimiter.as_str()).map(Value::from).collect()
    };

    Ok(Value::array(parts))
}
