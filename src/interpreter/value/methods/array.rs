use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::{Elements, Value},
            methods::Builtin,
        },
    },
};

/// The method table for array values.
pub const METHODS: &[Builtin] = &[
    Builtin { name: "first", func: first },
    Builtin { name: "last", func: last },
    Builtin { name: "rest", func: rest },
    Builtin { name: "push", func: push },
    Builtin { name: "pop", func: pop },
    Builtin { name: "pushleft", func: pushleft },
    Builtin { name: "popleft", func: popleft },
    Builtin { name: "slice", func: slice },
    Builtin { name: "clear", func: clear },
];

/// Looks up an array method by name.
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    METHODS.iter().find(|builtin| builtin.name == name).copied()
}

/// Extracts the array receiver of a built-in, or reports a type error.
fn receiver(function: &'static str, args: &[Value]) -> EvalResult<Elements> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.clone()),
        other => Err(RuntimeError::WrongArgumentType {
            function,
            want: "ARRAY",
            got: other.type_name(),
        }),
    }
}

/// Checks the exact argument count of a built-in.
fn check_arity(args: &[Value], want: usize) -> EvalResult<()> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongNumberOfArguments { got: args.len(), want: want.to_string() })
    }
}

/// Returns the first element of an array, or `null` when it is empty.
pub fn first(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;
    let elements = receiver("first", args)?;
    let elements = elements.borrow();
    Ok(elements.first().cloned().unwrap_or(Value::Null))
}

/// Returns the last element of an array, or `null` when it is empty.
pub fn last(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;
    let elements = receiver("last", args)?;
    let elements = elements.borrow();
    Ok(elements.last().cloned().unwrap_or(Value::Null))
}

/// Returns a new array holding every element but the first, or `null` when
/// the receiver is empty.
pub fn rest(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;
    let elements = receiver("rest", args)?;
    let elements = elements.borrow();
    if elements.is_empty() {
        return Ok(Value::Null);
    }
    Ok(Value::array(elements[1..].to_vec()))
}

/// Appends an element in place and returns the array.
pub fn push(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2)?;
    let elements = receiver("push", args)?;
    elements.borrow_mut().push(args[1].clone());
    Ok(args[0].clone())
}

/// Removes and returns the last element; errors on an empty array.
pub fn pop(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;
    let elements = receiver("pop", args)?;
    let popped = elements.borrow_mut().pop();
    popped.ok_or(RuntimeError::EmptyArray { function: "pop" })
}

/// Prepends an element in place and returns the array.
pub fn pushleft(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2)?;
    let elements = receiver("pushleft", args)?;
    elements.borrow_mut().insert(0, args[1].clone());
    Ok(args[0].clone())
}

/// Removes and returns the first element; errors on an empty array.
pub fn popleft(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;
    let elements = receiver("popleft", args)?;
    let mut elements = elements.borrow_mut();
    if elements.is_empty() {
        return Err(RuntimeError::EmptyArray { function: "popleft" });
    }
    Ok(elements.remove(0))
}

/// Returns a new array with the elements of `[lo, hi)`.
///
/// Errors when the receiver is empty, a bound is not an integer, `lo < 0`,
/// `hi >= len - 1`, or `lo > hi`.
pub fn slice(args: &[Value]) -> EvalResult<Value> {
    if args.len() != 3 {
        return Err(RuntimeError::WrongNumberOfArguments {
            got: args.len() - 1,
            want: "2".to_string(),
        });
    }
    let elements = receiver("slice", args)?;
    let elements = elements.borrow();
    if elements.is_empty() {
        return Err(RuntimeError::EmptySlice);
    }

    let (low, high) = match (&args[1], &args[2]) {
        (Value::Integer(low), Value::Integer(high)) => (*low, *high),
        (Value::Integer(_), other) | (other, _) => {
            return Err(RuntimeError::WrongArgumentType {
                function: "slice",
                want: "INTEGER",
                got: other.type_name(),
            });
        },
    };

    let len = elements.len();
    if low < 0 || high >= len as i64 - 1 || low > high {
        return Err(RuntimeError::SliceOutOfRange { low, high, len });
    }

    Ok(Value::array(elements[low as usize..high as usize].to_vec()))
}

/// Empties the array in place and returns it.
pub fn clear(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;
    let elements = receiver("clear", args)?;
    elements.borrow_mut().clear();
    Ok(args[0].clone())
}
