use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{
            core::{Pairs, Value},
            hash_key::{HashKey, HashPair},
            methods::Builtin,
        },
    },
};

/// The method table for hash values.
pub const METHODS: &[Builtin] = &[
    Builtin { name: "get", func: get },
    Builtin { name: "set", func: set },
    Builtin { name: "delete", func: delete },
    Builtin { name: "keys", func: keys },
    Builtin { name: "values", func: values },
    Builtin { name: "clear", func: clear },
    Builtin { name: "contains", func: contains },
];

/// Looks up a hash method by name.
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    METHODS.iter().find(|builtin| builtin.name == name).copied()
}

/// Extracts the hash receiver of a built-in, or reports a type error.
fn receiver(function: &'static str, args: &[Value]) -> EvalResult<Pairs> {
    match &args[0] {
        Value::Hash(pairs) => Ok(pairs.clone()),
        other => Err(RuntimeError::WrongArgumentType {
            function,
            want: "HASH",
            got: other.type_name(),
        }),
    }
}

/// Checks the exact argument count of a built-in.
///
/// `want` is the user-visible arity (the receiver is not counted in it,
/// but is counted in `got`, matching the historical message shape).
fn check_arity(args: &[Value], total: usize, want: &str) -> EvalResult<()> {
    if args.len() == total {
        Ok(())
    } else {
        Err(RuntimeError::WrongNumberOfArguments { got: args.len(), want: want.to_string() })
    }
}

/// Computes the digest of a key argument, or reports it unhashable.
fn key_of(function: &'static str, key: &Value) -> EvalResult<HashKey> {
    key.hash_key().ok_or(RuntimeError::UnhashableArgument { function })
}

/// Returns the value stored under a key; errors when the key is absent.
pub fn get(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2, "1")?;
    let pairs = receiver("get", args)?;
    let key = key_of("get", &args[1])?;
    let pairs = pairs.borrow();
    pairs.get(&key).map(|pair| pair.value.clone()).ok_or(RuntimeError::KeyNotFound)
}

/// Stores a value under a key and returns `Empty`.
pub fn set(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 3, "2")?;
    let pairs = receiver("set", args)?;
    let key = key_of("set", &args[1])?;
    pairs
        .borrow_mut()
        .insert(key, HashPair { key: args[1].clone(), value: args[2].clone() });
    Ok(Value::Empty)
}

/// Removes the pair stored under a key and returns `Empty`.
///
/// Deleting an absent key is not an error.
pub fn delete(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2, "1")?;
    let pairs = receiver("delete", args)?;
    let key = key_of("delete", &args[1])?;
    pairs.borrow_mut().remove(&key);
    Ok(Value::Empty)
}

/// Returns the keys as a new array, in unspecified order.
pub fn keys(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1, "0")?;
    let pairs = receiver("keys", args)?;
    let keys: Vec<Value> = pairs.borrow().values().map(|pair| pair.key.clone()).collect();
    Ok(Value::array(keys))
}

/// Returns the values as a new array, in unspecified order.
pub fn values(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1, "0")?;
    let pairs = receiver("values", args)?;
    let values: Vec<Value> = pairs.borrow().values().map(|pair| pair.value.clone()).collect();
    Ok(Value::array(values))
}

/// Empties the hash in place and returns it.
pub fn clear(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1, "0")?;
    let pairs = receiver("clear", args)?;
    pairs.borrow_mut().clear();
    Ok(args[0].clone())
}

/// Tests whether a key is present.
pub fn contains(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2, "1")?;
    let pairs = receiver("contains", args)?;
    let key = key_of("contains", &args[1])?;
    let present = pairs.borrow().contains_key(&key);
    Ok(Value::Bool(present))
}
