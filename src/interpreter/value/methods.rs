use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Methods on array values.
///
/// Mirrors the free array helpers (`first`, `push`, …) so calls chain off
/// a receiver, and adds `slice` and `clear`.
pub mod array;
/// Methods on hash values (`get`, `set`, `delete`, `keys`, `values`,
/// `clear`, `contains`).
pub mod hash;
/// Methods on string values (`lower`, `upper`, `capitalize`, `split`).
pub mod string;

/// Type alias for native built-in handlers.
///
/// A built-in receives the evaluated argument values; for method calls the
/// receiver is prepended as the first argument.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// A named native function exposed to programs.
///
/// Used for both the free built-ins (`len`, `print`, …) and per-type
/// methods; the evaluator wraps it in [`Value::Builtin`] during identifier
/// resolution.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name programs call it by.
    pub name: &'static str,
    /// The native implementation.
    pub func: BuiltinFn,
}
