/// Core evaluation logic.
///
/// Contains the program/block/statement walkers, declarations and
/// assignment (including the loop-body outer-write rule), identifier
/// resolution, conditionals, and literal construction.
pub mod core;
/// Prefix and infix operator evaluation.
///
/// Implements the coercion rules: integer and float arithmetic with
/// Python-style modulo, tolerant float comparison, string coercion, the
/// boolean combinators, and identity equality.
pub mod operator;
/// Loop evaluation.
///
/// Implements the classic `for`, `for-in`, and `while` loops, their scope
/// markers, and `break`/`continue` sentinel handling.
pub mod loops;
/// Index expression evaluation for arrays, strings, and hashes.
pub mod index;
/// Call and method-call evaluation.
///
/// Applies user functions (closure environments, arity checks, return
/// unwrapping) and native built-ins, and performs receiver-context method
/// dispatch.
pub mod function;
/// The free built-in registry (`len`, `print`, and the array helpers).
pub mod builtin;
