/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into an
/// AST. Parse errors include missing tokens, tokens with no expression
/// handler, illegal characters, and malformed loop headers.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unknown operators and identifiers,
/// const-binding violations, arity mismatches, and control-flow misuse.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
