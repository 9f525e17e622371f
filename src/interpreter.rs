/// The lexer module tokenizes source code for parsing.
///
/// The lexer reads raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, string,
/// identifier, operator, delimiter, or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Skips whitespace and both comment forms, never halting on bad input.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions, using Pratt-style precedence climbing with two tokens
/// of lookahead.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Accumulates parse errors while recovering at statement boundaries.
/// - Supports the full statement grammar: declarations, loops, conditionals,
///   assignments, and expression statements.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST recursively against a threaded environment,
/// producing runtime values. Control flow (`return`, `break`, `continue`)
/// travels as sentinel values; failures travel as `Result` errors.
///
/// # Responsibilities
/// - Evaluates every AST node kind, applying the coercion rules.
/// - Manages declarations, reassignment, loops, calls, and method dispatch.
/// - Reports runtime errors with the language's canonical messages.
pub mod evaluator;
/// The environment module implements the scope chain.
///
/// Scopes are reference-counted records with interior mutability, forming
/// a parent chain from innermost scope to the root. Closures capture a
/// handle to their defining scope.
///
/// # Responsibilities
/// - Name lookup walking outward, scope-local writes, and ancestor writes.
/// - Tracks the `const` flag of each binding.
/// - Hosts the sentinel names that mark loop and receiver contexts.
pub mod environment;
/// The value module defines the runtime data types.
///
/// Declares the tagged `Value` union, hash-key computation for the
/// hashable scalar kinds, and the per-type method tables reachable through
/// `receiver.method(args)`.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Implements inspect formatting, type names, and truthiness.
/// - Provides the shared `Builtin` wrapper for native functions.
pub mod value;
