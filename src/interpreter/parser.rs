/// Parser state, the precedence ladder, and the Pratt expression engine.
///
/// Contains the `Parser` struct over the token stream (two tokens of
/// lookahead), token helpers, error recovery, and the precedence-climbing
/// expression loop.
pub mod core;
/// Expression productions.
///
/// Implements the prefix, infix, postfix, and literal handlers the Pratt
/// engine dispatches to: literals, identifiers, grouping, conditionals,
/// function literals, arrays, hashes, calls, indexing, and method calls.
pub mod expression;
/// Statement productions.
///
/// Implements the statement grammar: declarations, assignments, returns,
/// loops, `break`/`continue`, blocks, and expression statements.
pub mod statement;

pub use self::core::{Parser, Precedence};
