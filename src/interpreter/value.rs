/// Core value representation.
///
/// Defines the `Value` enum with all runtime variants, type names,
/// truthiness, and the inspect `Display` implementation used by `print`
/// and the REPL echo.
pub mod core;
/// Hash-key computation.
///
/// Defines the `HashKey` digest for the hashable scalar kinds (integers,
/// booleans, strings) and the `HashPair` entries stored in hash values.
pub mod hash_key;
/// Per-type method tables.
///
/// Houses the built-in methods reachable through `receiver.method(args)`
/// for arrays, hashes, and strings, plus the `Builtin` function-pointer
/// wrapper shared with the free built-in registry.
pub mod methods;
