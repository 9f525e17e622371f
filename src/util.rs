/// Numeric helpers.
///
/// This module provides the floating-point comparison and modulo routines
/// shared by the evaluator. Use these helpers whenever language semantics
/// call for tolerant float equality or Python-style remainders instead of
/// the raw machine operators.
pub mod num;
