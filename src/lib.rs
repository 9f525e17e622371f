//! # cixac
//!
//! cixac is an interpreter for Cixac, a small dynamically typed, C-family
//! scripting language with first-class functions, closures, lexical
//! scoping, arrays and hash maps, built-in functions and methods, and
//! imperative control flow. Programs are evaluated by a recursive
//! tree-walking evaluator; there is no bytecode stage.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc, clippy::cast_possible_truncation, clippy::cast_sign_loss,
         clippy::cast_precision_loss, clippy::cast_possible_wrap, clippy::module_name_repetitions)]

use std::rc::Rc;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::core::eval_program,
        lexer::tokenize,
        parser::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression enums that represent
/// source code as a tree. The AST is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Defines the operator enums shared by parser and evaluator.
/// - Reproduces canonical source text through `Display`.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code. Parse errors carry source lines; runtime errors
/// render the language's canonical messages.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Implements `Display` and `std::error::Error` for both.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the value
/// representation, and the environment chain to provide a complete runtime
/// for Cixac programs.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator, values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Interactive read-eval-print loop.
///
/// Provides the line-edited REPL used by the `cixac` binary: history,
/// multi-line continuation, `quit()`, and result echo against a
/// persistent environment.
pub mod repl;
/// General numeric utilities shared across the interpreter.
pub mod util;

/// Runs a program in a fresh environment.
///
/// The source is tokenized, parsed, and evaluated. When the parser reports
/// errors, evaluation is skipped and the errors are returned; otherwise
/// the result carries the final value (`None` when the program produced no
/// user-visible value) or the runtime error that stopped it.
///
/// # Parameters
/// - `source`: UTF-8 Cixac source text.
///
/// # Returns
/// The evaluation outcome paired with all parser errors.
///
/// # Example
/// ```
/// use cixac::run;
///
/// let (outcome, errors) = run("let x = 2 + 3; x");
/// assert!(errors.is_empty());
/// assert_eq!(outcome.unwrap().unwrap().to_string(), "5");
///
/// let (outcome, errors) = run("const a = 7; a = 10");
/// assert!(errors.is_empty());
/// assert_eq!(
///     outcome.unwrap_err().to_string(),
///     "Identifier a is const and can't be reassigned"
/// );
/// ```
#[must_use]
pub fn run(source: &str) -> (Result<Option<Value>, RuntimeError>, Vec<ParseError>) {
    let env = Environment::new();
    run_with_env(source, &env)
}

/// Runs a program against an existing environment.
///
/// Like [`run`], but declarations persist in `env`, which is how the REPL
/// keeps state across inputs.
///
/// # Parameters
/// - `source`: UTF-8 Cixac source text.
/// - `env`: The environment to evaluate against.
///
/// # Returns
/// The evaluation outcome paired with all parser errors.
#[must_use]
pub fn run_with_env(
    source: &str,
    env: &Rc<Environment>,
) -> (Result<Option<Value>, RuntimeError>, Vec<ParseError>) {
    let mut parser = Parser::new(tokenize(source));
    let program = parser.parse_program();
    let errors = parser.into_errors();

    if !errors.is_empty() {
        return (Ok(None), errors);
    }

    let outcome = eval_program(&program, env).map(|value| match value {
        Value::Empty => None,
        value => Some(value),
    });

    (outcome, errors)
}

/// Runs a program and renders the outcome as a string.
///
/// This is the embed entry point: it returns the inspect form of the last
/// value, an empty string when there is none, `Error: <message>` for a
/// runtime error, or the parser errors tab-indented one per line.
///
/// # Parameters
/// - `source`: UTF-8 Cixac source text.
///
/// # Returns
/// The rendered outcome.
///
/// # Example
/// ```
/// use cixac::run_script;
///
/// assert_eq!(run_script(r#""foo" + " " + 5"#), "foo 5");
/// assert_eq!(run_script("let x = 1"), "");
/// assert_eq!(
///     run_script("const a = 7; a = 10"),
///     "Error: Identifier a is const and can't be reassigned"
/// );
/// ```
#[must_use]
pub fn run_script(source: &str) -> String {
    let (outcome, errors) = run(source);

    if !errors.is_empty() {
        return errors
            .iter()
            .map(|error| format!("\t{error}"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    match outcome {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => String::new(),
        Err(error) => format!("Error: {error}"),
    }
}
