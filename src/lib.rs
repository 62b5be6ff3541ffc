//! # ozl
//!
//! ozl is a small expression-oriented scripting language written in Rust.
//! Source text is tokenized, parsed into an abstract syntax tree and evaluated
//! directly by walking the tree against a chain of lexical scopes.

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
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{
    environment::Environment, evaluator::core::evaluate, parser::core::parse, value::RuntimeValue,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every failure is returned as a typed error rather than aborting, so a
/// host such as the REPL can report one failed submission and continue.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, evaluation and value
/// representations.
pub mod interpreter;
/// Interactive session driver.
///
/// Reads one submission per line and evaluates each against a single
/// environment that lives for the whole session.
pub mod repl;

pub use error::Error;

/// Parses and evaluates `source` against an existing environment.
///
/// Declarations made by `source` stay visible in `env` afterwards, which is
/// what lets a session evaluate several submissions in a row.
///
/// # Errors
/// Returns the first lex, parse or runtime error encountered.
///
/// # Examples
/// ```
/// use ozl::{interpreter::{environment::Environment, value::RuntimeValue}, run};
///
/// let env = Environment::global();
/// run("let x = 5;", &env).unwrap();
///
/// assert_eq!(run("x + 1;", &env).unwrap(), RuntimeValue::Number(6.0));
/// ```
pub fn run(source: &str, env: &Environment) -> Result<RuntimeValue, Error> {
    let program = parse(source)?;
    let value = evaluate(&program, env)?;
    debug!(%value, "evaluated program");
    Ok(value)
}

/// Returns the final evaluation result of `source` in a fresh global scope.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use ozl::{get_result, interpreter::value::RuntimeValue};
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(get_result("2 + 3 * 4;").unwrap(), RuntimeValue::Number(14.0));
///
/// // Example with an intentional error (unknown variable).
/// assert!(get_result("let y = x + 1;").is_err());
/// ```
pub fn get_result(source: &str) -> Result<RuntimeValue, Error> {
    run(source, &Environment::global())
}
