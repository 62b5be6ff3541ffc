/// Core evaluation logic.
///
/// Contains the `Evaluate` trait, the `evaluate` entry point and the dispatch
/// from node kinds to evaluation rules.
pub mod core;

/// Arithmetic evaluation.
///
/// Applies `+ - * /` to two numbers and maps every other operand combination
/// to `null`.
pub mod arithmetic;

/// Expression evaluation.
///
/// Assignments and object literals.
pub mod expression;

/// Statement evaluation.
///
/// Programs and variable declarations.
pub mod statement;
