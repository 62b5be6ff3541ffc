/// Parser entry points and the expression root.
///
/// Holds the `ParseResult` alias, the program loop and the assignment level,
/// which is the top of the expression grammar.
pub mod core;

/// Statement parsing.
///
/// Dispatches between variable declarations and expression statements.
pub mod statement;

/// Object literal parsing.
///
/// Parses `{ key: value, shorthand }` and falls through to the additive level
/// when no `{` is present.
pub mod object;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels.
pub mod binary;

/// Call and member access parsing.
///
/// Handles `a.b`, `a[b]` and chained calls such as `f()()`.
pub mod postfix;

/// Primary expression parsing.
///
/// Identifiers, `null`, number literals and parenthesized expressions.
pub mod primary;

/// Utility functions for the parser.
///
/// Token lookahead, `expect` and comma-separated lists.
pub mod utils;
