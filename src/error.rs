/// Lexing errors.
///
/// Raised while turning source text into tokens. The only failure mode is a
/// character that cannot start any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the AST from tokens:
/// unexpected tokens, missing delimiters and malformed declarations.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, including
/// the scope errors reported by the environment.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the lex, parse and evaluate pipeline.
///
/// A session driver can match on this to report one failed submission and
/// keep going.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source contained a character that does not start any token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of a well-formed program failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
