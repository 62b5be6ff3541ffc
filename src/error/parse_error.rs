use crate::interpreter::lexer::{Position, TokenKind};

/// Represents all errors that can occur during parsing.
///
/// Parsing stops at the first error; there is no resynchronization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The current token does not fit the grammar at this point.
    #[error("Error on {position}: Expected {expected}, found {found} '{text}'.")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The kind of the token actually found.
        found:    TokenKind,
        /// The text of the token actually found.
        text:     String,
        /// Where the token starts.
        position: Position,
    },
    /// A `const` declaration without an initializer.
    #[error("Error on {position}: Constant '{name}' requires a value.")]
    MissingConstantValue {
        /// The name being declared.
        name:     String,
        /// Where the declaration ends.
        position: Position,
    },
    /// The property after `.` was not a plain identifier.
    #[error("Error on {position}: Only identifiers may follow the '.' operator.")]
    InvalidMemberProperty {
        /// Where the property starts.
        position: Position,
    },
    /// The parser read past the end-of-input marker. Every entry point
    /// supplies that marker and no rule moves past it, so reaching this is a
    /// parser bug rather than a problem with the source.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
}
