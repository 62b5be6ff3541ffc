use crate::interpreter::lexer::Position;

/// Represents all errors that can occur while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that does not begin any token.
    #[error("Error on {position}: Unrecognized character '{character}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears.
        position:  Position,
    },
}
