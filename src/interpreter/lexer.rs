use logos::Logos;
use tracing::{debug, trace};

use crate::error::LexError;

/// The kind of a lexical token.
///
/// The set is closed: every token the lexer produces carries one of these
/// kinds. `Null` and `EndOfInput` are never matched from source text; the
/// former is reserved for a `null` keyword and the latter is appended by
/// [`tokenize`] once the input is exhausted.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\r]+")]
pub enum TokenKind {
    /// Reserved for the `null` keyword.
    Null,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// Identifier tokens; variable names such as `x` or `total_count`. A name
    /// starts with a letter; digits are never part of a name.
    #[regex(r"[A-Za-z][A-Za-z_]*")]
    Identifier,
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// `+`, `-`, `*`, `/` and `%`. The token text tells them apart.
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    BinaryOperator,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `{`
    #[token("{")]
    OpenBrace,
    /// `}`
    #[token("}")]
    CloseBrace,
    /// `[`
    #[token("[")]
    OpenBracket,
    /// `]`
    #[token("]")]
    CloseBracket,
    /// Marks the end of the token stream.
    EndOfInput,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Null => "'null'",
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Let => "'let'",
            Self::Const => "'const'",
            Self::BinaryOperator => "operator",
            Self::Equals => "'='",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::OpenParen => "'('",
            Self::CloseParen => "')'",
            Self::OpenBrace => "'{'",
            Self::CloseBrace => "'}'",
            Self::OpenBracket => "'['",
            Self::CloseBracket => "']'",
            Self::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// The source line.
    pub line:   usize,
    /// The column within the line, counted in characters.
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A single token: its kind, the literal text it was built from, and where it
/// starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The exact source text of the token. Numbers keep their digits here;
    /// conversion to `f64` happens in the parser.
    pub text:     String,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Text carried by the [`TokenKind::EndOfInput`] token.
    pub const END_OF_INPUT_TEXT: &'static str = "EndOfFile";

    /// Builds the end-of-input marker at `position`.
    #[must_use]
    pub fn end_of_input(position: Position) -> Self {
        Self { kind: TokenKind::EndOfInput,
               text: Self::END_OF_INPUT_TEXT.to_string(),
               position }
    }
}

/// Tracks the line and column of a byte offset that only moves forward.
///
/// Each call to [`Cursor::advance_to`] scans only the text between the
/// previous offset and the new one, so positioning every token of an input
/// costs a single pass over it.
struct Cursor<'s> {
    source:   &'s str,
    offset:   usize,
    position: Position,
}

impl<'s> Cursor<'s> {
    const fn new(source: &'s str) -> Self {
        Self { source,
               offset: 0,
               position: Position { line: 1, column: 1 } }
    }

    /// Moves to `offset`, which must not be behind the current one.
    fn advance_to(&mut self, offset: usize) -> Position {
        for c in self.source.get(self.offset..offset).unwrap_or_default().chars() {
            if c == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
        self.offset = self.offset.max(offset);
        self.position
    }
}

/// Converts source text into a token sequence.
///
/// Scans left to right, producing one token per number, identifier, keyword,
/// punctuation mark or operator and discarding whitespace. The returned vector
/// always ends with exactly one [`TokenKind::EndOfInput`] token.
///
/// # Errors
/// Returns [`LexError::UnrecognizedCharacter`] for the first character that
/// does not start any token.
///
/// # Example
/// ```
/// use ozl::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("let x = 5;").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let,
///             TokenKind::Identifier,
///             TokenKind::Equals,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::EndOfInput]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut cursor = Cursor::new(source);
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let position = cursor.advance_to(lexer.span().start);
        let Ok(kind) = kind else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(LexError::UnrecognizedCharacter { character, position });
        };
        trace!(?kind, text = lexer.slice(), %position, "token");
        tokens.push(Token { kind,
                            text: lexer.slice().to_string(),
                            position });
    }

    tokens.push(Token::end_of_input(cursor.advance_to(source.len())));
    debug!(count = tokens.len(), "tokenized source");

    Ok(tokens)
}
