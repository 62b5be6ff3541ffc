use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Returns the next token without consuming it.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` if the stream is exhausted, which only
/// happens when the end-of-input marker was already consumed.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().copied().ok_or(ParseError::UnexpectedEndOfInput)
}

/// Builds an `UnexpectedToken` error for `token`.
pub(in crate::interpreter::parser) fn unexpected(token: &Token, expected: &str) -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    token.kind,
                                  text:     token.text.clone(),
                                  position: token.position, }
}

/// Consumes the next token, which must be of `kind`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The required token kind.
/// - `expected`: Description used in the error message.
///
/// # Errors
/// Returns `UnexpectedToken` carrying the expected description, the token
/// found and its position.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(unexpected(token, expected)),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              expected: &str)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier, expected).map(|token| token.text.clone())
}

/// Parses a comma-separated list of items until a closing token.
///
/// The opening delimiter must already be consumed. An immediately
/// encountered closing token produces an empty list; a trailing comma is not
/// accepted.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or a token other than
/// `,` or the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if peek(tokens)?.kind == closing {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        let token = peek(tokens)?;
        match token.kind {
            TokenKind::Comma => {
                tokens.next();
            },
            kind if kind == closing => {
                tokens.next();
                break;
            },
            _ => return Err(unexpected(token, &format!("',' or {closing}"))),
        }
    }
    Ok(items)
}
