use std::iter::Peekable;

use crate::{
    ast::{Expr, Property},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_additive,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier, peek},
        },
    },
};

/// Parses an object literal, or falls through to the additive level.
///
/// Properties are separated by commas. A comma before the closing `}` is
/// accepted but not required.
///
/// Grammar:
/// ```text
///     object   := "{" (property ("," property)* ","?)? "}"
///               | additive
///     property := identifier (":" expression)?
/// ```
///
/// # Errors
/// Returns a `ParseError` if a key is not an identifier, a `:` or `,` is
/// missing, or the closing `}` never arrives.
pub fn parse_object_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if peek(tokens)?.kind != TokenKind::OpenBrace {
        return parse_additive(tokens);
    }
    tokens.next();

    let mut properties = Vec::new();
    while !matches!(peek(tokens)?.kind, TokenKind::CloseBrace | TokenKind::EndOfInput) {
        properties.push(parse_property(tokens)?);
    }

    expect(tokens, TokenKind::CloseBrace, "closing '}' on object literal")?;
    Ok(Expr::ObjectLiteral { properties })
}

/// Parses one `key`, `key,` or `key: expression` entry together with the
/// comma that separates it from the next one.
fn parse_property<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Property>
    where I: Iterator<Item = &'a Token> + Clone
{
    let key = parse_identifier(tokens, "object literal key")?;

    // Shorthand: `{ key }` or `{ key, ... }`.
    match peek(tokens)?.kind {
        TokenKind::Comma => {
            tokens.next();
            return Ok(Property { key, value: None });
        },
        TokenKind::CloseBrace => return Ok(Property { key, value: None }),
        _ => {},
    }

    expect(tokens, TokenKind::Colon, "':' in key: value pair")?;
    let value = parse_expression(tokens)?;

    if peek(tokens)?.kind != TokenKind::CloseBrace {
        expect(tokens, TokenKind::Comma, "',' or closing '}' following property")?;
    }

    Ok(Property { key,
                  value: Some(value) })
}
