use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - identifiers
/// - the `null` literal
/// - number literals
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := identifier
///              | "null"
///              | number
///              | "(" expression ")"
/// ```
/// # Errors
/// Any other token is reported as `UnexpectedToken`.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token.kind {
        TokenKind::Identifier => Ok(Expr::Identifier { name: token.text.clone() }),
        TokenKind::Null => Ok(Expr::NullLiteral),
        TokenKind::Number => parse_number(token),
        TokenKind::OpenParen => parse_grouping(tokens),
        _ => Err(unexpected(token, "expression")),
    }
}

/// Converts the digits of a number token to a [`Expr::NumericLiteral`].
///
/// Literals too large for `f64` become `inf`.
fn parse_number(token: &Token) -> ParseResult<Expr> {
    token.text
         .parse()
         .map(|value| Expr::NumericLiteral { value })
         .map_err(|_| unexpected(token, "number"))
}

/// Parses the rest of a parenthesized expression.
///
/// The opening `(` has already been consumed; the inner expression is
/// returned as-is, without a wrapper node.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens)?;
    expect(tokens, TokenKind::CloseParen, "closing ')' after parenthesized expression")?;
    Ok(expr)
}
