use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_assignment, parse_expression},
            primary::parse_primary,
            utils::{expect, parse_comma_separated, peek},
        },
    },
};

/// Parses a member expression optionally followed by call suffixes.
///
/// Calls can be chained, so `f()()` calls the result of `f()`.
///
/// Grammar: `call_member := member ("(" arguments? ")")*`
pub fn parse_call_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut expr = parse_member(tokens)?;

    while peek(tokens)?.kind == TokenKind::OpenParen {
        let args = parse_arguments(tokens)?;
        expr = Expr::CallExpression { callee: Box::new(expr),
                                      args };
    }

    Ok(expr)
}

/// Parses a parenthesized, comma-separated argument list.
///
/// Grammar: `arguments := "(" (assignment ("," assignment)*)? ")"`
fn parse_arguments<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::OpenParen, "'(' before arguments")?;
    parse_comma_separated(tokens, parse_assignment, TokenKind::CloseParen)
}

/// Parses property access on a primary expression.
///
/// Two forms are accepted and may be mixed freely:
///
/// 1. **Dot access** `object.property`, where the property must be a plain
///    identifier.
/// 2. **Computed access** `object[expression]`.
///
/// Grammar:
/// ```text
///     member := primary ("." identifier | "[" expression "]")*
/// ```
/// # Errors
/// Returns a `ParseError` if:
/// - the property after `.` is not an identifier,
/// - a `[` is not closed with `]`,
/// - the property expression fails to parse.
pub fn parse_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut object = parse_primary(tokens)?;

    loop {
        match peek(tokens)?.kind {
            TokenKind::Dot => {
                tokens.next();
                let position = peek(tokens)?.position;
                let property = parse_primary(tokens)?;
                if !matches!(property, Expr::Identifier { .. }) {
                    return Err(ParseError::InvalidMemberProperty { position });
                }
                object = Expr::MemberExpression { object:   Box::new(object),
                                                  property: Box::new(property),
                                                  computed: false, };
            },
            TokenKind::OpenBracket => {
                tokens.next();
                let property = parse_expression(tokens)?;
                expect(tokens, TokenKind::CloseBracket, "closing ']' in computed member access")?;
                object = Expr::MemberExpression { object:   Box::new(object),
                                                  property: Box::new(property),
                                                  computed: true, };
            },
            _ => break,
        }
    }

    Ok(object)
}
