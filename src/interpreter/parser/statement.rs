use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier, peek},
        },
    },
};

/// Parses a single statement.
///
/// A statement is either a variable declaration, introduced by `let` or
/// `const`, or an expression used as a statement. Expression statements may
/// be followed by one optional `;`.
///
/// Grammar: `statement := declaration | expression ";"?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    match peek(tokens)?.kind {
        TokenKind::Let | TokenKind::Const => parse_variable_declaration(tokens),
        _ => {
            let expr = parse_expression(tokens)?;
            if peek(tokens)?.kind == TokenKind::Semicolon {
                tokens.next();
            }
            Ok(Statement::Expression(expr))
        },
    }
}

/// Parses a variable declaration statement.
///
/// Supported forms:
///
/// - `let <identifier>;`
/// - `let <identifier> = <expression>;`
/// - `const <identifier> = <expression>;`
///
/// A `let` without initializer declares the name with an implicit `null`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the keyword is not followed by an identifier,
/// - a `const` declaration has no initializer,
/// - `=` or the terminating `;` is missing,
/// - the initializer is malformed.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;
    let constant = keyword.kind == TokenKind::Const;

    let identifier = parse_identifier(tokens, "identifier name following 'let' or 'const'")?;

    let next = peek(tokens)?;
    if next.kind == TokenKind::Semicolon {
        if constant {
            return Err(ParseError::MissingConstantValue { name:     identifier,
                                                          position: next.position, });
        }
        tokens.next();
        return Ok(Statement::VariableDeclaration { identifier,
                                                   constant: false,
                                                   value: None });
    }

    expect(tokens, TokenKind::Equals, "'=' following identifier in variable declaration")?;
    let value = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon, "';' after variable declaration")?;

    Ok(Statement::VariableDeclaration { identifier,
                                        constant,
                                        value: Some(value) })
}
