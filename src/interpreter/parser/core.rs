use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::{Error, ParseError},
    interpreter::{
        lexer::{Position, Token, TokenKind, tokenize},
        parser::{object::parse_object_expression, statement::parse_statement, utils::peek},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Lexes and parses a complete source text.
///
/// # Errors
/// Returns [`Error::Lex`] if the text contains an unrecognized character and
/// [`Error::Parse`] if the tokens do not form a valid program.
///
/// # Example
/// ```
/// use ozl::{
///     ast::{Expr, Statement},
///     interpreter::parser::core::parse,
/// };
///
/// let program = parse("42;").unwrap();
///
/// assert_eq!(program.body,
///            [Statement::Expression(Expr::NumericLiteral { value: 42.0 })]);
/// ```
pub fn parse(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    let program = parse_tokens(&tokens)?;
    Ok(program)
}

/// Parses an already tokenized source text.
///
/// [`tokenize`] ends its output with a [`TokenKind::EndOfInput`] token. A
/// slice without one is parsed as if the marker followed its last token, so
/// running out of tokens is reported with a position like any other
/// unexpected token.
///
/// # Example
/// ```
/// use ozl::{ast::Program, interpreter::parser::core::parse_tokens};
///
/// assert_eq!(parse_tokens(&[]).unwrap(), Program::default());
/// ```
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Program> {
    if tokens.last().is_some_and(|t| t.kind == TokenKind::EndOfInput) {
        return parse_program(&mut tokens.iter().peekable());
    }

    let end = match tokens.last() {
        Some(last) => Position { line:   last.position.line,
                                 column: last.position.column + last.text.chars().count(), },
        None => Position { line: 1, column: 1 },
    };
    let terminated: Vec<Token> = tokens.iter()
                                       .cloned()
                                       .chain(std::iter::once(Token::end_of_input(end)))
                                       .collect();
    parse_program(&mut terminated.iter().peekable())
}

/// Parses statements until the end-of-input marker.
///
/// Grammar: `program := statement*`
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut body = Vec::new();

    while peek(tokens)?.kind != TokenKind::EndOfInput {
        body.push(parse_statement(tokens)?);
    }

    debug!(statements = body.len(), "parsed program");
    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, assignment.
///
/// Grammar: `expression := assignment`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_assignment(tokens)
}

/// Parses an assignment expression.
///
/// Assignment is right-associative, so `a = b = c` parses as `a = (b = c)`.
/// Any expression is accepted as the target here; only identifiers survive
/// evaluation.
///
/// Grammar: `assignment := object ("=" assignment)?`
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let target = parse_object_expression(tokens)?;

    if peek(tokens)?.kind == TokenKind::Equals {
        tokens.next();
        let value = parse_assignment(tokens)?;
        return Ok(Expr::AssignmentExpression { target: Box::new(target),
                                               value:  Box::new(value), });
    }

    Ok(target)
}
