use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, postfix::parse_call_member},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An `Expr::BinaryExpression` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(operator) = token_to_binary_operator(token)
           && matches!(operator, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryExpression { left: Box::new(left),
                                            right: Box::new(right),
                                            operator };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. The lexer also produces
/// `%`, but no level of the grammar accepts it.
///
/// The rule is: `multiplicative := call_member (("*" | "/") call_member)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_call_member(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(operator) = token_to_binary_operator(token)
           && matches!(operator, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_call_member(tokens)?;
            left = Expr::BinaryExpression { left: Box::new(left),
                                            right: Box::new(right),
                                            operator };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not operators and for operator text
/// with no arithmetic meaning, such as `%`.
///
/// # Example
/// ```
/// use ozl::{
///     ast::BinaryOperator,
///     interpreter::{lexer::tokenize, parser::binary::token_to_binary_operator},
/// };
///
/// let tokens = tokenize("- %").unwrap();
///
/// assert_eq!(token_to_binary_operator(&tokens[0]), Some(BinaryOperator::Sub));
/// assert_eq!(token_to_binary_operator(&tokens[1]), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    if token.kind != TokenKind::BinaryOperator {
        return None;
    }
    BinaryOperator::from_symbol(&token.text)
}
