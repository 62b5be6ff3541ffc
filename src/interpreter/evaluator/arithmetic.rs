use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluate},
        value::RuntimeValue,
    },
};

/// Evaluates both operands of a binary expression, left first, and combines
/// them with [`eval_binary`].
pub(in crate::interpreter::evaluator) fn eval_binary_expression(left: &Expr,
                                                                operator: BinaryOperator,
                                                                right: &Expr,
                                                                env: &Environment)
                                                                -> EvalResult<RuntimeValue> {
    let left = left.evaluate(env)?;
    let right = right.evaluate(env)?;
    Ok(eval_binary(operator, &left, &right))
}

/// Applies an arithmetic operator to two values.
///
/// Only two numbers combine; any other pairing yields `null` instead of an
/// error. Division by zero follows `f64` semantics.
///
/// # Example
/// ```
/// use ozl::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::arithmetic::eval_binary, value::RuntimeValue},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &RuntimeValue::Number(2.0), &RuntimeValue::Number(3.0));
/// assert_eq!(sum, RuntimeValue::Number(5.0));
///
/// let mixed = eval_binary(BinaryOperator::Add, &RuntimeValue::Null, &RuntimeValue::Number(1.0));
/// assert_eq!(mixed, RuntimeValue::Null);
/// ```
#[must_use]
pub fn eval_binary(operator: BinaryOperator, left: &RuntimeValue, right: &RuntimeValue) -> RuntimeValue {
    match (left, right) {
        (RuntimeValue::Number(l), RuntimeValue::Number(r)) => RuntimeValue::Number(operator.apply(*l, *r)),
        _ => RuntimeValue::Null,
    }
}
