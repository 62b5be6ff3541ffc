use crate::{
    ast::{Expr, Statement},
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluate},
        value::RuntimeValue,
    },
};

/// Evaluates statements in order and returns the value of the last one.
///
/// An empty program evaluates to `null`.
pub(in crate::interpreter::evaluator) fn eval_program(body: &[Statement],
                                                      env: &Environment)
                                                      -> EvalResult<RuntimeValue> {
    let mut last = RuntimeValue::Null;

    for statement in body {
        last = statement.evaluate(env)?;
    }

    Ok(last)
}

/// Declares `identifier` in `env`, initialized to `value` or `null`.
pub(in crate::interpreter::evaluator) fn eval_variable_declaration(identifier: &str,
                                                                   constant: bool,
                                                                   value: Option<&Expr>,
                                                                   env: &Environment)
                                                                   -> EvalResult<RuntimeValue> {
    let value = match value {
        Some(expr) => expr.evaluate(env)?,
        None => RuntimeValue::Null,
    };
    env.declare(identifier, value, constant)
}
