use crate::{
    ast::{Expr, Property},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluate},
        value::{ObjectValue, RuntimeValue},
    },
};

/// Evaluates `target = value`.
///
/// The target must be an identifier; it is checked before the value is
/// evaluated. The assigned value is also the result.
pub(in crate::interpreter::evaluator) fn eval_assignment(target: &Expr,
                                                         value: &Expr,
                                                         env: &Environment)
                                                         -> EvalResult<RuntimeValue> {
    let Expr::Identifier { name } = target else {
        return Err(RuntimeError::InvalidAssignmentTarget { target: target.kind_name() });
    };

    let value = value.evaluate(env)?;
    env.assign(name, value)
}

/// Builds an object from its properties, in source order.
///
/// Shorthand properties read the variable named after the key.
pub(in crate::interpreter::evaluator) fn eval_object_literal(properties: &[Property],
                                                             env: &Environment)
                                                             -> EvalResult<RuntimeValue> {
    let mut object = ObjectValue::new();

    for Property { key, value } in properties {
        let value = match value {
            Some(expr) => expr.evaluate(env)?,
            None => env.lookup(key)?,
        };
        object.insert(key.as_str(), value);
    }

    Ok(object.into())
}
