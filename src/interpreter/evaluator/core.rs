use tracing::trace;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            arithmetic::eval_binary_expression,
            expression::{eval_assignment, eval_object_literal},
            statement::{eval_program, eval_variable_declaration},
        },
        value::RuntimeValue,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A syntax tree node that can be evaluated against an environment.
///
/// Implemented for every node family of the AST. Each implementation matches
/// exhaustively on its variants, so adding a variant fails to compile until
/// it has an evaluation rule.
pub trait Evaluate {
    /// Evaluates `self`, reading and updating bindings in `env`.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised anywhere in the subtree.
    fn evaluate(&self, env: &Environment) -> EvalResult<RuntimeValue>;
}

/// Evaluates any node against `env`.
///
/// # Example
/// ```
/// use ozl::{
///     ast::Expr,
///     interpreter::{
///         environment::Environment,
///         evaluator::core::evaluate,
///         value::RuntimeValue,
///     },
/// };
///
/// let env = Environment::global();
/// let node = Expr::NumericLiteral { value: 3.0 };
///
/// assert_eq!(evaluate(&node, &env).unwrap(), RuntimeValue::Number(3.0));
/// ```
pub fn evaluate<N: Evaluate + ?Sized>(node: &N, env: &Environment) -> EvalResult<RuntimeValue> {
    node.evaluate(env)
}

impl Evaluate for Program {
    fn evaluate(&self, env: &Environment) -> EvalResult<RuntimeValue> {
        eval_program(&self.body, env)
    }
}

impl Evaluate for Statement {
    fn evaluate(&self, env: &Environment) -> EvalResult<RuntimeValue> {
        match self {
            Self::VariableDeclaration { identifier,
                                        constant,
                                        value, } => {
                eval_variable_declaration(identifier, *constant, value.as_ref(), env)
            },
            Self::Expression(expr) => expr.evaluate(env),
        }
    }
}

impl Evaluate for Expr {
    fn evaluate(&self, env: &Environment) -> EvalResult<RuntimeValue> {
        trace!(kind = self.kind_name(), "evaluate");

        match self {
            Self::NumericLiteral { value } => Ok(RuntimeValue::Number(*value)),
            Self::NullLiteral => Ok(RuntimeValue::Null),
            Self::Identifier { name } => env.lookup(name),
            Self::BinaryExpression { left,
                                     right,
                                     operator, } => eval_binary_expression(left, *operator, right, env),
            Self::AssignmentExpression { target, value } => eval_assignment(target, value, env),
            Self::ObjectLiteral { properties } => eval_object_literal(properties, env),
            Self::MemberExpression { .. } | Self::CallExpression { .. } => {
                Err(RuntimeError::UnsupportedNode { kind: self.kind_name() })
            },
        }
    }
}
