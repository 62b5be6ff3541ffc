/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A name was declared twice in the same scope.
    #[error("Cannot declare variable '{name}' as it is already defined.")]
    DuplicateBinding {
        /// The name of the variable.
        name: String,
    },
    /// No scope in the chain defines the name.
    #[error("Cannot resolve '{name}' as it does not exist.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to assign to a binding declared with `const`.
    #[error("Cannot reassign constant variable '{name}'.")]
    ConstantReassignment {
        /// The name of the constant.
        name: String,
    },
    /// The left-hand side of an assignment was not an identifier.
    #[error("Invalid left-hand side in assignment: {target}.")]
    InvalidAssignmentTarget {
        /// The kind of node found on the left-hand side.
        target: &'static str,
    },
    /// A node the evaluator has no rule for.
    #[error("{kind} cannot be evaluated.")]
    UnsupportedNode {
        /// The kind of node reached.
        kind: &'static str,
    },
}
