/// The arithmetic operators a [`Expr::BinaryExpression`] can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps operator text to its operator, if it is one of `+ - * /`.
    ///
    /// ```
    /// use ozl::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("*"), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol("%"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// The source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Applies the operator with `f64` semantics. Division by zero yields
    /// `inf` or `NaN` rather than an error.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every expression may also stand on its own as a statement. A parent owns
/// its children, so the tree is acyclic and dropped as a unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `target = value`. Only identifier targets can be evaluated.
    AssignmentExpression {
        /// The expression being assigned to.
        target: Box<Self>,
        /// The assigned expression.
        value:  Box<Self>,
    },
    /// `object.property` or `object[property]`.
    MemberExpression {
        /// The expression being accessed.
        object:   Box<Self>,
        /// The accessed property. An `Identifier` when not computed.
        property: Box<Self>,
        /// `true` for the bracketed form.
        computed: bool,
    },
    /// `callee(args...)`.
    CallExpression {
        /// The expression being called.
        callee: Box<Self>,
        /// Arguments in source order.
        args:   Vec<Self>,
    },
    /// `{ key: value, shorthand }`.
    ObjectLiteral {
        /// Properties in source order.
        properties: Vec<Property>,
    },
    /// A number literal.
    NumericLiteral {
        /// The literal value.
        value: f64,
    },
    /// The `null` literal.
    NullLiteral,
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
    },
    /// An arithmetic operation.
    BinaryExpression {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// The operator.
        operator: BinaryOperator,
    },
}

impl Expr {
    /// The name of the node kind, used in diagnostics.
    ///
    /// ```
    /// use ozl::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string() };
    ///
    /// assert_eq!(expr.kind_name(), "Identifier");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::AssignmentExpression { .. } => "AssignmentExpression",
            Self::MemberExpression { .. } => "MemberExpression",
            Self::CallExpression { .. } => "CallExpression",
            Self::ObjectLiteral { .. } => "ObjectLiteral",
            Self::NumericLiteral { .. } => "NumericLiteral",
            Self::NullLiteral => "NullLiteral",
            Self::Identifier { .. } => "Identifier",
            Self::BinaryExpression { .. } => "BinaryExpression",
        }
    }
}

/// A single entry of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The property name.
    pub key:   String,
    /// The value expression. `None` for the shorthand form, which reads the
    /// variable named `key` when evaluated.
    pub value: Option<Expr>,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name;`, `let name = value;` or `const name = value;`.
    VariableDeclaration {
        /// The declared name.
        identifier: String,
        /// `true` for `const`.
        constant:   bool,
        /// The initializer. Only `let` declarations may omit it.
        value:      Option<Expr>,
    },
    /// A standalone expression evaluated for its result.
    Expression(Expr),
}

impl From<Expr> for Statement {
    fn from(expr: Expr) -> Self {
        Self::Expression(expr)
    }
}

/// The root of a parsed source text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub body: Vec<Statement>,
}
