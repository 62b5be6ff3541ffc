/// The environment module implements lexical scopes.
///
/// An environment maps names to runtime values, remembers which names are
/// constants and falls back to its parent scope for lookups and assignments.
///
/// # Responsibilities
/// - Declares, assigns and looks up bindings.
/// - Protects constant bindings from reassignment.
/// - Resolves names through the chain of enclosing scopes.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, performs arithmetic, builds objects and
/// manages variable state through the environment. It is the only phase with
/// side effects.
///
/// # Responsibilities
/// - Evaluates every AST node kind, or reports it as unsupported.
/// - Reports scope and assignment errors.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// numbers, identifiers, keywords, punctuation and operators. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind, text and position.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into AST nodes (statements and expressions).
/// - Reports the first grammar violation with its position.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `RuntimeValue` enum: null, booleans, numbers and objects.
/// - Formats values for display.
pub mod value;
