use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::{Rc, Weak},
};

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::RuntimeValue},
};

/// Names every global scope starts with. All three are constants.
pub const GLOBAL_CONSTANTS: [&str; 3] = ["true", "false", "null"];

#[derive(Debug, Default)]
struct Scope {
    bindings:  RefCell<HashMap<String, RuntimeValue>>,
    constants: RefCell<HashSet<String>>,
    parent:    Option<Weak<Scope>>,
}

/// A handle to one scope in a chain of lexical scopes.
///
/// Cloning the handle does not copy the scope: both clones see the same
/// bindings. A child scope only holds a weak reference to its parent, so the
/// caller that created the parent must keep it alive for as long as the child
/// is used. Once the parent is dropped its names no longer resolve.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    scope: Rc<Scope>,
}

impl Environment {
    /// Creates an empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the root scope of a run, with `true`, `false` and `null`
    /// already declared as constants.
    ///
    /// ```
    /// use ozl::interpreter::{environment::Environment, value::RuntimeValue};
    ///
    /// let env = Environment::global();
    ///
    /// assert_eq!(env.lookup("true").unwrap(), RuntimeValue::Boolean(true));
    /// assert!(env.is_constant("null"));
    /// ```
    #[must_use]
    pub fn global() -> Self {
        let env = Self::new();
        let values = [RuntimeValue::Boolean(true), RuntimeValue::Boolean(false), RuntimeValue::Null];
        {
            let mut bindings = env.scope.bindings.borrow_mut();
            let mut constants = env.scope.constants.borrow_mut();
            for (name, value) in GLOBAL_CONSTANTS.into_iter().zip(values) {
                bindings.insert(name.to_string(), value);
                constants.insert(name.to_string());
            }
        }
        env
    }

    /// Creates a child scope whose lookups fall back to `parent`.
    #[must_use]
    pub fn with_parent(parent: &Self) -> Self {
        Self { scope: Rc::new(Scope { parent: Some(Rc::downgrade(&parent.scope)),
                                      ..Scope::default() }), }
    }

    /// The enclosing scope, if there is one and it is still alive.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.scope
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|scope| Self { scope })
    }

    /// Returns `true` if both handles refer to the same scope.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.scope, &other.scope)
    }

    /// Returns `true` if `name` is bound in this scope, ignoring parents.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.scope.bindings.borrow().contains_key(name)
    }

    /// Returns `true` if `name` resolves to a constant binding.
    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.resolve(name)
            .is_ok_and(|env| env.scope.constants.borrow().contains(name))
    }

    /// Binds `name` in this scope.
    ///
    /// Shadowing a binding of a parent scope is allowed.
    ///
    /// # Errors
    /// Returns `DuplicateBinding` if `name` is already bound in this scope.
    pub fn declare(&self, name: &str, value: RuntimeValue, constant: bool) -> EvalResult<RuntimeValue> {
        if self.contains_local(name) {
            return Err(RuntimeError::DuplicateBinding { name: name.to_string() });
        }

        trace!(name, constant, %value, "declare");
        if constant {
            self.scope.constants.borrow_mut().insert(name.to_string());
        }
        self.scope
            .bindings
            .borrow_mut()
            .insert(name.to_string(), value.clone());

        Ok(value)
    }

    /// Overwrites the binding of `name` in the scope that defines it.
    ///
    /// Assignment never creates a binding.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if no scope defines `name`, and
    /// `ConstantReassignment` if the defining scope declared it constant.
    pub fn assign(&self, name: &str, value: RuntimeValue) -> EvalResult<RuntimeValue> {
        let env = self.resolve(name)?;

        if env.scope.constants.borrow().contains(name) {
            return Err(RuntimeError::ConstantReassignment { name: name.to_string() });
        }

        trace!(name, %value, "assign");
        env.scope
           .bindings
           .borrow_mut()
           .insert(name.to_string(), value.clone());

        Ok(value)
    }

    /// Returns the value bound to `name` in the nearest defining scope.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if no scope defines `name`.
    pub fn lookup(&self, name: &str) -> EvalResult<RuntimeValue> {
        let env = self.resolve(name)?;
        let value = env.scope.bindings.borrow().get(name).cloned();
        value.ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }

    /// Finds the nearest scope, starting with this one, that binds `name`.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if neither this scope nor any live ancestor
    /// binds `name`.
    pub fn resolve(&self, name: &str) -> EvalResult<Self> {
        if self.contains_local(name) {
            return Ok(self.clone());
        }

        match self.parent() {
            Some(parent) => parent.resolve(name),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string() }),
        }
    }
}
