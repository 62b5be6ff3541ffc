use std::{cell::RefCell, rc::Rc};

/// Represents a runtime value in the interpreter.
///
/// Values are immutable once built, except for the property table of an
/// object, which is shared between clones of the same value.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeValue {
    /// The absence of a value. Also the result of mixed-type arithmetic.
    Null,
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An object with named properties in insertion order.
    Object(Rc<RefCell<ObjectValue>>),
}

impl From<f64> for RuntimeValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for RuntimeValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<ObjectValue> for RuntimeValue {
    fn from(v: ObjectValue) -> Self {
        Self::Object(Rc::new(RefCell::new(v)))
    }
}

impl RuntimeValue {
    /// Returns the number held by this value, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Object(o) => write!(f, "{}", o.borrow()),
        }
    }
}

/// The property table of an object value.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps
/// its original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectValue {
    properties: Vec<(String, RuntimeValue)>,
}

impl ObjectValue {
    /// Creates an object with no properties.
    #[must_use]
    pub const fn new() -> Self {
        Self { properties: Vec::new() }
    }

    /// Sets `key` to `value`.
    ///
    /// ```
    /// use ozl::interpreter::value::{ObjectValue, RuntimeValue};
    ///
    /// let mut object = ObjectValue::new();
    /// object.insert("a", RuntimeValue::Number(1.0));
    /// object.insert("b", RuntimeValue::Null);
    /// object.insert("a", RuntimeValue::Number(2.0));
    ///
    /// assert_eq!(object.keys().collect::<Vec<_>>(), ["a", "b"]);
    /// assert_eq!(object.get("a"), Some(&RuntimeValue::Number(2.0)));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: RuntimeValue) {
        let key = key.into();
        if let Some(slot) = self.properties.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.properties.push((key, value));
        }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RuntimeValue> {
        self.properties
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Property names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(k, _)| k.as_str())
    }

    /// Properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuntimeValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if the object has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, RuntimeValue)> for ObjectValue {
    fn from_iter<T: IntoIterator<Item = (K, RuntimeValue)>>(iter: T) -> Self {
        let mut object = Self::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl std::fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "{{}}");
        }

        write!(f, "{{ ")?;

        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{key}: {value}")?;
        }

        write!(f, " }}")
    }
}
