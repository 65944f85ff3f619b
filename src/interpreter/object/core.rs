use std::{fmt, rc::Rc};

use crate::{
    ast::FunctionLiteral,
    interpreter::{
        evaluator::function::core::BuiltinDef,
        object::{environment::Env, hash_key::HashMapObject},
    },
};

/// The shared `true` value.
pub const TRUE: Object = Object::Boolean(true);
/// The shared `false` value.
pub const FALSE: Object = Object::Boolean(false);
/// The shared `null` value.
pub const NULL: Object = Object::Null;

/// Type tag of a runtime value, as it appears in error messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// `INTEGER`
    Integer,
    /// `STRING`
    String,
    /// `BOOLEAN`
    Boolean,
    /// `NULL`
    Null,
    /// `ARRAY`
    Array,
    /// `HASH`
    Hash,
    /// `FUNCTION`
    Function,
    /// `BUILTIN`
    Builtin,
    /// `ERROR`
    Error,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::Array => "ARRAY",
            Self::Hash => "HASH",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

/// A user-defined function value: a function literal paired with the
/// environment that was active when the literal was evaluated.
#[derive(Clone)]
pub struct Function {
    /// Parameters and body, shared with the syntax tree.
    pub literal: Rc<FunctionLiteral>,
    /// The captured defining scope.
    pub env:     Env,
}

impl fmt::Debug for Function {
    // The captured environment may contain this very function.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("literal", &self.literal.to_string())
         .finish_non_exhaustive()
    }
}

/// Represents a runtime value in the interpreter.
///
/// `Error` is what evaluation hands back when a runtime error stopped it. A
/// `return` is not a value; it travels as
/// [`Signal::Return`](crate::interpreter::evaluator::core::Signal::Return).
#[derive(Debug, Clone)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A string.
    String(Rc<str>),
    /// `true` or `false`.
    Boolean(bool),
    /// The absence of a value.
    Null,
    /// An ordered sequence of values.
    Array(Rc<Vec<Self>>),
    /// A mapping from hashable keys to values.
    Hash(Rc<HashMapObject>),
    /// A closure.
    Function(Rc<Function>),
    /// A native function.
    Builtin(&'static BuiltinDef),
    /// A runtime error message.
    Error(String),
}

impl Object {
    /// The type tag of this value.
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::String(_) => ObjectType::String,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::Null => ObjectType::Null,
            Self::Array(_) => ObjectType::Array,
            Self::Hash(_) => ObjectType::Hash,
            Self::Function(_) => ObjectType::Function,
            Self::Builtin(_) => ObjectType::Builtin,
            Self::Error(_) => ObjectType::Error,
        }
    }

    /// Whether the value counts as true in a condition.
    ///
    /// Everything is truthy except `null` and `false`.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::object::core::{FALSE, NULL, Object};
    ///
    /// assert!(Object::Integer(0).is_truthy());
    /// assert!(!FALSE.is_truthy());
    /// assert!(!NULL.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Returns `true` if the value is an [`Object::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Maps a native boolean onto the shared boolean values.
    #[must_use]
    pub const fn from_native_bool(value: bool) -> Self {
        if value {
            TRUE
        } else {
            FALSE
        }
    }
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        Self::from_native_bool(v)
    }
}

impl From<&str> for Object {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Object {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Self>> for Object {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;

                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{}: {}", pair.key, pair.value)?;
                }

                write!(f, "}}")
            },
            Self::Function(function) => {
                let parameters = function.literal
                                         .parameters
                                         .iter()
                                         .map(|p| p.name.as_str())
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "fn({parameters}) {{\n{}\n}}", function.literal.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}
