//! Dynamic value domain
//!
//! `Value` covers everything a caller can hand to the logger: primitives,
//! the unset value, callables, errors, byte buffers, typed numeric arrays
//! and the two shared containers. Containers are reference handles so that
//! cyclic and diamond-shaped graphs can be expressed.

mod container;
mod convert;
mod error_value;
mod typed_array;

use std::fmt;

pub use container::{Array, ContainerId, Object};
pub use error_value::ErrorValue;
pub use typed_array::{TypedArray, TypedElement};

/// A unique atom with an optional description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Symbol {
    description: Option<String>,
}

impl Symbol {
    /// Creates a symbol with a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }

    /// Creates a symbol without a description.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { description: None }
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

/// A callable value. It never appears in serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionRef {
    name: Option<String>,
}

impl FunctionRef {
    /// Creates a named function reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Returns the function name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Any value that can be logged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Boolean primitive.
    Bool(bool),
    /// Number primitive (IEEE double).
    Number(f64),
    /// String primitive.
    String(String),
    /// Unique atom.
    Symbol(Symbol),
    /// The unset value.
    #[default]
    Undefined,
    /// A callable.
    Function(FunctionRef),
    /// Explicit null.
    Null,
    /// Error-like value.
    Error(ErrorValue),
    /// Binary byte buffer.
    Buffer(Vec<u8>),
    /// Typed numeric array.
    TypedArray(TypedArray),
    /// Ordered collection, shared by reference.
    Array(Array),
    /// Plain object, shared by reference.
    Object(Object),
}

impl Value {
    /// Creates a byte buffer value.
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Buffer(bytes.into())
    }

    /// Creates an empty object value.
    #[must_use]
    pub fn object() -> Self {
        Self::Object(Object::new())
    }

    /// Creates an empty array value.
    #[must_use]
    pub fn array() -> Self {
        Self::Array(Array::new())
    }

    /// Returns true for the unset value and for callables.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Undefined | Self::Function(_))
    }

    /// Returns true for the explicit null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string slice for string primitives.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the object handle for plain objects.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the array handle for ordered collections.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the container identity for arrays and objects.
    #[must_use]
    pub fn container_id(&self) -> Option<ContainerId> {
        match self {
            Self::Array(a) => Some(a.id()),
            Self::Object(o) => Some(o.id()),
            _ => None,
        }
    }
}
