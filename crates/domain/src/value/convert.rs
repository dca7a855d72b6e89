//! Conversions into `Value`

use serde::Serialize;

use super::{Array, ErrorValue, FunctionRef, Object, Symbol, TypedArray, Value};
use crate::error::{DomainError, DomainResult};

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn from(n: $ty) -> Self {
                    Self::Number(n as f64)
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Undefined
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().collect())
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Self::Symbol(s)
    }
}

impl From<FunctionRef> for Value {
    fn from(f: FunctionRef) -> Self {
        Self::Function(f)
    }
}

impl From<ErrorValue> for Value {
    fn from(e: ErrorValue) -> Self {
        Self::Error(e)
    }
}

impl From<TypedArray> for Value {
    fn from(t: TypedArray) -> Self {
        Self::TypedArray(t)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<&Array> for Value {
    fn from(a: &Array) -> Self {
        Self::Array(a.clone())
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Self::Object(o)
    }
}

impl From<&Object> for Value {
    fn from(o: &Object) -> Self {
        Self::Object(o.clone())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::Array(items.into_iter().collect()),
            serde_json::Value::Object(map) => Self::Object(map.into_iter().collect()),
        }
    }
}

impl Value {
    /// Converts any serde-serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSerialize`] when serde rejects the value,
    /// e.g. a map with non-string keys.
    pub fn try_from_serialize<T: Serialize + ?Sized>(value: &T) -> DomainResult<Self> {
        serde_json::to_value(value)
            .map(Self::from)
            .map_err(|e| DomainError::InvalidSerialize(e.to_string()))
    }

    /// Converts any serde-serializable value, capturing a failure as an error value.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        Self::try_from_serialize(value)
            .unwrap_or_else(|e| Self::Error(ErrorValue::from_error(&e)))
    }
}
