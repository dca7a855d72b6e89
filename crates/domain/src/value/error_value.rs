//! Error-like values

use indexmap::IndexMap;

use super::Value;

/// An error captured as a value: name, message, optional stack trace,
/// optional cause and any extra fields attached by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorValue {
    name: String,
    message: String,
    stack: Option<String>,
    cause: Option<Box<ErrorValue>>,
    fields: IndexMap<String, Value>,
}

impl ErrorValue {
    /// Default error kind.
    pub const DEFAULT_NAME: &'static str = "Error";

    /// Creates an error with the default kind.
    pub fn new(message: impl Into<String>) -> Self {
        Self::named(Self::DEFAULT_NAME, message)
    }

    /// Creates an error with an explicit kind.
    pub fn named(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
            cause: None,
            fields: IndexMap::new(),
        }
    }

    /// Captures a Rust error, following its `source()` chain into causes.
    ///
    /// The kind is the short type name of `E`.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let mut value = Self::named(short_type_name::<E>(), err.to_string());
        value.cause = err.source().map(|source| Box::new(Self::from_source(source)));
        value
    }

    fn from_source(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut value = Self::new(err.to_string());
        value.cause = err.source().map(|source| Box::new(Self::from_source(source)));
        value
    }

    /// Attaches a stack trace.
    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Attaches a cause.
    #[must_use]
    pub fn with_cause(mut self, cause: Self) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Attaches an extra field. Later fields with the same key replace earlier ones.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The error kind.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The stack trace, if captured.
    #[must_use]
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// The cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }

    /// Extra fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if extra fields are attached.
    #[must_use]
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

fn short_type_name<E: ?Sized>() -> &'static str {
    let full = std::any::type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fmt;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("request failed")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_new_uses_default_name() {
        let err = ErrorValue::new("boom");
        assert_eq!(err.name(), "Error");
        assert_eq!(err.message(), "boom");
        assert!(err.stack().is_none());
        assert!(!err.has_fields());
    }

    #[test]
    fn test_from_error_follows_source_chain() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err = ErrorValue::from_error(&Outer(inner));

        assert_eq!(err.name(), "Outer");
        assert_eq!(err.message(), "request failed");
        let cause = err.cause().map(ErrorValue::message);
        assert_eq!(cause, Some("missing file"));
    }

    #[test]
    fn test_fields_keep_order() {
        let err = ErrorValue::new("x").with_field("b", 1).with_field("a", 2);
        let keys: Vec<&str> = err.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_short_type_name_strips_paths_and_generics() {
        assert_eq!(short_type_name::<std::io::Error>(), "Error");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec");
    }
}
