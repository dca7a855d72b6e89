//! Linelog Domain - Value model
//!
//! This crate defines the dynamic value domain that the serializer walks
//! and the severity table used by the logger.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod level;
pub mod value;

pub use error::{DomainError, DomainResult};
pub use level::Level;
pub use value::{
    Array, ContainerId, ErrorValue, FunctionRef, Object, Symbol, TypedArray, TypedElement, Value,
};
