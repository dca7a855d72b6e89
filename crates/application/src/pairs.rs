//! Pair formatter
//!
//! Turns a context value into `"key":value,` fragments that splice directly
//! into a larger object literal. Object-shaped data contributes its own
//! fields; anything else is nested under `"data"`.

use linelog_domain::{Object, Value};

use crate::serializer::{Fragment, to_fragment};

/// Field name used for data that is not object-shaped.
pub const DATA_KEY: &str = "data";

/// Field name a bare error is wrapped under.
pub const ERROR_KEY: &str = "err";

/// Formats `data` as comma-terminated fields, or an empty string when it
/// contributes nothing (absent, `null`, or an object without fields).
#[must_use]
pub fn format_pairs(data: &Value) -> String {
    let fragment = match data {
        Value::Error(err) => to_fragment(&Object::new().with(ERROR_KEY, err.clone()).into()),
        other => to_fragment(other),
    };

    match fragment {
        Fragment::Absent | Fragment::Null => String::new(),
        Fragment::Object(fields) if fields.is_empty() => String::new(),
        Fragment::Object(fields) => format!("{fields},"),
        Fragment::Json(text) => format!("\"{DATA_KEY}\":{text},"),
    }
}
