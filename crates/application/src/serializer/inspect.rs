//! Human-readable debug text for values that are not plain data
//!
//! Errors, byte buffers and typed arrays are rendered as inspection strings
//! which the serializer then embeds as JSON strings.

use linelog_domain::{ErrorValue, TypedArray, TypedElement};

use super::{Ancestors, number, quote, serialize};

/// Bytes shown in a buffer dump before the remainder is summarised.
pub const BUFFER_INSPECT_MAX_BYTES: usize = 50;

/// Elements shown in a typed array dump before the remainder is summarised.
pub const TYPED_ARRAY_INSPECT_MAX_ITEMS: usize = 10;

/// `<Buffer 68 69>`, truncated after [`BUFFER_INSPECT_MAX_BYTES`] bytes.
pub fn buffer(bytes: &[u8]) -> String {
    let shown: Vec<String> = bytes
        .iter()
        .take(BUFFER_INSPECT_MAX_BYTES)
        .map(|b| format!("{b:02x}"))
        .collect();
    let mut out = format!("<Buffer {}", shown.join(" "));
    let remaining = bytes.len().saturating_sub(BUFFER_INSPECT_MAX_BYTES);
    if remaining > 0 {
        out.push_str(&format!(" ... {remaining} more {}", plural(remaining, "byte")));
    }
    out.push('>');
    out
}

/// `Uint8Array(3) [ 1, 2, 3 ]` on a single line, truncated after
/// [`TYPED_ARRAY_INSPECT_MAX_ITEMS`] elements.
pub fn typed_array(array: &TypedArray) -> String {
    let header = format!("{}({})", array.kind_name(), array.len());
    if array.is_empty() {
        return format!("{header} []");
    }

    let mut items: Vec<String> = array
        .elements()
        .take(TYPED_ARRAY_INSPECT_MAX_ITEMS)
        .map(element)
        .collect();
    let remaining = array.len().saturating_sub(TYPED_ARRAY_INSPECT_MAX_ITEMS);
    if remaining > 0 {
        items.push(format!("... {remaining} more {}", plural(remaining, "item")));
    }
    format!("{header} [ {} ]", items.join(", "))
}

fn element(e: TypedElement) -> String {
    match e {
        TypedElement::Int(i) => i.to_string(),
        TypedElement::Float(f) => number::inspect(f),
        TypedElement::BigInt(i) => format!("{i}n"),
        TypedElement::BigUint(u) => format!("{u}n"),
    }
}

/// Multi-field summary of an error.
///
/// `name: message` leads, followed by the stack on the next line unless the
/// stack already starts with that header. Extra fields follow in braces and
/// causes are appended one per line.
pub fn error_summary(err: &ErrorValue, ancestors: &Ancestors<'_>) -> String {
    let header = if err.message().is_empty() {
        err.name().to_string()
    } else {
        format!("{}: {}", err.name(), err.message())
    };
    let mut out = match err.stack() {
        Some(stack) if stack.starts_with(&header) => stack.to_string(),
        Some(stack) => format!("{header}\n{stack}"),
        None => header,
    };

    let extras: Vec<String> = err
        .fields()
        .filter_map(|(key, value)| {
            serialize(value, ancestors)
                .into_json()
                .map(|text| format!("{}: {text}", field_key(key)))
        })
        .collect();
    if !extras.is_empty() {
        out.push_str(&format!(" {{ {} }}", extras.join(", ")));
    }

    if let Some(cause) = err.cause() {
        out.push_str("\n[cause]: ");
        out.push_str(&error_summary(cause, ancestors));
    }
    out
}

// Identifier-like keys print bare, anything else is quoted.
fn field_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_ident { key.to_string() } else { quote(key) }
}

fn plural(count: usize, word: &str) -> String {
    if count > 1 {
        format!("{word}s")
    } else {
        word.to_string()
    }
}
