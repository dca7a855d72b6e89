//! Lossy JSON serializer
//!
//! Converts any [`Value`] into a JSON fragment. Unlike a general-purpose
//! encoder it never fails:
//! - the unset value and callables produce no output at all
//!   ([`Fragment::Absent`]); object fields holding them are omitted while
//!   array slots holding them become `null`
//! - a container that is its own ancestor renders as [`CIRCULAR`]
//! - errors, byte buffers and typed arrays are rendered as inspection text
//!
//! Cycle detection is path-sensitive: only the containers between the root
//! and the current node are checked, so a container referenced twice from
//! unrelated branches is expanded twice. Very deep acyclic nesting is bounded
//! only by the call stack.

mod inspect;
mod number;

use linelog_domain::{Array, ContainerId, Object, Value};

pub use inspect::{BUFFER_INSPECT_MAX_BYTES, TYPED_ARRAY_INSPECT_MAX_ITEMS};

/// Text emitted in place of a container that is already being serialized.
pub const CIRCULAR: &str = "\"[Circular]\"";

/// Result of serializing one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// No output; the caller drops the field or uses `null` for an array slot.
    Absent,
    /// The `null` literal.
    Null,
    /// A JSON object, held as its comma-joined `"key":value` fields without braces.
    Object(String),
    /// Any other complete JSON fragment.
    Json(String),
}

impl Fragment {
    /// Returns the complete JSON text, or `None` for [`Fragment::Absent`].
    #[must_use]
    pub fn into_json(self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Null => Some("null".to_string()),
            Self::Object(fields) => Some(format!("{{{fields}}}")),
            Self::Json(text) => Some(text),
        }
    }

    /// Returns true for an object with no fields.
    #[must_use]
    pub fn is_empty_object(&self) -> bool {
        matches!(self, Self::Object(fields) if fields.is_empty())
    }
}

/// The containers on the path from the serialization root to the current node.
///
/// Each level lives on the stack of the call that serializes it, so a child
/// path extends its parent without touching what siblings see.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ancestors<'a> {
    id: Option<ContainerId>,
    parent: Option<&'a Ancestors<'a>>,
}

impl Ancestors<'_> {
    /// The empty path.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            id: None,
            parent: None,
        }
    }

    /// Returns a path extended by `id`.
    #[must_use]
    pub const fn child(&self, id: ContainerId) -> Ancestors<'_> {
        Ancestors {
            id: Some(id),
            parent: Some(self),
        }
    }

    /// Returns true if `id` is on the path.
    #[must_use]
    pub fn contains(&self, id: ContainerId) -> bool {
        let mut current = Some(self);
        while let Some(node) = current {
            if node.id == Some(id) {
                return true;
            }
            current = node.parent;
        }
        false
    }
}

/// Serializes a value from the root.
#[must_use]
pub fn to_fragment(value: &Value) -> Fragment {
    serialize(value, &Ancestors::root())
}

/// Serializes a value from the root into JSON text; `None` when the value is absent.
#[must_use]
pub fn to_json(value: &Value) -> Option<String> {
    to_fragment(value).into_json()
}

/// Serializes `value` given the containers already on the path.
#[must_use]
pub fn serialize(value: &Value, ancestors: &Ancestors<'_>) -> Fragment {
    match value {
        Value::Bool(b) => Fragment::Json(b.to_string()),
        Value::Number(n) => Fragment::Json(number::to_json(*n)),
        Value::String(s) => Fragment::Json(quote(s)),
        Value::Symbol(sym) => Fragment::Json(quote(&sym.to_string())),
        Value::Undefined | Value::Function(_) => Fragment::Absent,
        Value::Null => Fragment::Null,
        Value::Error(err) => Fragment::Json(quote(&inspect::error_summary(err, ancestors))),
        Value::Buffer(bytes) => Fragment::Json(quote(&inspect::buffer(bytes))),
        Value::TypedArray(array) => Fragment::Json(quote(&inspect::typed_array(array))),
        Value::Array(array) => serialize_array(array, ancestors),
        Value::Object(object) => serialize_object(object, ancestors),
    }
}

fn serialize_array(array: &Array, ancestors: &Ancestors<'_>) -> Fragment {
    if ancestors.contains(array.id()) {
        return Fragment::Json(CIRCULAR.to_string());
    }
    let path = ancestors.child(array.id());

    let items: Vec<String> = array
        .snapshot()
        .iter()
        .map(|item| {
            serialize(item, &path)
                .into_json()
                .unwrap_or_else(|| "null".to_string())
        })
        .collect();
    Fragment::Json(format!("[{}]", items.join(",")))
}

fn serialize_object(object: &Object, ancestors: &Ancestors<'_>) -> Fragment {
    if ancestors.contains(object.id()) {
        return Fragment::Json(CIRCULAR.to_string());
    }
    let path = ancestors.child(object.id());

    let fields: Vec<String> = object
        .snapshot()
        .iter()
        .filter_map(|(key, value)| {
            serialize(value, &path)
                .into_json()
                .map(|text| format!("{}:{text}", quote(key)))
        })
        .collect();
    Fragment::Object(fields.join(","))
}

/// JSON string encoding.
pub(crate) fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linelog_domain::{ErrorValue, FunctionRef, Symbol, TypedArray};
    use pretty_assertions::assert_eq;

    fn json(value: impl Into<Value>) -> Option<String> {
        to_json(&value.into())
    }

    #[test]
    fn test_primitives_use_standard_encoding() {
        assert_eq!(json(true), Some("true".into()));
        assert_eq!(json(false), Some("false".into()));
        assert_eq!(json(42), Some("42".into()));
        assert_eq!(json(-1.25), Some("-1.25".into()));
        assert_eq!(json("plain"), Some("\"plain\"".into()));
        assert_eq!(
            json("quote \" slash \\ line\n tab\t"),
            Some(r#""quote \" slash \\ line\n tab\t""#.into())
        );
        assert_eq!(json("\u{1}"), Some(r#""\u0001""#.into()));
        assert_eq!(json(f64::NAN), Some("null".into()));
    }

    #[test]
    fn test_primitives_match_serde_json() {
        for s in ["", "ünïcødé", "emoji 🎉", "</script>"] {
            assert_eq!(json(s), serde_json::to_string(s).ok());
        }
        for n in [0_i64, 7, -300, 9_007_199_254_740_991] {
            assert_eq!(json(n), Some(n.to_string()));
        }
    }

    #[test]
    fn test_symbol_uses_description() {
        assert_eq!(json(Symbol::new("id")), Some("\"Symbol(id)\"".into()));
        assert_eq!(json(Symbol::anonymous()), Some("\"Symbol()\"".into()));
    }

    #[test]
    fn test_absent_values() {
        assert_eq!(to_fragment(&Value::Undefined), Fragment::Absent);
        assert_eq!(json(FunctionRef::named("cb")), None);
        assert_eq!(json(Value::Null), Some("null".into()));
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(json(Value::array()), Some("[]".into()));
        assert_eq!(json(Value::object()), Some("{}".into()));
        let only_absent = Object::new()
            .with("a", Value::Undefined)
            .with("f", FunctionRef::default());
        assert_eq!(json(only_absent), Some("{}".into()));
    }

    #[test]
    fn test_object_fields_in_insertion_order() {
        let obj = Object::new()
            .with("z", 1)
            .with("a", "two")
            .with("skip", Value::Undefined)
            .with("n", Value::Null);
        assert_eq!(json(obj), Some(r#"{"z":1,"a":"two","n":null}"#.into()));
    }

    #[test]
    fn test_keys_are_escaped() {
        let obj = Object::new().with("we\"ird\nkey", 1);
        assert_eq!(json(obj), Some(r#"{"we\"ird\nkey":1}"#.into()));
    }

    #[test]
    fn test_array_slots_are_preserved() {
        let arr: Array = [
            Value::from(1),
            Value::Undefined,
            FunctionRef::default().into(),
            Value::Null,
        ]
        .into_iter()
        .collect();
        assert_eq!(json(arr), Some("[1,null,null,null]".into()));
    }

    #[test]
    fn test_nested_mixed_absent_handling() {
        let inner: Array = [Value::Undefined, Object::new().with("x", Value::Undefined).into()]
            .into_iter()
            .collect();
        let obj = Object::new()
            .with("list", inner)
            .with("gone", Value::Undefined)
            .with(
                "deep",
                Object::new().with("arr", Value::from(vec![Value::Undefined, Value::from(2)])),
            );
        assert_eq!(
            json(obj),
            Some(r#"{"list":[null,{}],"deep":{"arr":[null,2]}}"#.into())
        );
    }

    #[test]
    fn test_direct_self_reference_is_circular() {
        let a = Object::new().with("name", "a");
        a.insert("self", a.clone());
        assert_eq!(json(a), Some(r#"{"name":"a","self":"[Circular]"}"#.into()));
    }

    #[test]
    fn test_transitive_cycle_is_circular() {
        let a = Object::new();
        let b = Object::new();
        let list = Array::new();
        a.insert("b", b.clone());
        b.insert("list", list.clone());
        list.push(1);
        list.push(a.clone());

        assert_eq!(
            json(a),
            Some(r#"{"b":{"list":[1,"[Circular]"]}}"#.into())
        );
    }

    #[test]
    fn test_array_containing_itself() {
        let arr = Array::new();
        arr.push(arr.clone());
        arr.push("x");
        assert_eq!(json(arr), Some(r#"["[Circular]","x"]"#.into()));
    }

    #[test]
    fn test_diamond_is_expanded_twice() {
        let shared = Object::new().with("v", 1);
        let a = Object::new().with("x", shared.clone()).with("y", shared);
        let text = json(a);
        assert_eq!(text, Some(r#"{"x":{"v":1},"y":{"v":1}}"#.into()));
    }

    #[test]
    fn test_siblings_do_not_see_each_other() {
        let shared: Array = [1, 2].into_iter().collect();
        let outer: Array = [Value::from(&shared), Value::from(&shared)].into_iter().collect();
        assert_eq!(json(outer), Some("[[1,2],[1,2]]".into()));
    }

    #[test]
    fn test_special_values_become_strings() {
        let obj = Object::new()
            .with("err", ErrorValue::new("boom"))
            .with("buf", Value::buffer(b"ok".to_vec()))
            .with("ta", TypedArray::Uint8(vec![1, 2]));
        assert_eq!(
            json(obj),
            Some(
                r#"{"err":"Error: boom","buf":"<Buffer 6f 6b>","ta":"Uint8Array(2) [ 1, 2 ]"}"#
                    .into()
            )
        );
    }

    #[test]
    fn test_fragment_tags() {
        assert_eq!(
            to_fragment(&Object::new().with("a", 1).into()),
            Fragment::Object(r#""a":1"#.into())
        );
        assert!(to_fragment(&Value::object()).is_empty_object());
        assert_eq!(
            to_fragment(&Value::array()),
            Fragment::Json("[]".into())
        );
        assert_eq!(to_fragment(&Value::Null), Fragment::Null);
    }

    #[test]
    fn test_ancestors_path() {
        let root = Ancestors::root();
        let a = Object::new();
        let b = Object::new();
        let first = root.child(a.id());
        let second = first.child(b.id());

        assert!(!root.contains(a.id()));
        assert!(second.contains(a.id()));
        assert!(second.contains(b.id()));
        assert!(!first.contains(b.id()));
    }

    #[test]
    fn test_output_parses_as_json() {
        let obj = Object::new()
            .with("n", 1.5)
            .with("s", "text")
            .with("arr", vec![Value::Bool(true), Value::Undefined]);
        obj.insert("loop", obj.clone());

        let text = json(obj).unwrap_or_default();
        let parsed: Result<serde_json::Value, _> = serde_json::from_str(&text);
        assert!(parsed.is_ok(), "not valid JSON: {text}");
    }
}
