//! Deterministic JSON serialization built on sequences.
//!
//! Values are rendered as a lazy [`Sequence`] of text fragments, with object
//! keys always emitted in sorted order, so equal values always produce the
//! same text regardless of how their maps were built.
//!
//! # Example
//!
//! ```rust
//! use lazyseq::json;
//! use serde_json::json;
//!
//! let value = json!({ "b": [1, true, null], "a": "x" });
//! assert_eq!(json::stringify(&value), r#"{"a":"x","b":[1,true,null]}"#);
//! ```

pub mod error;

pub use error::JsonError;

use crate::combinators::Scan;
use crate::core::Sequence;
use serde_json::{Map, Value};
use tracing::debug;

type Fragments = Sequence<String>;

fn fragment(text: &str) -> Fragments {
    Sequence::one(text.to_owned())
}

fn comma_rest() -> Scan<Fragments, Fragments> {
    Scan::new(|item: Fragments| (fragment(",").concat(&item), comma_rest()))
}

fn comma_first() -> Scan<Fragments, Fragments> {
    Scan::new(|item| (item, comma_rest()))
}

fn wrap(open: &str, close: &str, items: &Sequence<Fragments>) -> Fragments {
    fragment(open)
        .concat(&items.scan(comma_first()).flatten())
        .concat(&fragment(close))
}

fn property((key, value): (String, Value)) -> Fragments {
    Sequence::from_vec(vec![Value::String(key).to_string(), ":".to_owned()]).concat(&fragments(&value))
}

fn array_fragments(items: &[Value]) -> Fragments {
    wrap("[", "]", &Sequence::from_vec(items.to_vec()).map(|item| fragments(&item)))
}

fn object_fragments(object: &Map<String, Value>) -> Fragments {
    let mut entries: Vec<(String, Value)> = object
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    wrap("{", "}", &Sequence::from_vec(entries).map(property))
}

/// Render a value as a lazy sequence of JSON text fragments.
///
/// Nested arrays and objects are only rendered as the sequence is observed.
pub fn fragments(value: &Value) -> Fragments {
    match value {
        Value::Array(items) => array_fragments(items),
        Value::Object(object) => object_fragments(object),
        primitive => Sequence::one(primitive.to_string()),
    }
}

/// Deterministic, compact JSON text for `value`.
pub fn stringify(value: &Value) -> String {
    fragments(value).join("")
}

/// Parse JSON text and re-emit it deterministically.
///
/// # Example
///
/// ```rust
/// use lazyseq::json;
///
/// let text = json::canonicalize(r#"{ "z": 1, "a": { "c": 2, "b": 3 } }"#).unwrap();
/// assert_eq!(text, r#"{"a":{"b":3,"c":2},"z":1}"#);
/// ```
pub fn canonicalize(text: &str) -> Result<String, JsonError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(stringify(&value))
}

fn assign(value: Value, path: &Sequence<String>, target: Option<Value>) -> Value {
    let Some((name, rest)) = path.next() else {
        return value;
    };
    let mut object = match target {
        Some(Value::Object(object)) => object,
        Some(other) => {
            debug!(property = %name, replaced = %other, "replacing non-object value");
            Map::new()
        }
        None => Map::new(),
    };
    let child = object.remove(&name);
    let updated = assign(value, &rest, child);
    object.insert(name, updated);
    Value::Object(object)
}

/// Set `value` at `path` inside `target`, returning the updated value.
///
/// Missing intermediate objects are created; intermediate values that are not
/// objects are replaced by objects. An empty path returns `value`.
///
/// # Example
///
/// ```rust
/// use lazyseq::json;
/// use serde_json::json;
///
/// let updated = json::set_property(json!("v"), &["a", "b"], Some(json!({ "a": 1, "c": 2 })));
/// assert_eq!(updated, json!({ "a": { "b": "v" }, "c": 2 }));
/// ```
pub fn set_property<P: AsRef<str>>(value: Value, path: &[P], target: Option<Value>) -> Value {
    let path: Sequence<String> = path.iter().map(|name| name.as_ref().to_owned()).collect();
    assign(value, &path, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_render_like_serde_json() {
        assert_eq!(stringify(&json!(null)), "null");
        assert_eq!(stringify(&json!(true)), "true");
        assert_eq!(stringify(&json!(12.5)), "12.5");
        assert_eq!(stringify(&json!("a\"b\n")), r#""a\"b\n""#);
    }

    #[test]
    fn empty_containers_have_no_commas() {
        assert_eq!(stringify(&json!([])), "[]");
        assert_eq!(stringify(&json!({})), "{}");
        assert_eq!(stringify(&json!([[]])), "[[]]");
    }

    #[test]
    fn arrays_are_comma_separated() {
        assert_eq!(stringify(&json!([1, "x", [2, 3]])), r#"[1,"x",[2,3]]"#);
    }

    #[test]
    fn object_keys_are_sorted() {
        let value = json!({ "b": 1, "a": { "d": 2, "c": 3 } });
        assert_eq!(stringify(&value), r#"{"a":{"c":3,"d":2},"b":1}"#);
    }

    #[test]
    fn keys_are_escaped() {
        assert_eq!(stringify(&json!({ "q\"": 1 })), r#"{"q\"":1}"#);
    }

    #[test]
    fn fragments_are_lazy_tokens() {
        let tokens = fragments(&json!([1, 2])).to_vec();
        assert_eq!(tokens, vec!["[", "1", ",", "2", "]"]);
    }

    #[test]
    fn canonicalize_rejects_invalid_text() {
        let error = canonicalize("{ not json").unwrap_err();
        assert!(matches!(error, JsonError::ParseFailed(_)));
    }

    #[test]
    fn set_property_creates_missing_objects() {
        let updated = set_property(json!(1), &["x", "y"], None);
        assert_eq!(updated, json!({ "x": { "y": 1 } }));
    }

    #[test]
    fn set_property_keeps_siblings() {
        let target = json!({ "x": { "keep": true, "y": 0 } });
        let updated = set_property(json!(1), &["x", "y"], Some(target));
        assert_eq!(updated, json!({ "x": { "keep": true, "y": 1 } }));
    }

    #[test]
    fn set_property_with_empty_path_returns_value() {
        let empty: [&str; 0] = [];
        assert_eq!(set_property(json!([1]), &empty, Some(json!({}))), json!([1]));
    }
}
