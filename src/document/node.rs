//! The value tree produced by the builder.
//!
//! A document is a tree of [`Value`]s: string leaves, ordered arrays, and
//! ordered dicts. Dict keys are plain text and are not required to be unique;
//! which duplicate wins is decided at query time. A dict entry may have no
//! value at all (`key:` with nothing after it), which is different from an
//! empty string.
//!
//! # Example
//!
//! ```
//! use yamlpick::document::node::{dump_tree, Entry, Value};
//!
//! let tree = Value::Dict(vec![
//!     Entry::new("name", Some(Value::String("yamlpick".to_string()))),
//!     Entry::new("tags", Some(Value::Array(vec![Value::String("yaml".to_string())]))),
//!     Entry::new("empty", None),
//! ]);
//!
//! assert_eq!(
//!     dump_tree(Some(&tree)),
//!     r#"{"name": "yamlpick", "tags": ["yaml", ], "empty": (null), }"#
//! );
//! ```

use std::fmt::{self, Write};

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A node in the value tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A scalar, kept as its source text.
    String(String),
    /// A sequence, in document order.
    Array(Vec<Value>),
    /// A mapping, in document order, duplicates included.
    Dict(Vec<Entry>),
}

/// One key of a dict together with its (possibly absent) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: Option<Value>,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&[Entry]> {
        match self {
            Value::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    /// Short lowercase name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Dict(_) => "dict",
        }
    }
}

/// Renders a tree in the json-esque debug format.
///
/// Strings are quoted but not escaped, every array item and dict entry is
/// followed by `", "`, and absent values render as `(null)`. The output is
/// meant for eyes, not for a JSON parser.
pub fn dump_tree(value: Option<&Value>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_tree(&mut out, value);
    out
}

fn write_tree(out: &mut impl Write, value: Option<&Value>) -> fmt::Result {
    match value {
        None => out.write_str("(null)"),
        Some(Value::String(s)) => write!(out, "\"{}\"", s),
        Some(Value::Array(items)) => {
            out.write_char('[')?;
            for item in items {
                write_tree(out, Some(item))?;
                out.write_str(", ")?;
            }
            out.write_char(']')
        }
        Some(Value::Dict(entries)) => {
            out.write_char('{')?;
            for entry in entries {
                write!(out, "\"{}\": ", entry.key)?;
                write_tree(out, entry.value.as_ref())?;
                out.write_str(", ")?;
            }
            out.write_char('}')
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, Some(self))
    }
}

/// Releases a whole tree, children before parents, without recursion.
///
/// Dropping a `Value` frees it too, but the compiler-generated drop glue
/// recurses once per nesting level. This walks an explicit stack instead so
/// arbitrarily deep documents can be released safely.
pub fn dispose(tree: Value) {
    let mut pending = vec![tree];
    while let Some(node) = pending.pop() {
        match node {
            Value::String(_) => {}
            Value::Array(items) => pending.extend(items),
            Value::Dict(entries) => {
                pending.extend(entries.into_iter().filter_map(|entry| entry.value));
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Dict(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for entry in entries {
                    map.serialize_entry(&entry.key, &entry.value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Value {
        Value::String(text.to_string())
    }

    #[test]
    fn test_accessors() {
        let v = s("x");
        assert_eq!(v.as_str(), Some("x"));
        assert!(v.as_array().is_none());
        assert!(v.as_dict().is_none());
        assert_eq!(v.type_name(), "string");

        let arr = Value::Array(vec![s("a")]);
        assert_eq!(arr.as_array().map(|a| a.len()), Some(1));
        assert_eq!(arr.type_name(), "array");

        let dict = Value::Dict(vec![Entry::new("k", None)]);
        assert_eq!(dict.as_dict().map(|d| d[0].key.as_str()), Some("k"));
        assert_eq!(dict.type_name(), "dict");
    }

    #[test]
    fn test_dump_absent_tree() {
        assert_eq!(dump_tree(None), "(null)");
    }

    #[test]
    fn test_dump_empty_collections() {
        assert_eq!(dump_tree(Some(&Value::Array(vec![]))), "[]");
        assert_eq!(dump_tree(Some(&Value::Dict(vec![]))), "{}");
    }

    #[test]
    fn test_dump_does_not_escape() {
        assert_eq!(dump_tree(Some(&s("say \"hi\""))), "\"say \"hi\"\"");
    }

    #[test]
    fn test_display_matches_dump() {
        let tree = Value::Array(vec![s("1"), Value::Dict(vec![Entry::new("a", Some(s("b")))])]);
        assert_eq!(tree.to_string(), dump_tree(Some(&tree)));
        assert_eq!(tree.to_string(), r#"["1", {"a": "b", }, ]"#);
    }

    #[test]
    fn test_dispose_deep_tree() {
        let mut tree = s("leaf");
        for _ in 0..100_000 {
            tree = Value::Array(vec![tree]);
        }
        dispose(tree);
    }

    #[test]
    fn test_serialize_keeps_duplicates_and_absent() {
        let tree = Value::Dict(vec![
            Entry::new("k", Some(s("1"))),
            Entry::new("k", None),
        ]);
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"{"k":"1","k":null}"#);
    }
}
