//! Borrowed view of a stored entry.
//!
//! An INI key holds either a single string or, in the extended dialect, an
//! ordered list of strings. [`Value`] lets callers handle both without
//! knowing in advance which one a key is.
//!
//! ```rust
//! use ini_array::{Document, Value};
//!
//! let mut doc = Document::new();
//! doc.add_key("Profile", "Name", "John").unwrap();
//! doc.add_array("Profile", "langs", &["C", "Rust"]).unwrap();
//!
//! assert_eq!(doc.get("Profile", "Name"), Some(Value::Scalar("John")));
//! assert_eq!(doc.get("Profile", "langs[]").and_then(|v| v.as_array()).map(<[String]>::len), Some(2));
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// A scalar string or an array of strings, borrowed from a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value<'a> {
    Scalar(&'a str),
    Array(&'a [String]),
}

impl<'a> Value<'a> {
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// If the value is a scalar, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ini_array::Value;
    ///
    /// assert_eq!(Value::Scalar("Dark").as_str(), Some("Dark"));
    /// assert_eq!(Value::Array(&[]).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Scalar(s) => Some(*s),
            Value::Array(_) => None,
        }
    }

    /// If the value is an array, returns its elements. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&'a [String]> {
        match self {
            Value::Array(items) => Some(*items),
            Value::Scalar(_) => None,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{}", s),
            Value::Array(items) => write!(f, "[{}]", items.join(",")),
        }
    }
}

impl Serialize for Value<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Scalar(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let items = vec!["Running".to_string(), "Football".to_string()];
        assert_eq!(Value::Scalar("x").to_string(), "x");
        assert_eq!(Value::Array(&items).to_string(), "[Running,Football]");
    }

    #[test]
    fn test_serialize_to_json() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            serde_json::to_string(&Value::Array(&items)).unwrap(),
            r#"["a","b"]"#
        );
        assert_eq!(
            serde_json::to_string(&Value::Scalar("v")).unwrap(),
            r#""v""#
        );
    }

    #[test]
    fn test_accessors() {
        let items = vec!["a".to_string()];
        let array = Value::Array(&items);
        assert!(array.is_array());
        assert!(!array.is_scalar());
        assert_eq!(array.as_array(), Some(&items[..]));
        assert_eq!(array.as_str(), None);
    }
}
