//! Style declaration value types.
//!
//! A rule's style is an ordered list of `key → value` pairs. A value is
//! either a plain CSS value or a nested block, which is how nested selectors
//! and conditional groups are written before any plugin flattens them.
//!
//! # Example
//!
//! ```
//! use stylenest_core::types::{Declarations, StyleValue};
//!
//! let style = Declarations::new()
//!     .with("float", "left")
//!     .with("&:hover", Declarations::new().with("color", "red"));
//!
//! assert_eq!(style.len(), 2);
//! assert_eq!(style.get("float"), Some(&StyleValue::from("left")));
//! assert!(style.get("&:hover").is_some_and(StyleValue::is_block));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A single declaration value.
///
/// In JSON a value is a string, a number (kept as its text) or an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A plain CSS value, e.g. `left` or `1px solid red`.
    Value(#[serde(deserialize_with = "text_or_number")] String),
    /// A nested declaration block.
    Block(Declarations),
}

impl StyleValue {
    /// Returns `true` for nested blocks.
    pub fn is_block(&self) -> bool {
        matches!(self, Self::Block(_))
    }

    /// Get the plain value, if this is not a block.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(value) => Some(value),
            Self::Block(_) => None,
        }
    }

    /// Get the nested block, if any.
    pub fn as_block(&self) -> Option<&Declarations> {
        match self {
            Self::Block(block) => Some(block),
            Self::Value(_) => None,
        }
    }

    /// Consume the value and return the nested block, if any.
    pub fn into_block(self) -> Option<Declarations> {
        match self {
            Self::Block(block) => Some(block),
            Self::Value(_) => None,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<Declarations> for StyleValue {
    fn from(block: Declarations) -> Self {
        Self::Block(block)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(value: $ty) -> Self {
                    Self::Value(value.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u32, u64, f32, f64);

/// An insertion-ordered list of declarations.
///
/// Keys are unique: inserting an existing key replaces its value in place and
/// keeps its position. Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Declarations {
    entries: IndexMap<String, StyleValue>,
}

impl Declarations {
    /// Create an empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a declaration, returning the previous value for the key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Remove a key, returning its value. Order of the remaining entries is kept.
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.entries.shift_remove(key)
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over plain `property: value` entries, skipping nested blocks.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_value().map(|value| (k.as_str(), value)))
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Declarations {
    type Item = (String, StyleValue);
    type IntoIter = indexmap::map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut declarations = Self::new();
        for (key, value) in iter {
            declarations.insert(key, value);
        }
        declarations
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
    })
}
