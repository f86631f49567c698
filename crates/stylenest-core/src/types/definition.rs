//! Style sheet definitions.

use std::path::Path;

use indexmap::IndexMap;

use super::{Declarations, StyleValue};
use crate::{Error, Result};

/// The input of a style sheet: rule key → declaration block.
///
/// Keys starting with `@` are conditional groups. Their block maps rule keys
/// to declaration blocks, one level deep.
///
/// # Example
///
/// ```
/// use stylenest_core::types::StyleDefinition;
///
/// let definition = StyleDefinition::from_json(r#"{
///     "a": {"color": "green"},
///     "@media print": {"a": {"&:hover": {"color": "red"}}}
/// }"#)?;
///
/// assert_eq!(definition.len(), 2);
/// # Ok::<(), stylenest_core::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDefinition {
    rules: IndexMap<String, Declarations>,
}

impl StyleDefinition {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style rule insertion.
    pub fn rule(mut self, key: impl Into<String>, style: Declarations) -> Self {
        self.push(key, style);
        self
    }

    /// Add a rule. A repeated key replaces the earlier block in place.
    pub fn push(&mut self, key: impl Into<String>, style: Declarations) {
        self.rules.insert(key.into(), style);
    }

    /// Parse a definition from JSON text.
    ///
    /// Every top-level value must be an object, and so must every value
    /// inside a conditional group.
    pub fn from_json(json: &str) -> Result<Self> {
        let declarations: Declarations = serde_json::from_str(json)?;
        Self::try_from(declarations)
    }

    /// Load a definition from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&content)
    }

    /// Get the number of top-level rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the definition has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declarations)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for StyleDefinition {
    type Item = (String, Declarations);
    type IntoIter = indexmap::map::IntoIter<String, Declarations>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl TryFrom<Declarations> for StyleDefinition {
    type Error = Error;

    fn try_from(declarations: Declarations) -> Result<Self> {
        let mut definition = Self::new();
        for (key, value) in declarations {
            let StyleValue::Block(style) = value else {
                return Err(Error::invalid_definition(key, "expected a declaration block"));
            };
            if is_conditional_key(&key) {
                if let Some((inner, _)) = style.iter().find(|(_, v)| !v.is_block()) {
                    return Err(Error::invalid_definition(
                        format!("{key} {inner}"),
                        "conditional groups may only contain declaration blocks",
                    ));
                }
            }
            definition.push(key, style);
        }
        Ok(definition)
    }
}

/// Returns `true` for keys naming a conditional group, such as `@media print`.
pub fn is_conditional_key(key: &str) -> bool {
    key.starts_with('@')
}
