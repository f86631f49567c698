//! Flattening of nested selectors.
//!
//! A nested selector key is combined with the selector of the rule it is
//! written in:
//!
//! - `&` is replaced with the parent selector, with nothing inserted:
//!   `&:hover` under `.a` gives `.a:hover`, `& b` gives `.a b`.
//! - A fragment without `&` is a descendant of the parent: `b` gives `.a b`.
//! - `$name` is replaced with the selector of the rule registered under
//!   `name` in the same container.
//! - Comma separated fragments are resolved independently and joined with
//!   `", "`.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::split_selector_list;
use crate::NestingError;

/// The parent selector placeholder.
pub const PARENT_PLACEHOLDER: char = '&';

/// The prefix of a rule reference.
pub const REFERENCE_PREFIX: char = '$';

fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$([\w-]+)").expect("reference pattern is valid"))
}

/// Returns `true` if a declaration key is a nested selector rather than a
/// property: it contains `&` or `$`.
pub fn is_nested_key(key: &str) -> bool {
    key.contains(PARENT_PLACEHOLDER) || key.contains(REFERENCE_PREFIX)
}

/// The outcome of resolving a nested selector list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Flat selectors of the fragments that resolved, in order.
    pub selectors: Vec<String>,
    /// Names of every `$name` reference that was not found, in order.
    pub unresolved: Vec<String>,
}

impl Resolution {
    /// Returns `true` if every reference was found.
    pub fn is_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// The resolved selectors joined into one selector list.
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }

    /// The joined selector, or one error per missing reference.
    pub fn into_result(self) -> Result<String, Vec<NestingError>> {
        if self.is_resolved() {
            Ok(self.selector())
        } else {
            Err(self
                .unresolved
                .into_iter()
                .map(NestingError::unresolved)
                .collect())
        }
    }
}

/// Resolve a nested selector list against its parent selector.
///
/// `lookup` maps a rule key to that rule's selector. A fragment with a
/// missing reference is left out of [`Resolution::selectors`] and its names
/// are recorded; the other fragments are still resolved.
///
/// When the parent is itself a selector list, every parent entry is combined
/// with every fragment, parent first.
///
/// # Example
///
/// ```
/// use stylenest_nested::selector::resolve;
///
/// let resolution = resolve("&b, &c", "a", |_| None);
/// assert_eq!(resolution.selector(), "ab, ac");
///
/// let resolution = resolve("& $b", ".a-1", |name| (name == "b").then_some(".b-2"));
/// assert_eq!(resolution.selector(), ".a-1 .b-2");
/// ```
pub fn resolve<'a, F>(nested: &str, parent: &str, lookup: F) -> Resolution
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut resolution = Resolution::default();
    let mut fragments = Vec::new();

    for fragment in split_selector_list(nested) {
        match replace_references(fragment, &lookup) {
            Ok(fragment) => fragments.push(fragment),
            Err(missing) => resolution.unresolved.extend(missing),
        }
    }

    for parent in split_selector_list(parent) {
        for fragment in &fragments {
            resolution.selectors.push(combine(parent, fragment));
        }
    }

    resolution
}

/// Combine one parent selector with one nested fragment.
pub fn combine(parent: &str, fragment: &str) -> String {
    if fragment.contains(PARENT_PLACEHOLDER) {
        fragment.replace(PARENT_PLACEHOLDER, parent)
    } else {
        format!("{parent} {fragment}")
    }
}

fn replace_references<'a, F>(fragment: &str, lookup: &F) -> Result<String, Vec<String>>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut missing = Vec::new();
    let replaced = reference_pattern().replace_all(fragment, |caps: &Captures<'_>| {
        let name = &caps[1];
        match lookup(name) {
            Some(selector) => selector.to_string(),
            None => {
                missing.push(name.to_string());
                caps[0].to_string()
            }
        }
    });

    if missing.is_empty() {
        Ok(replaced.into_owned())
    } else {
        Err(missing)
    }
}
