//! Rule definitions.

use std::fmt::{self, Write as _};

use super::RuleList;
use crate::types::Declarations;

/// Options used when creating a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOptions {
    /// Explicit selector. When unset, the selector is generated from the key.
    pub selector: Option<String>,
    /// How many nesting derivations separate this rule from a top-level rule.
    pub depth: usize,
}

impl RuleOptions {
    /// Options for a rule with an explicit selector.
    pub fn with_selector(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            ..Default::default()
        }
    }

    /// Set the nesting depth.
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

/// A selector plus its declaration block.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// The key the rule was created under.
    pub key: String,
    /// The final, flat selector used for output.
    pub selector: String,
    /// The declaration block.
    pub style: Declarations,
    /// Nesting depth (0 for rules written at the top of a container).
    pub depth: usize,
}

impl StyleRule {
    /// Create a new style rule.
    pub fn new(
        key: impl Into<String>,
        selector: impl Into<String>,
        style: Declarations,
        depth: usize,
    ) -> Self {
        Self {
            key: key.into(),
            selector: selector.into(),
            style,
            depth,
        }
    }

    /// Returns `true` if the rule has no plain declarations to render.
    pub fn is_empty(&self) -> bool {
        self.style.properties().next().is_none()
    }

    pub(crate) fn write_css(&self, out: &mut String, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        writeln!(out, "{pad}{} {{", self.selector)?;
        for (property, value) in self.style.properties() {
            writeln!(out, "{pad}  {property}: {value};")?;
        }
        write!(out, "{pad}}}")
    }
}

/// A conditional group such as `@media print`, holding its own rules.
#[derive(Debug, Clone)]
pub struct ConditionalRule {
    /// The at-rule text, e.g. `@media print`.
    pub key: String,
    /// The rules inside this group.
    pub rules: RuleList,
}

impl ConditionalRule {
    /// Create an empty conditional group.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            rules: RuleList::new(),
        }
    }

    pub(crate) fn write_css(&self, out: &mut String, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        writeln!(out, "{pad}{} {{", self.key)?;
        self.rules.write_css(out, indent + 2)?;
        write!(out, "\n{pad}}}")
    }
}

/// Any rule held by a container.
#[derive(Debug, Clone)]
pub enum Rule {
    /// A style rule.
    Style(StyleRule),
    /// A conditional group.
    Conditional(ConditionalRule),
}

impl Rule {
    /// The key the rule was created under.
    pub fn key(&self) -> &str {
        match self {
            Self::Style(rule) => &rule.key,
            Self::Conditional(rule) => &rule.key,
        }
    }

    /// The selector of a style rule.
    pub fn selector(&self) -> Option<&str> {
        match self {
            Self::Style(rule) => Some(&rule.selector),
            Self::Conditional(_) => None,
        }
    }

    /// Get the style rule, if this is one.
    pub fn as_style(&self) -> Option<&StyleRule> {
        match self {
            Self::Style(rule) => Some(rule),
            Self::Conditional(_) => None,
        }
    }

    /// Get the style rule mutably, if this is one.
    pub fn as_style_mut(&mut self) -> Option<&mut StyleRule> {
        match self {
            Self::Style(rule) => Some(rule),
            Self::Conditional(_) => None,
        }
    }

    /// Get the conditional group, if this is one.
    pub fn as_conditional(&self) -> Option<&ConditionalRule> {
        match self {
            Self::Conditional(rule) => Some(rule),
            Self::Style(_) => None,
        }
    }

    /// Returns `true` if rendering this rule produces no output.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Style(rule) => rule.is_empty(),
            Self::Conditional(rule) => rule.rules.iter().all(Rule::is_empty),
        }
    }

    pub(crate) fn write_css(&self, out: &mut String, indent: usize) -> fmt::Result {
        match self {
            Self::Style(rule) => rule.write_css(out, indent),
            Self::Conditional(rule) => rule.write_css(out, indent),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_css(&mut out, 0)?;
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_rule_css() {
        let rule = Rule::Style(StyleRule::new(
            "a",
            "a",
            Declarations::new().with("float", "left").with("color", "red"),
            0,
        ));

        assert_eq!(rule.to_string(), "a {\n  float: left;\n  color: red;\n}");
    }

    #[test]
    fn nested_blocks_are_not_rendered() {
        let rule = StyleRule::new(
            "a",
            "a",
            Declarations::new().with("& b", Declarations::new().with("color", "red")),
            0,
        );

        assert!(rule.is_empty());
    }

    #[test]
    fn rule_options_builder() {
        let options = RuleOptions::with_selector(".x .y").depth(2);
        assert_eq!(options.selector.as_deref(), Some(".x .y"));
        assert_eq!(options.depth, 2);
        assert_eq!(RuleOptions::default().depth, 0);
    }
}
