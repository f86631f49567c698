//! Style sheet construction and output.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::{Rule, RuleList, RuleOptions};
use crate::plugin::{Build, Plugins};
use crate::types::{Declarations, StyleDefinition};

/// Options for a style sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetOptions {
    /// Generate sheet-unique class selectors (`.a-3182562902`) from rule
    /// keys. When `false`, the key is used as the selector verbatim.
    pub named: bool,
}

impl SheetOptions {
    /// Options for a sheet whose keys are used as selectors.
    pub fn unnamed() -> Self {
        Self { named: false }
    }
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self { named: true }
    }
}

/// A style sheet: an ordered rule container plus the plugins that process
/// every rule added to it.
///
/// Rules are created from a [`StyleDefinition`] in declaration order. Once
/// all rules of a batch exist, plugins process each of them in order, so a
/// rule may refer to rules declared after it in the same batch.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    options: SheetOptions,
    rules: RuleList,
    classes: HashMap<String, String>,
    plugins: Rc<Plugins>,
}

impl StyleSheet {
    /// Create an empty sheet without plugins.
    pub fn new(options: SheetOptions) -> Self {
        Self::with_plugins(options, Rc::default())
    }

    pub(crate) fn with_plugins(options: SheetOptions, plugins: Rc<Plugins>) -> Self {
        Self {
            options,
            rules: RuleList::new(),
            classes: HashMap::new(),
            plugins,
        }
    }

    /// Add all rules of a definition and process them.
    pub fn add_rules(&mut self, definition: StyleDefinition) {
        let mut build = Build {
            options: &self.options,
            plugins: &self.plugins,
            classes: &mut self.classes,
        };
        for (key, style) in definition {
            self.rules.add(key, style, RuleOptions::default(), &mut build);
        }
        self.rules.process(&mut build);
    }

    /// Add a single rule and process it.
    pub fn add_rule(&mut self, key: impl Into<String>, style: Declarations) -> &Rule {
        let mut build = Build {
            options: &self.options,
            plugins: &self.plugins,
            classes: &mut self.classes,
        };
        let index = self
            .rules
            .add(key.into(), style, RuleOptions::default(), &mut build);
        self.rules.process_at(index, &mut build);
        &self.rules[index]
    }

    /// Get a top-level rule by key.
    pub fn get_rule(&self, key: &str) -> Option<&Rule> {
        self.rules.get(key)
    }

    /// The top-level rules.
    pub fn rules(&self) -> &RuleList {
        &self.rules
    }

    /// The generated class name for a rule key, without the leading dot.
    pub fn class_name(&self, key: &str) -> Option<&str> {
        self.classes.get(key).map(String::as_str)
    }

    /// The sheet options.
    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    /// The plugins processing this sheet's rules.
    pub fn plugins(&self) -> &Plugins {
        &self.plugins
    }

    /// Render the sheet as CSS text.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.rules.write_css(&mut out, 0)?;
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_sheet_uses_keys() {
        let mut sheet = StyleSheet::new(SheetOptions::unnamed());
        sheet.add_rules(
            StyleDefinition::new()
                .rule("a", Declarations::new().with("float", "left"))
                .rule("b", Declarations::new().with("color", "red")),
        );

        assert_eq!(
            sheet.to_css(),
            "a {\n  float: left;\n}\nb {\n  color: red;\n}"
        );
        assert!(sheet.class_name("a").is_none());
    }

    #[test]
    fn named_sheet_generates_classes() {
        let mut sheet = StyleSheet::new(SheetOptions::default());
        let rule = sheet.add_rule("a", Declarations::new().with("float", "left"));
        let selector = rule.selector().unwrap().to_string();

        let class = sheet.class_name("a").unwrap();
        assert_eq!(selector, format!(".{class}"));
        assert!(class.starts_with("a-"));
    }

    #[test]
    fn conditional_group_reuses_sheet_class() {
        let mut sheet = StyleSheet::new(SheetOptions::default());
        sheet.add_rules(
            StyleDefinition::new()
                .rule("a", Declarations::new().with("color", "green"))
                .rule(
                    "@media print",
                    Declarations::new().with("a", Declarations::new().with("color", "red")),
                ),
        );

        let class = sheet.class_name("a").unwrap().to_string();
        assert_eq!(
            sheet.to_css(),
            format!(
                ".{class} {{\n  color: green;\n}}\n@media print {{\n  .{class} {{\n    color: red;\n  }}\n}}"
            )
        );
    }

    #[test]
    fn empty_sheet_renders_nothing() {
        let sheet = StyleSheet::new(SheetOptions::default());
        assert_eq!(sheet.to_css(), "");
        assert!(sheet.rules().is_empty());
    }
}
