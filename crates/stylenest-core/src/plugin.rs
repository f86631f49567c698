//! Plugin hooks and the style system that owns them.
//!
//! A [`Plugin`] is invoked at two points of a sheet build:
//!
//! - [`Plugin::on_create_sheet`] once, before any rule is added.
//! - [`Plugin::on_process_rule`] once per rule, after every rule of the
//!   current batch exists in its container.
//!
//! Plugins may add rules next to the one being processed through
//! [`RuleContext::add_rule`]. Those rules go through the whole plugin chain
//! immediately.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::class_name::generate_class_name;
use crate::rules::{Rule, RuleList, RuleOptions, SheetOptions, StyleSheet};
use crate::types::{Declarations, StyleDefinition};

/// A style sheet plugin.
pub trait Plugin {
    /// Called when a sheet is created, before its rules are added.
    fn on_create_sheet(&self, _sheet: &mut StyleSheet) {}

    /// Called once for every rule added to a sheet.
    fn on_process_rule(&self, _ctx: &mut RuleContext<'_, '_>) {}
}

/// An ordered plugin chain.
#[derive(Clone, Default)]
pub struct Plugins {
    plugins: Vec<Rc<dyn Plugin>>,
}

impl Plugins {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plugin to the chain.
    pub fn push(&mut self, plugin: impl Plugin + 'static) {
        self.plugins.push(Rc::new(plugin));
    }

    /// Iterate over plugins in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Plugin> {
        self.plugins.iter().map(|plugin| plugin.as_ref())
    }

    /// Get the number of plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl fmt::Debug for Plugins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugins")
            .field("len", &self.plugins.len())
            .finish()
    }
}

/// Shared state of one sheet build.
pub(crate) struct Build<'a> {
    pub(crate) options: &'a SheetOptions,
    pub(crate) plugins: &'a Plugins,
    pub(crate) classes: &'a mut HashMap<String, String>,
}

impl Build<'_> {
    /// Selector for a rule created without an explicit one.
    ///
    /// A key keeps its class for the lifetime of the sheet, so a rule inside
    /// a conditional group shares the class of the top-level rule with the
    /// same key.
    pub(crate) fn selector_for(&mut self, key: &str, style: &Declarations) -> String {
        if !self.options.named {
            return key.to_string();
        }
        let class = self
            .classes
            .entry(key.to_string())
            .or_insert_with(|| generate_class_name(key, style));
        format!(".{class}")
    }
}

/// The rule being processed, together with its container.
pub struct RuleContext<'r, 'b> {
    rules: &'r mut RuleList,
    index: usize,
    inserted: usize,
    build: &'r mut Build<'b>,
}

impl<'r, 'b> RuleContext<'r, 'b> {
    pub(crate) fn new(rules: &'r mut RuleList, index: usize, build: &'r mut Build<'b>) -> Self {
        Self {
            rules,
            index,
            inserted: 0,
            build,
        }
    }

    /// Position of the rule in its container.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The rule being processed.
    pub fn rule(&self) -> &Rule {
        &self.rules[self.index]
    }

    /// The rule being processed, mutably.
    pub fn rule_mut(&mut self) -> &mut Rule {
        &mut self.rules[self.index]
    }

    /// The container holding the rule.
    pub fn container(&self) -> &RuleList {
        &*self.rules
    }

    /// Options of the sheet being built.
    pub fn sheet_options(&self) -> &SheetOptions {
        self.build.options
    }

    /// Add a rule to the same container and process it.
    ///
    /// The new rule is placed after the current rule and after every rule
    /// previously added through this context, so repeated calls keep their
    /// call order in the output. Returns the position of the new rule.
    pub fn add_rule(
        &mut self,
        key: impl Into<String>,
        style: Declarations,
        options: RuleOptions,
    ) -> usize {
        let before = self.rules.len();
        let position = self.index + 1 + self.inserted;
        let position = self
            .rules
            .create(position, key.into(), style, options, self.build);
        self.rules.process_at(position, self.build);
        self.inserted += self.rules.len() - before;
        position
    }
}

/// Owns a plugin chain and creates style sheets processed by it.
///
/// # Example
///
/// ```
/// use stylenest_core::prelude::*;
///
/// let system = StyleSystem::new();
/// let sheet = system.create_style_sheet(
///     StyleDefinition::new().rule("a", Declarations::new().with("color", "red")),
///     SheetOptions::unnamed(),
/// );
///
/// assert_eq!(sheet.to_css(), "a {\n  color: red;\n}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleSystem {
    plugins: Rc<Plugins>,
}

impl StyleSystem {
    /// Create a style system without plugins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin. Plugins run in registration order.
    ///
    /// Sheets created before this call keep the chain they were created with.
    pub fn use_plugin(&mut self, plugin: impl Plugin + 'static) -> &mut Self {
        Rc::make_mut(&mut self.plugins).push(plugin);
        self
    }

    /// The registered plugins.
    pub fn plugins(&self) -> &Plugins {
        &self.plugins
    }

    /// Create a sheet from a definition.
    pub fn create_style_sheet(
        &self,
        definition: StyleDefinition,
        options: SheetOptions,
    ) -> StyleSheet {
        let mut sheet = StyleSheet::with_plugins(options, Rc::clone(&self.plugins));
        for plugin in self.plugins.iter() {
            plugin.on_create_sheet(&mut sheet);
        }
        sheet.add_rules(definition);
        sheet
    }
}
