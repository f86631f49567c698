//! Ordered rule container.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use super::{ConditionalRule, Rule, RuleOptions, StyleRule};
use crate::logging::targets;
use crate::plugin::{Build, RuleContext};
use crate::types::{is_conditional_key, Declarations, StyleValue};

#[derive(Debug, Clone)]
struct Slot {
    rule: Rule,
    processed: bool,
}

/// An ordered collection of rules: the style sheet itself or the inside of a
/// conditional group.
///
/// Lookups by key only see rules of this container. When two rules share a
/// key, the one created last wins the lookup; both stay in the output.
#[derive(Debug, Clone, Default)]
pub struct RuleList {
    slots: Vec<Slot>,
    keys: HashMap<String, usize>,
}

impl RuleList {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a rule by key.
    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.index_of(key).map(|index| &self.slots[index].rule)
    }

    /// Get a rule by key, mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Rule> {
        let index = self.index_of(key)?;
        Some(&mut self.slots[index].rule)
    }

    /// Get the selector of the style rule registered under `key`.
    pub fn selector_of(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Rule::selector)
    }

    /// Get the position of the rule registered under `key`.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.get(key).copied()
    }

    /// Get a rule by position.
    pub fn at(&self, index: usize) -> Option<&Rule> {
        self.slots.get(index).map(|slot| &slot.rule)
    }

    /// Iterate over rules in output order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.slots.iter().map(|slot| &slot.rule)
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the container is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append a rule without running plugins on it.
    pub(crate) fn add(
        &mut self,
        key: String,
        style: Declarations,
        options: RuleOptions,
        build: &mut Build<'_>,
    ) -> usize {
        let position = self.slots.len();
        self.create(position, key, style, options, build)
    }

    /// Create a rule at `position` without running plugins on it.
    pub(crate) fn create(
        &mut self,
        position: usize,
        key: String,
        style: Declarations,
        options: RuleOptions,
        build: &mut Build<'_>,
    ) -> usize {
        let position = position.min(self.slots.len());
        let rule = if is_conditional_key(&key) {
            let mut group = ConditionalRule::new(key.clone());
            for (inner_key, value) in style {
                match value {
                    StyleValue::Block(inner) => {
                        group
                            .rules
                            .add(inner_key, inner, RuleOptions::default(), build);
                    }
                    StyleValue::Value(value) => {
                        tracing::warn!(
                            target: targets::SHEET,
                            "Skipping \"{inner_key}: {value}\" in \"{key}\", expected a rule block"
                        );
                    }
                }
            }
            Rule::Conditional(group)
        } else {
            let selector = match options.selector {
                Some(selector) => selector,
                None => build.selector_for(&key, &style),
            };
            Rule::Style(StyleRule::new(key.clone(), selector, style, options.depth))
        };

        tracing::debug!(target: targets::SHEET, key = %key, position, "created rule");

        self.slots.insert(
            position,
            Slot {
                rule,
                processed: false,
            },
        );
        for index in self.keys.values_mut() {
            if *index >= position {
                *index += 1;
            }
        }
        self.keys.insert(key, position);
        position
    }

    /// Run plugins on every rule that has not been processed yet, in order.
    pub(crate) fn process(&mut self, build: &mut Build<'_>) {
        let mut index = 0;
        while index < self.slots.len() {
            self.process_at(index, build);
            index += 1;
        }
    }

    /// Run plugins on the rule at `index` unless it was already processed.
    ///
    /// Rules added by plugins while processing are inserted after `index`
    /// and processed immediately, so [`process`](Self::process) skips them.
    pub(crate) fn process_at(&mut self, index: usize, build: &mut Build<'_>) {
        match self.slots.get_mut(index) {
            Some(slot) if !slot.processed => slot.processed = true,
            _ => return,
        }

        let plugins = build.plugins;
        {
            let mut ctx = RuleContext::new(self, index, build);
            for plugin in plugins.iter() {
                plugin.on_process_rule(&mut ctx);
            }
        }

        if let Rule::Conditional(group) = &mut self.slots[index].rule {
            group.rules.process(build);
        }
    }

    pub(crate) fn write_css(&self, out: &mut String, indent: usize) -> fmt::Result {
        let mut first = true;
        for rule in self.iter().filter(|rule| !rule.is_empty()) {
            if !first {
                out.push('\n');
            }
            first = false;
            rule.write_css(out, indent)?;
        }
        Ok(())
    }
}

impl Index<usize> for RuleList {
    type Output = Rule;

    fn index(&self, index: usize) -> &Rule {
        &self.slots[index].rule
    }
}

impl IndexMut<usize> for RuleList {
    fn index_mut(&mut self, index: usize) -> &mut Rule {
        &mut self.slots[index].rule
    }
}
