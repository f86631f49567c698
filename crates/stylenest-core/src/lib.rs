//! Style sheet model for stylenest.
//!
//! This crate provides the rule containers that nested-selector resolution
//! works on:
//!
//! - **Definitions**: ordered declaration blocks, loadable from JSON
//! - **Rules**: style rules and conditional groups in ordered containers
//! - **Class names**: deterministic sheet-unique selectors for rule keys
//! - **Plugins**: hooks run when sheets and rules are created
//! - **Output**: CSS text in declaration order
//!
//! # Example
//!
//! ```
//! use stylenest_core::prelude::*;
//!
//! let mut sheet = StyleSheet::new(SheetOptions::unnamed());
//! sheet.add_rule("a", Declarations::new().with("float", "left"));
//!
//! assert_eq!(sheet.to_css(), "a {\n  float: left;\n}");
//! ```

pub mod class_name;
pub mod logging;
pub mod plugin;
pub mod rules;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::plugin::{Plugin, Plugins, RuleContext, StyleSystem};
    pub use crate::rules::{
        ConditionalRule, Rule, RuleList, RuleOptions, SheetOptions, StyleRule, StyleSheet,
    };
    pub use crate::types::{Declarations, StyleDefinition, StyleValue};
}
