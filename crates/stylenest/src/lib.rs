//! stylenest - nested selectors for CSS-in-JS style sheets.
//!
//! This is the umbrella crate that re-exports the public APIs and provides a
//! style system with nesting enabled.
//!
//! # Example
//!
//! ```
//! use stylenest::prelude::*;
//!
//! let sheet = stylenest::create().create_style_sheet(
//!     StyleDefinition::from_json(r#"{
//!         "a": {"float": "left", "& b": {"float": "left"}}
//!     }"#)?,
//!     SheetOptions::unnamed(),
//! );
//!
//! assert_eq!(sheet.to_css(), "a {\n  float: left;\n}\na b {\n  float: left;\n}");
//! # Ok::<(), stylenest::Error>(())
//! ```

pub use stylenest_core::{class_name, logging, plugin, rules, types, Error, Result};

/// Nested selector resolution.
pub mod nested {
    pub use stylenest_nested::*;
}

pub mod prelude;

use stylenest_core::plugin::StyleSystem;
use stylenest_nested::{NestedOptions, NestedPlugin};

/// Create a style system with the nesting plugin using default options.
pub fn create() -> StyleSystem {
    create_with(NestedOptions::default())
}

/// Create a style system with the nesting plugin using the given options.
pub fn create_with(options: NestedOptions) -> StyleSystem {
    let mut system = StyleSystem::new();
    system.use_plugin(NestedPlugin::new(options));
    system
}
