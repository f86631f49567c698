//! Nested selectors for stylenest.
//!
//! Rule declarations may contain nested selector keys:
//!
//! - **Parent reference**: `&` stands for the selector of the enclosing rule
//!   (`"&:hover"`, `"& b"`, `"&b, &c"`)
//! - **Rule reference**: `$name` stands for the selector of the rule `name`
//!   in the same container (`"& $other"`)
//!
//! The [`NestedPlugin`] turns each such key into a rule of its own, placed
//! right after its parent in the same container, and reports unknown
//! references and too deep nesting as warnings.
//!
//! The pure selector logic lives in [`selector`] and can be used without a
//! sheet.

pub mod plugin;
pub mod selector;

mod error;

pub use error::NestingError;
pub use plugin::{NestedOptions, NestedPlugin, WarnSink, DEFAULT_MAX_DEPTH};
