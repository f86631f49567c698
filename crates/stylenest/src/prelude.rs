//! Prelude module with commonly used types.

pub use stylenest_core::prelude::*;
pub use stylenest_nested::{NestedOptions, NestedPlugin, NestingError};
