//! Style value and definition types.

mod definition;
mod value;

pub use definition::{is_conditional_key, StyleDefinition};
pub use value::{Declarations, StyleValue};
