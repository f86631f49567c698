//! Nested selector parsing and flattening.

mod resolve;
mod split;

pub use resolve::{
    combine, is_nested_key, resolve, Resolution, PARENT_PLACEHOLDER, REFERENCE_PREFIX,
};
pub use split::split_selector_list;
