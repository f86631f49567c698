//! Sheet-unique class name generation.
//!
//! Named sheets turn a rule key such as `a` into a class like
//! `a-3182562902`. The suffix is the MurmurHash3 (x86, 32-bit, seed 0) of the
//! style serialized as compact JSON, nested blocks included, so the same
//! style always yields the same class.

use murmur3::murmur3_32;

use crate::types::Declarations;

/// Generate the class name for a rule key and its style.
pub fn generate_class_name(key: &str, style: &Declarations) -> String {
    format!("{key}-{}", style_hash(style))
}

/// Hash of a style as used in class names.
pub fn style_hash(style: &Declarations) -> u32 {
    let serialized = serde_json::to_string(style).unwrap_or_default();
    // Reading from a byte slice cannot fail.
    murmur3_32(&mut serialized.as_bytes(), 0).unwrap_or_default()
}
