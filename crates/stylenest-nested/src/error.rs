//! Nested selector resolution errors.

/// A nested selector key that could not be turned into a rule.
///
/// These never abort a sheet build. The `Display` text is what the warning
/// sink receives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NestingError {
    /// A `$name` reference has no rule with that key in the same container.
    #[error("Could not find the referenced rule \"{name}\".")]
    UnresolvedReference { name: String },

    /// Creating the rule would exceed the maximum nesting depth.
    #[error("Nesting is too deep \"{key}\".")]
    TooDeep { key: String },
}

impl NestingError {
    /// Create an unresolved reference error.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::UnresolvedReference { name: name.into() }
    }

    /// Create a nesting depth error.
    pub fn too_deep(key: impl Into<String>) -> Self {
        Self::TooDeep { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_messages() {
        assert_eq!(
            NestingError::unresolved("b").to_string(),
            "Could not find the referenced rule \"b\"."
        );
        assert_eq!(
            NestingError::too_deep("& .b").to_string(),
            "Nesting is too deep \"& .b\"."
        );
    }
}
