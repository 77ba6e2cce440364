//! Enumeration errors.

use thiserror::Error;

/// Errors that abort an enumeration.
///
/// An empty result is never an error: dead ends and negative budgets are
/// ordinary pruning outcomes. The only failure is a problem asking for a
/// capability that has no implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    #[error("Unimplemented capability: {capability}")]
    Unimplemented { capability: String },
}

impl EnumerationError {
    pub fn unimplemented(capability: impl Into<String>) -> Self {
        Self::Unimplemented {
            capability: capability.into(),
        }
    }
}
