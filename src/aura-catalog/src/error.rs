//! Catalog error types.

use thiserror::Error;

/// Errors from catalog registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No entry with the given identifier.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// An entry with the same name already exists.
    #[error("{kind} already exists: {name}")]
    DuplicateName { kind: &'static str, name: String },

    /// The API key has been revoked and cannot be used or modified.
    #[error("API key is revoked: {0}")]
    Revoked(String),

    /// The requested scope is not in the scope table.
    #[error("unknown API scope: {0}")]
    UnknownScope(String),
}

impl CatalogError {
    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub(crate) fn duplicate(kind: &'static str, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            kind,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CatalogError::not_found("assistant", "nope").to_string(),
            "assistant not found: nope"
        );
        assert_eq!(
            CatalogError::duplicate("category", "Writing").to_string(),
            "category already exists: Writing"
        );
    }
}
