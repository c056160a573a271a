//! Error types for pizza stores.

use thiserror::Error;

/// Errors that can occur when asking a store for a pizza.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The identifier is not on this store's menu.
    #[error("{store} has no pizza named '{kind}'")]
    NotFound { store: &'static str, kind: String },
}

impl StoreError {
    pub fn not_found(store: &'static str, kind: impl Into<String>) -> Self {
        Self::NotFound {
            store,
            kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("New York Pizza Store", "veggie");
        assert_eq!(
            err.to_string(),
            "New York Pizza Store has no pizza named 'veggie'"
        );
    }
}
