//! Typed errors for catalog store operations
//!
//! The store never panics on lock failure: a poisoned lock surfaces as
//! [`StoreError::LockPoisoned`] and propagates into the GraphQL `errors`
//! array like any other resolver failure.

use thiserror::Error;

/// Errors raised by [`crate::store::CatalogStore`] operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A previous writer panicked while holding the store lock
    #[error("catalog store lock poisoned during {operation}")]
    LockPoisoned {
        /// Operation that observed the poisoned lock
        operation: &'static str,
    },
}

impl StoreError {
    pub(crate) fn poisoned(operation: &'static str) -> Self {
        StoreError::LockPoisoned { operation }
    }
}
