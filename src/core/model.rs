//! Product and category domain structs
//!
//! Plain serde-derived data types; the GraphQL object impls live in
//! [`crate::graphql::types`] so the core stays engine-agnostic.

use serde::{Deserialize, Serialize};

/// A catalog product
///
/// `category_id` references a [`Category`] by id but is not enforced: a
/// dangling value simply yields no match on lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, category_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
        }
    }

    /// The sentinel returned by mutations when no id matched
    ///
    /// Callers cannot distinguish "mutated" from "no match" other than by
    /// inspecting this zero-valued result; that is the store's contract.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// A product category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
