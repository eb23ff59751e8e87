//! GraphQL object impls for the domain types
//!
//! Field names are kept in snake_case (`category_id`) to match the wire
//! contract of the API.

use async_graphql::{Context, Object, Result};

use crate::core::model::{Category, Product};
use crate::store::CatalogStore;

/// Represent product
#[Object(rename_fields = "snake_case")]
impl Product {
    async fn id(&self) -> i64 {
        self.id
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn category_id(&self) -> i64 {
        self.category_id
    }

    /// The category this product belongs to
    ///
    /// Resolved by `category_id`; null when the reference is dangling.
    async fn category(&self, ctx: &Context<'_>) -> Result<Option<Category>> {
        let store = ctx.data::<CatalogStore>()?;
        Ok(store.category(self.category_id)?)
    }
}

/// Represent category
#[Object(rename_fields = "snake_case")]
impl Category {
    async fn id(&self) -> i64 {
        self.id
    }

    async fn name(&self) -> &str {
        &self.name
    }
}
