//! Root mutation resolvers
//!
//! "No match" is not an error here: update and delete return the
//! zero-valued product sentinel, mirroring the store contract.

use async_graphql::{Context, Object, Result};

use crate::core::model::Product;
use crate::store::CatalogStore;

pub struct MutationRoot;

/// Root mutation
#[Object(rename_args = "snake_case")]
impl MutationRoot {
    /// Insert new product
    async fn insert_product(
        &self,
        ctx: &Context<'_>,
        name: String,
        category_id: i64,
    ) -> Result<Product> {
        let store = ctx.data::<CatalogStore>()?;
        Ok(store.insert_product(name, category_id)?)
    }

    /// Update product by id
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        id: i64,
        name: Option<String>,
        category_id: Option<i64>,
    ) -> Result<Product> {
        let store = ctx.data::<CatalogStore>()?;
        Ok(store.update_product(id, name, category_id)?)
    }

    /// Delete product by id
    async fn delete_product(&self, ctx: &Context<'_>, id: i64) -> Result<Product> {
        let store = ctx.data::<CatalogStore>()?;
        Ok(store.delete_product(id)?)
    }
}
