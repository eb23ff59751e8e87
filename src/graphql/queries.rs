//! Root query resolvers

use async_graphql::{Context, Object, Result};

use crate::core::model::{Category, Product};
use crate::store::CatalogStore;

pub struct QueryRoot;

/// Root query
#[Object]
impl QueryRoot {
    /// product detail
    async fn product(&self, ctx: &Context<'_>, id: Option<i64>) -> Result<Option<Product>> {
        let store = ctx.data::<CatalogStore>()?;
        match id {
            Some(id) => Ok(store.product(id)?),
            None => Ok(None),
        }
    }

    /// product list
    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<Product>> {
        let store = ctx.data::<CatalogStore>()?;
        Ok(store.products()?)
    }

    /// category detail
    async fn category(&self, ctx: &Context<'_>, id: Option<i64>) -> Result<Option<Category>> {
        let store = ctx.data::<CatalogStore>()?;
        match id {
            Some(id) => Ok(store.category(id)?),
            None => Ok(None),
        }
    }

    /// category list
    async fn categories(&self, ctx: &Context<'_>) -> Result<Vec<Category>> {
        let store = ctx.data::<CatalogStore>()?;
        Ok(store.categories()?)
    }
}
