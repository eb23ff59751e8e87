//! Schema assembly

use async_graphql::{EmptySubscription, Schema};

use crate::graphql::{MutationRoot, QueryRoot};
use crate::store::CatalogStore;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema over the given store
pub fn build_schema(store: CatalogStore) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdl_declares_the_full_query_surface() {
        let schema = build_schema(CatalogStore::seeded());
        let sdl = schema.sdl();

        assert!(sdl.contains("type Product"));
        assert!(sdl.contains("type Category"));
        assert!(sdl.contains("category_id: Int!"));
        assert!(sdl.contains("categories: [Category!]!"));
        assert!(sdl.contains("insertProduct(name: String!, category_id: Int!): Product!"));
        assert!(sdl.contains("deleteProduct(id: Int!): Product!"));
    }
}
