//! # Katalog
//!
//! A small in-memory GraphQL API exposing a product catalog.
//!
//! The entire dataset lives in process memory: a [`store::CatalogStore`]
//! owns the product and category collections behind a single lock, and the
//! GraphQL resolvers read and mutate it directly. Nothing is persisted.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use katalog::prelude::*;
//!
//! let store = CatalogStore::seeded();
//! let schema = build_schema(store);
//! let app = build_router(schema);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:4000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod core;
pub mod graphql;
pub mod server;
pub mod store;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::core::error::StoreError;
    pub use crate::core::model::{Category, Product};
    pub use crate::graphql::{CatalogSchema, build_schema};
    pub use crate::server::build_router;
    pub use crate::store::CatalogStore;

    pub use anyhow::Result;
}
