//! GraphQL API exposure
//!
//! Object types, root resolvers, and schema assembly. The store is
//! injected as schema context data; resolvers fetch it with
//! `ctx.data::<CatalogStore>()`.

mod mutations;
mod queries;
mod schema;
mod types;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;
pub use schema::{CatalogSchema, build_schema};
