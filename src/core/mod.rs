//! Core domain types shared by the store and the GraphQL layer

pub mod error;
pub mod model;

pub use error::StoreError;
pub use model::{Category, Product};
