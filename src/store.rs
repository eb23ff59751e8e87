//! In-memory catalog store
//!
//! [`CatalogStore`] is the single owner of the dataset. It is a cheap
//! cloneable handle over `Arc<RwLock<..>>`: one lock guards both
//! collections, so concurrent requests serialize at the store boundary.
//!
//! Product ids come from a monotonic counter seeded to the highest seed
//! id, so ids stay unique even after deletions.

use crate::core::error::StoreError;
use crate::core::model::{Category, Product};
use std::sync::{Arc, RwLock};

struct Inner {
    products: Vec<Product>,
    categories: Vec<Category>,
    next_product_id: i64,
}

/// Thread-safe in-memory store for products and categories
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<Inner>>,
}

impl CatalogStore {
    /// Create a store from explicit collections
    ///
    /// The id counter starts just past the highest product id present.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        let next_product_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(RwLock::new(Inner {
                products,
                categories,
                next_product_id,
            })),
        }
    }

    /// Create a store populated with the fixed seed dataset
    pub fn seeded() -> Self {
        let products = vec![
            Product::new(1, "Baju tidur", 1),
            Product::new(2, "Baju renang", 1),
            Product::new(3, "Kursi kaku 8", 2),
            Product::new(4, "Lampu hias", 2),
            Product::new(5, "Meja 360", 2),
            Product::new(6, "Lampu otomatis", 3),
            Product::new(7, "Panel surya", 3),
            Product::new(8, "Palu medium", 4),
            Product::new(9, "Gergaji 2 sisi", 4),
            Product::new(10, "Gerinda ringan", 4),
        ];
        let categories = vec![
            Category::new(1, "Pakaian"),
            Category::new(2, "Pelengkapan rumah"),
            Category::new(3, "Elektronik"),
            Category::new(4, "Perkakas"),
        ];
        Self::new(products, categories)
    }

    /// Look up a product by id
    pub fn product(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::poisoned("product"))?;
        Ok(inner.products.iter().find(|p| p.id == id).cloned())
    }

    /// List all products in insertion order
    pub fn products(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::poisoned("products"))?;
        Ok(inner.products.clone())
    }

    /// Look up a category by id
    pub fn category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::poisoned("category"))?;
        Ok(inner.categories.iter().find(|c| c.id == id).cloned())
    }

    /// List all categories in insertion order
    pub fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::poisoned("categories"))?;
        Ok(inner.categories.clone())
    }

    /// Append a new product and return it
    ///
    /// The referenced category is not checked for existence.
    pub fn insert_product(
        &self,
        name: String,
        category_id: i64,
    ) -> Result<Product, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::poisoned("insert_product"))?;
        let product = Product {
            id: inner.next_product_id,
            name,
            category_id,
        };
        inner.next_product_id += 1;
        inner.products.push(product.clone());
        Ok(product)
    }

    /// Update the first product matching `id`
    ///
    /// Each provided field overwrites; omitted fields are left unchanged.
    /// Returns the updated product, or the zero-valued sentinel when no id
    /// matched (the store is left untouched).
    pub fn update_product(
        &self,
        id: i64,
        name: Option<String>,
        category_id: Option<i64>,
    ) -> Result<Product, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::poisoned("update_product"))?;
        match inner.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                if let Some(name) = name {
                    product.name = name;
                }
                if let Some(category_id) = category_id {
                    product.category_id = category_id;
                }
                Ok(product.clone())
            }
            None => Ok(Product::zero()),
        }
    }

    /// Remove the first product matching `id`
    ///
    /// Returns the removed product, or the zero-valued sentinel when no id
    /// matched.
    pub fn delete_product(&self, id: i64) -> Result<Product, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::poisoned("delete_product"))?;
        match inner.products.iter().position(|p| p.id == id) {
            Some(index) => Ok(inner.products.remove(index)),
            None => Ok(Product::zero()),
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
