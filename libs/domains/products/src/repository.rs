use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{Product, ProductData, ProductQuery};

/// Data access interface for products.
///
/// Implementations translate [`ProductQuery`] descriptors into their
/// backend's native filters; the PostgreSQL backend is the production one
/// and the in-memory backend serves tests and local development.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist new product attributes; the store assigns the id.
    async fn create(&self, data: ProductData) -> ProductResult<Product>;

    /// Look up a product by id.
    async fn find(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Evaluate a query and return every matching product.
    async fn find_all(&self, query: ProductQuery) -> ProductResult<Vec<Product>>;

    /// Count the products a query would return.
    async fn count(&self, query: ProductQuery) -> ProductResult<u64>;

    /// Commit changes to an existing product under its current id.
    async fn update(&self, product: &Product) -> ProductResult<Product>;

    /// Delete a product by id, reporting whether it existed.
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Remove every product.
    async fn delete_all(&self) -> ProductResult<()>;
}
