use std::sync::Arc;

use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductData, ProductQuery};
use crate::repository::ProductRepository;

/// Business logic for the product catalog.
///
/// Generic over the repository so handlers can run against PostgreSQL in
/// production and the in-memory backend in tests.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, data), fields(product_name = %data.name))]
    pub async fn create_product(&self, data: ProductData) -> ProductResult<Product> {
        self.repository.create(data).await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        self.repository.find_all(query).await
    }

    #[instrument(skip(self))]
    pub async fn count_products(&self, query: ProductQuery) -> ProductResult<u64> {
        self.repository.count(query).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_product(&self, id: i32, data: ProductData) -> ProductResult<Product> {
        let product = data.into_product(Some(id));
        self.repository.update(&product).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}
