use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductData, ProductQuery};
use crate::repository::ProductRepository;

/// In-memory implementation of [`ProductRepository`].
///
/// Mirrors the PostgreSQL backend's semantics, including monotonically
/// increasing id assignment on create. Identifiers are never reused, even
/// after deletes.
#[derive(Default)]
pub struct MemoryProductRepository {
    products: RwLock<BTreeMap<i32, Product>>,
    next_id: AtomicI32,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    #[instrument(skip(self, data), fields(product_name = %data.name))]
    async fn create(&self, data: ProductData) -> ProductResult<Product> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let product = data.into_product(Some(id));
        self.products.write().await.insert(id, product.clone());
        Ok(product)
    }

    async fn find(&self, id: i32) -> ProductResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn find_all(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        Ok(self
            .products
            .read()
            .await
            .values()
            .filter(|product| query.matches(product))
            .cloned()
            .collect())
    }

    async fn count(&self, query: ProductQuery) -> ProductResult<u64> {
        Ok(self
            .products
            .read()
            .await
            .values()
            .filter(|product| query.matches(product))
            .count() as u64)
    }

    async fn update(&self, product: &Product) -> ProductResult<Product> {
        let id = product.id.ok_or(ProductError::EmptyId)?;
        let mut products = self.products.write().await;
        if !products.contains_key(&id) {
            return Err(ProductError::NotFound(id));
        }
        products.insert(id, product.clone());
        Ok(product.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> ProductResult<bool> {
        Ok(self.products.write().await.remove(&id).is_some())
    }

    async fn delete_all(&self) -> ProductResult<()> {
        self.products.write().await.clear();
        Ok(())
    }
}
