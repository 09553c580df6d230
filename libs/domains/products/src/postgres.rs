use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter,
};
use tracing::instrument;

use crate::entity;
use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductData, ProductQuery};
use crate::repository::ProductRepository;

/// PostgreSQL implementation of [`ProductRepository`] backed by sea-orm.
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Translate a query descriptor into a SQL condition.
    fn build_condition(query: &ProductQuery) -> Condition {
        match query {
            ProductQuery::All => Condition::all(),
            ProductQuery::Name(name) => {
                Condition::all().add(entity::Column::Name.eq(name.clone()))
            }
            ProductQuery::Category(category) => {
                Condition::all().add(entity::Column::Category.eq(category.to_string()))
            }
            ProductQuery::Available(available) => {
                Condition::all().add(entity::Column::Available.eq(*available))
            }
            ProductQuery::Price(price) => {
                Condition::all().add(entity::Column::Price.eq(*price))
            }
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self, data), fields(product_name = %data.name))]
    async fn create(&self, data: ProductData) -> ProductResult<Product> {
        let active: entity::ActiveModel = data.into();
        let model = active.insert(&self.db).await?;
        tracing::info!(product_id = model.id, "Product created");
        Ok(model.into())
    }

    async fn find(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .filter(Self::build_condition(&query))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self, query: ProductQuery) -> ProductResult<u64> {
        let count = entity::Entity::find()
            .filter(Self::build_condition(&query))
            .count(&self.db)
            .await?;
        Ok(count)
    }

    #[instrument(skip(self, product), fields(product_id = ?product.id))]
    async fn update(&self, product: &Product) -> ProductResult<Product> {
        let id = product.id.ok_or(ProductError::EmptyId)?;
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let active = entity::ActiveModel {
            id: Set(id),
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            available: Set(product.available),
            category: Set(product.category.to_string()),
        };
        let model = active.update(&self.db).await?;
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> ProductResult<()> {
        entity::Entity::delete_many().exec(&self.db).await?;
        Ok(())
    }
}
