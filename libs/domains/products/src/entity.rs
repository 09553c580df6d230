use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Product, ProductData};

/// Row model for the `products` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub price: Decimal,
    pub available: bool,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        // Rows written by older code may carry a tag we no longer know.
        let category = model.category.parse().unwrap_or(Category::Unknown);
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
            available: model.available,
            category,
        }
    }
}

impl From<ProductData> for ActiveModel {
    fn from(data: ProductData) -> Self {
        Self {
            id: NotSet,
            name: Set(data.name),
            description: Set(data.description),
            price: Set(data.price),
            available: Set(data.available),
            category: Set(data.category.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn model_converts_to_product() {
        let model = Model {
            id: 7,
            name: "Fedora".into(),
            description: "A red hat".into(),
            price: Decimal::from_str("12.50").unwrap(),
            available: true,
            category: "CLOTHS".into(),
        };
        let product: Product = model.into();
        assert_eq!(product.id, Some(7));
        assert_eq!(product.category, Category::Cloths);
    }

    #[test]
    fn unrecognized_stored_category_falls_back_to_unknown() {
        let model = Model {
            id: 1,
            name: "Lamp".into(),
            description: "Desk lamp".into(),
            price: Decimal::ZERO,
            available: true,
            category: "FURNITURE".into(),
        };
        let product: Product = model.into();
        assert_eq!(product.category, Category::Unknown);
    }
}
