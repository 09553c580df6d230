use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ProductError, ProductResult};

/// Product category, stored and wire-encoded as its upper-case name.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

/// A catalog product.
///
/// `id` is `None` until the store assigns one on create. Prices are exact
/// decimals; `rust_decimal` serializes them as JSON strings and accepts
/// either strings or numbers on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "12.50")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

/// Validated product attributes, without an identifier.
///
/// Built from untrusted JSON via [`ProductData::from_value`], which enforces
/// the type and presence rules field by field so each failure mode maps to a
/// distinct error message.
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct ProductData {
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "12.50")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

impl ProductData {
    /// Validates a JSON body into product attributes.
    ///
    /// `name` and `description` must be non-null strings, `price` a decimal
    /// string or number, `available` a strict JSON boolean, and `category` a
    /// known category name. Extra attributes are ignored.
    pub fn from_value(data: &Value) -> ProductResult<Self> {
        let map = data.as_object().ok_or(ProductError::BadRequestBody)?;

        let name = require_string(map, "name")?;
        if name.is_empty() {
            return Err(ProductError::InvalidAttribute("name"));
        }
        let description = require_string(map, "description")?;

        let price = match map.get("price") {
            Some(Value::String(raw)) => Decimal::from_str(raw.trim())
                .map_err(|_| ProductError::InvalidAttribute("price"))?,
            Some(value @ Value::Number(_)) => serde_json::from_value(value.clone())
                .map_err(|_| ProductError::InvalidAttribute("price"))?,
            Some(_) => return Err(ProductError::InvalidAttribute("price")),
            None => return Err(ProductError::MissingAttribute("price")),
        };

        let available = match map.get("available") {
            Some(Value::Bool(flag)) => *flag,
            Some(_) => return Err(ProductError::AvailableNotBoolean),
            None => return Err(ProductError::MissingAttribute("available")),
        };

        let category = match map.get("category") {
            Some(Value::String(raw)) => raw
                .parse::<Category>()
                .map_err(|_| ProductError::UnknownCategory(raw.clone()))?,
            Some(_) => return Err(ProductError::InvalidAttribute("category")),
            None => return Err(ProductError::MissingAttribute("category")),
        };

        Ok(Self {
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            available,
            category,
        })
    }

    pub fn into_product(self, id: Option<i32>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            available: self.available,
            category: self.category,
        }
    }
}

fn require_string<'a>(
    map: &'a serde_json::Map<String, Value>,
    key: &'static str,
) -> ProductResult<&'a str> {
    match map.get(key) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(ProductError::InvalidAttribute(key)),
        None => Err(ProductError::MissingAttribute(key)),
    }
}

/// A selection over the catalog, evaluated by the repository.
///
/// Constructing a query performs no work; repositories translate it into
/// their backend's native filter when `find_all` or `count` runs, so the
/// same value can be evaluated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductQuery {
    All,
    Name(String),
    Category(Category),
    Available(bool),
    Price(Decimal),
}

impl ProductQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn by_category(category: Category) -> Self {
        Self::Category(category)
    }

    pub fn by_availability(available: bool) -> Self {
        Self::Available(available)
    }

    pub fn by_price(price: Decimal) -> Self {
        Self::Price(price)
    }

    /// Parses a textual price, tolerating surrounding whitespace and quotes
    /// that query-string clients tend to send (`?price="12.50"`).
    pub fn by_price_str(raw: &str) -> ProductResult<Self> {
        let cleaned = raw.trim().trim_matches(|c| c == '"' || c == '\'').trim();
        let price =
            Decimal::from_str(cleaned).map_err(|_| ProductError::InvalidAttribute("price"))?;
        Ok(Self::Price(price))
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Name(name) => product.name == *name,
            Self::Category(category) => product.category == *category,
            Self::Available(available) => product.available == *available,
            Self::Price(price) => product.price == *price,
        }
    }
}

/// Query-string parameters accepted by the listing endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<String>,
    pub price: Option<String>,
}

impl ProductFilter {
    /// Resolves the parameters into a single query.
    ///
    /// Only one criterion applies per request; `name` takes precedence over
    /// `category`, then `available`, then `price`. A recognized parameter
    /// whose value names nothing in the domain (unknown category, non-boolean
    /// availability) yields [`ProductError::FilterNeverMatches`].
    pub fn into_query(self) -> ProductResult<ProductQuery> {
        if let Some(name) = self.name {
            return Ok(ProductQuery::Name(name));
        }
        if let Some(category) = self.category {
            return category
                .parse::<Category>()
                .map(ProductQuery::Category)
                .map_err(|_| ProductError::FilterNeverMatches {
                    field: "category",
                    value: category,
                });
        }
        if let Some(available) = self.available {
            return match available.to_ascii_lowercase().as_str() {
                "true" => Ok(ProductQuery::Available(true)),
                "false" => Ok(ProductQuery::Available(false)),
                _ => Err(ProductError::FilterNeverMatches {
                    field: "available",
                    value: available,
                }),
            };
        }
        if let Some(price) = self.price {
            return ProductQuery::by_price_str(&price);
        }
        Ok(ProductQuery::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_value() -> Value {
        json!({
            "name": "Fedora",
            "description": "A red hat",
            "price": "12.50",
            "available": true,
            "category": "CLOTHS",
        })
    }

    #[test]
    fn category_round_trips_through_display_and_from_str() {
        for category in [
            Category::Unknown,
            Category::Cloths,
            Category::Food,
            Category::Housewares,
            Category::Automotive,
            Category::Tools,
        ] {
            let name = category.to_string();
            assert_eq!(name, name.to_uppercase());
            assert_eq!(name.parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn category_serializes_as_upper_case_name() {
        assert_eq!(
            serde_json::to_value(Category::Housewares).unwrap(),
            json!("HOUSEWARES")
        );
        assert_eq!(
            serde_json::from_value::<Category>(json!("AUTOMOTIVE")).unwrap(),
            Category::Automotive
        );
    }

    #[test]
    fn product_serializes_price_as_string() {
        let product = Product {
            id: Some(1),
            name: "Fedora".into(),
            description: "A red hat".into(),
            price: Decimal::from_str("12.50").unwrap(),
            available: true,
            category: Category::Cloths,
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["price"], json!("12.50"));
        assert_eq!(value["category"], json!("CLOTHS"));
    }

    #[test]
    fn product_deserializes_numeric_price() {
        let product: Product = serde_json::from_value(json!({
            "id": 3,
            "name": "Wrench",
            "description": "Adjustable",
            "price": 18.95,
            "available": false,
            "category": "TOOLS",
        }))
        .unwrap();
        assert_eq!(product.price, Decimal::from_str("18.95").unwrap());
        assert!(!product.available);
    }

    #[test]
    fn from_value_accepts_valid_body() {
        let data = ProductData::from_value(&sample_value()).unwrap();
        assert_eq!(data.name, "Fedora");
        assert_eq!(data.price, Decimal::from_str("12.50").unwrap());
        assert_eq!(data.category, Category::Cloths);
    }

    #[test]
    fn from_value_rejects_non_object_body() {
        let err = ProductData::from_value(&json!("not an object")).unwrap_err();
        assert!(matches!(err, ProductError::BadRequestBody));
    }

    #[test]
    fn from_value_rejects_missing_name() {
        let mut value = sample_value();
        value.as_object_mut().unwrap().remove("name");
        let err = ProductData::from_value(&value).unwrap_err();
        assert!(matches!(err, ProductError::MissingAttribute("name")));
    }

    #[test]
    fn from_value_rejects_string_available() {
        let mut value = sample_value();
        value["available"] = json!("true");
        let err = ProductData::from_value(&value).unwrap_err();
        assert!(matches!(err, ProductError::AvailableNotBoolean));
    }

    #[test]
    fn from_value_rejects_unknown_category() {
        let mut value = sample_value();
        value["category"] = json!("FURNITURE");
        let err = ProductData::from_value(&value).unwrap_err();
        assert!(matches!(err, ProductError::UnknownCategory(name) if name == "FURNITURE"));
    }

    #[test]
    fn from_value_accepts_numeric_price() {
        let mut value = sample_value();
        value["price"] = json!(12.5);
        let data = ProductData::from_value(&value).unwrap();
        assert_eq!(data.price, Decimal::from_str("12.5").unwrap());
    }

    #[test]
    fn by_price_str_strips_quotes_and_whitespace() {
        let query = ProductQuery::by_price_str(" \"12.50\" ").unwrap();
        assert_eq!(
            query,
            ProductQuery::Price(Decimal::from_str("12.50").unwrap())
        );
    }

    #[test]
    fn by_price_str_rejects_garbage() {
        let err = ProductQuery::by_price_str("twelve").unwrap_err();
        assert!(matches!(err, ProductError::InvalidAttribute("price")));
    }

    #[test]
    fn query_matches_each_criterion() {
        let product = ProductData::from_value(&sample_value())
            .unwrap()
            .into_product(Some(1));
        assert!(ProductQuery::All.matches(&product));
        assert!(ProductQuery::by_name("Fedora").matches(&product));
        assert!(!ProductQuery::by_name("Hat").matches(&product));
        assert!(ProductQuery::by_category(Category::Cloths).matches(&product));
        assert!(ProductQuery::by_availability(true).matches(&product));
        assert!(ProductQuery::by_price(Decimal::from_str("12.5").unwrap()).matches(&product));
    }

    #[test]
    fn filter_name_takes_precedence() {
        let filter = ProductFilter {
            name: Some("Fedora".into()),
            category: Some("TOOLS".into()),
            available: Some("true".into()),
            price: None,
        };
        assert_eq!(
            filter.into_query().unwrap(),
            ProductQuery::Name("Fedora".into())
        );
    }

    #[test]
    fn filter_unknown_category_never_matches() {
        let filter = ProductFilter {
            category: Some("FURNITURE".into()),
            ..Default::default()
        };
        let err = filter.into_query().unwrap_err();
        assert!(matches!(
            err,
            ProductError::FilterNeverMatches { field: "category", .. }
        ));
    }

    #[test]
    fn filter_available_is_case_insensitive() {
        let filter = ProductFilter {
            available: Some("True".into()),
            ..Default::default()
        };
        assert_eq!(filter.into_query().unwrap(), ProductQuery::Available(true));
    }

    #[test]
    fn filter_non_boolean_available_never_matches() {
        let filter = ProductFilter {
            available: Some("3".into()),
            ..Default::default()
        };
        let err = filter.into_query().unwrap_err();
        assert!(matches!(
            err,
            ProductError::FilterNeverMatches { field: "available", .. }
        ));
    }

    #[test]
    fn filter_without_parameters_selects_everything() {
        assert_eq!(
            ProductFilter::default().into_query().unwrap(),
            ProductQuery::All
        );
    }
}
