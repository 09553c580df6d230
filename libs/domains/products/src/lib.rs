//! Products domain: catalog model, validation, persistence, and HTTP routes.
//!
//! Layering follows repository -> service -> handlers. The repository trait
//! has a PostgreSQL implementation for production and an in-memory one for
//! tests and local development.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::{router, ApiDoc};
pub use memory::MemoryProductRepository;
pub use models::{Category, Product, ProductData, ProductFilter, ProductQuery};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
