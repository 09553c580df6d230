//! REST route assembly for the Products API

pub mod index;

use axum::Router;
use domain_products::{PgProductRepository, ProductService};

/// Builds the application routes: landing page plus the products domain.
pub fn routes(service: ProductService<PgProductRepository>) -> Router {
    Router::new()
        .merge(index::router())
        .nest("/products", domain_products::router(service))
}
