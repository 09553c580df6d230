//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "REST service for managing a product catalog",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "products", description = "Product catalog management")
    )
)]
pub struct ApiDoc;
