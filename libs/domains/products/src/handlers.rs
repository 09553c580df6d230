use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_helpers::{ErrorResponse, JsonBody};
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{Category, Product, ProductData, ProductFilter};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the product routes.
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product
    ),
    components(schemas(Product, ProductData, Category, ErrorResponse)),
    tags((name = "products", description = "Product catalog management"))
)]
pub struct ApiDoc;

/// Routes for the products domain, to be nested under `/products`.
pub fn router<R>(service: ProductService<R>) -> Router
where
    R: ProductRepository + 'static,
{
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "",
    params(ProductFilter),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 404, description = "Filter value matches no products", body = ErrorResponse)
    ),
    tag = "products"
)]
async fn list_products<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    Query(filter): Query<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    let query = filter.into_query()?;
    let products = service.list_products(query).await?;
    Ok(Json(products))
}

#[utoipa::path(
    post,
    path = "",
    request_body = ProductData,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid product data", body = ErrorResponse),
        (status = 415, description = "Body is not JSON", body = ErrorResponse)
    ),
    tag = "products"
)]
async fn create_product<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    JsonBody(body): JsonBody,
) -> ProductResult<impl IntoResponse> {
    let data = ProductData::from_value(&body)?;
    let product = service.create_product(data).await?;
    let id = product
        .id
        .ok_or_else(|| ProductError::Database("created product has no id".into()))?;
    let location = format!("/products/{id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

#[utoipa::path(
    get,
    path = "/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "No such product", body = ErrorResponse)
    ),
    tag = "products"
)]
async fn get_product<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    put,
    path = "/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductData,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid product data", body = ErrorResponse),
        (status = 404, description = "No such product", body = ErrorResponse),
        (status = 415, description = "Body is not JSON", body = ErrorResponse)
    ),
    tag = "products"
)]
async fn update_product<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    Path(id): Path<i32>,
    JsonBody(body): JsonBody,
) -> ProductResult<Json<Product>> {
    let data = ProductData::from_value(&body)?;
    let product = service.update_product(id, data).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "No such product", body = ErrorResponse)
    ),
    tag = "products"
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    Path(id): Path<i32>,
) -> ProductResult<StatusCode> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
