use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub type ProductResult<T> = Result<T, ProductError>;

/// Errors surfaced by the products domain.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with id '{0}' was not found")]
    NotFound(i32),

    #[error("Invalid product: missing {0}")]
    MissingAttribute(&'static str),

    #[error("Invalid product: invalid {0}")]
    InvalidAttribute(&'static str),

    #[error("Invalid product: available must be a boolean")]
    AvailableNotBoolean,

    #[error("Invalid product: unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Invalid product: body of request contained bad or no data")]
    BadRequestBody,

    #[error("Update called with empty id field")]
    EmptyId,

    #[error("No products match {field} '{value}'")]
    FilterNeverMatches {
        field: &'static str,
        value: String,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) | ProductError::FilterNeverMatches { .. } => {
                AppError::NotFound(err.to_string())
            }
            // Store failures surface as a request error once rolled back.
            ProductError::Database(_) => AppError::BadRequest(err.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
