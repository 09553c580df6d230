//! # Axum Helpers
//!
//! A collection of utilities and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured JSON error responses
//! - **[`extractors`]**: Custom extractors (JSON request bodies)
//! - **[`server`]**: Server setup, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(routes);
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::JsonBody;

// Re-export server types
pub use server::{create_app, create_production_app, create_router, health_router, shutdown_signal};
