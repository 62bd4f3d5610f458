//! Products Domain
//!
//! A complete domain implementation for managing products persisted in a
//! single JSON catalog file.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + JSON-file implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::auth::{BasicAuth, StaticCredentials};
//! use domain_products::{handlers, JsonFileProductRepository, ProductService};
//!
//! let repository = JsonFileProductRepository::new("data/products.json");
//! let service = ProductService::new(repository);
//! let auth = BasicAuth::new(StaticCredentials::new("user", "pass"), "products");
//!
//! // Axum router, ready to be nested under /products
//! let router = handlers::router(service, auth);
//! ```

pub mod error;
pub mod handlers;
pub mod json_file;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use json_file::JsonFileProductRepository;
pub use models::{Catalog, Product, ProductDraft};
pub use repository::ProductRepository;
pub use service::ProductService;
