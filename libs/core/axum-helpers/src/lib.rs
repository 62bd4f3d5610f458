//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`auth`]**: HTTP Basic authentication with a pluggable credential validator
//! - **[`server`]**: Server setup, router composition, graceful shutdown
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (validated JSON)
//! - **[`health`]**: Health endpoint reporting application identity

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod health;
pub mod server;

// Re-export auth types
pub use auth::{basic_auth_middleware, AuthConfig, BasicAuth, CredentialValidator, StaticCredentials};

// Re-export server types
pub use server::{create_app, create_router, shutdown_signal};

// Re-export health types
pub use health::{health_router, HealthResponse};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;
