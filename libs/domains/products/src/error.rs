use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with id {0} not found.")]
    NotFound(i64),

    #[error("Validation failed")]
    Validation(#[from] validator::ValidationErrors),

    // Message matches the original storage contract
    #[error("Products file not found.")]
    StorageUnavailable(PathBuf),

    #[error("Products file is malformed: {0}")]
    MalformedData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                AppError::NotFound(format!("Product with id {} not found.", id))
            }
            ProductError::Validation(errors) => AppError::ValidationError(errors),
            ProductError::StorageUnavailable(path) => {
                tracing::error!(path = %path.display(), "Products file not found");
                AppError::StorageUnavailable("Products file not found.".to_string())
            }
            ProductError::MalformedData(msg) => {
                AppError::StorageMalformed(format!("Products file is malformed: {}", msg))
            }
            ProductError::Io(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
