//! Type-safe error codes for API responses.
//!
//! Single source of truth for error codes used across the application.
//! Each error code includes:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Invalid JSON format in request body
    InvalidJson,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// Authentication credentials are missing or invalid
    Unauthorized,

    // Server errors (1000s)
    /// An unexpected internal server error occurred
    InternalError,

    // Storage errors (3000-3999)
    /// The backing storage file does not exist
    StorageUnavailable,

    /// The backing storage file could not be parsed
    StorageMalformed,

    /// I/O error while reading or writing storage
    IoError,
}

impl ErrorCode {
    /// String identifier for clients (SCREAMING_SNAKE_CASE).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::StorageUnavailable => "STORAGE_UNAVAILABLE",
            ErrorCode::StorageMalformed => "STORAGE_MALFORMED",
            ErrorCode::IoError => "IO_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::InvalidJson => 1002,
            ErrorCode::JsonExtraction => 1003,
            ErrorCode::NotFound => 1004,
            ErrorCode::Unauthorized => 1006,
            ErrorCode::InternalError => 1005,
            ErrorCode::StorageUnavailable => 3001,
            ErrorCode::StorageMalformed => 3002,
            ErrorCode::IoError => 3003,
        }
    }

    /// Default human-readable message.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::InvalidJson => "Invalid JSON format",
            ErrorCode::JsonExtraction => "Failed to read request body as JSON",
            ErrorCode::NotFound => "Requested resource was not found",
            ErrorCode::Unauthorized => "Authentication required",
            ErrorCode::InternalError => "An unexpected error occurred",
            ErrorCode::StorageUnavailable => "Storage file is missing",
            ErrorCode::StorageMalformed => "Storage file could not be parsed",
            ErrorCode::IoError => "An I/O error occurred",
        }
    }
}
