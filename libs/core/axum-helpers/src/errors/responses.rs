//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "InternalServerError",
        "message": "Products file not found.",
        "details": null
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "BadRequest",
        "message": "Request validation failed",
        "details": {
            "title": [{
                "code": "length",
                "message": "Title is required.",
                "params": {"min": 1, "value": ""}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NotFound",
        "message": "Product with id 5 not found.",
        "details": null
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - Basic authentication required",
    content_type = "application/json",
    example = json!({
        "code": 1006,
        "error": "Unauthorized",
        "message": "Missing Authorization Header",
        "details": null
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);
