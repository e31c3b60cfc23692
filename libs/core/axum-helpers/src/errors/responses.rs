//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "error": "Validation failed",
        "code": "VAL_001",
        "details": [{
            "field": "quantity",
            "constraint": "min",
            "message": "quantity must not be less than 0"
        }]
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid ID",
    content_type = "application/json",
    example = json!({
        "error": "ID must be a positive number",
        "code": "VAL_001",
        "details": [{
            "field": "id",
            "constraint": "positive",
            "message": "ID must be a positive number"
        }]
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "Material not found",
        "code": "NF_001"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - Resource already exists",
    content_type = "application/json",
    example = json!({
        "error": "Username already exists",
        "code": "DB_004"
    })
)]
pub struct ConflictResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Persistence operation failed",
    content_type = "application/json",
    example = json!({
        "error": "Failed to create material",
        "code": "OP_001"
    })
)]
pub struct OperationFailedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "Internal server error",
        "code": "GEN_001"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Too Many Requests",
    content_type = "application/json",
    example = json!({
        "error": "Too many requests, please try again later.",
        "code": "RATE_001"
    })
)]
pub struct RateLimitedResponse(pub ErrorResponse);
