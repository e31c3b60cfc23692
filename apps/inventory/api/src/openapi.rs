use axum_helpers::{
    ErrorCode, ErrorResponse, FieldViolation,
    errors::responses::{InternalServerErrorResponse, RateLimitedResponse},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(ErrorResponse, ErrorCode, FieldViolation),
        responses(RateLimitedResponse, InternalServerErrorResponse)
    ),
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Materials and borrowers for the inventory lending service"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/materials", api = domain_materials::handlers::ApiDoc),
        (path = "/users", api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
