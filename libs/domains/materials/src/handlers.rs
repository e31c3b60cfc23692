use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, PageQuery, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, OperationFailedResponse,
    },
    extractors::page_query::PageParams,
};
use database::Paginated;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::MaterialResult;
use crate::models::{CreateMaterial, UpdateMaterial};
use crate::repository::MaterialRepository;
use crate::serializer::MaterialResponse;
use crate::use_cases::MaterialUseCases;

pub const TAG: &str = "materials";

/// OpenAPI documentation for Materials API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_materials,
        create_material,
        get_material,
        update_material,
        delete_material,
    ),
    components(
        schemas(MaterialResponse, CreateMaterial, UpdateMaterial),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            OperationFailedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Inventory materials")
    )
)]
pub struct ApiDoc;

/// Create the material router with all HTTP endpoints
pub fn router<R: MaterialRepository + 'static>(use_cases: MaterialUseCases<R>) -> Router {
    Router::new()
        .route("/", get(list_materials).post(create_material))
        .route(
            "/{id}",
            get(get_material)
                .put(update_material)
                .delete(delete_material),
        )
        .with_state(Arc::new(use_cases))
}

/// List live materials one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of materials", body = Paginated<MaterialResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn list_materials<R: MaterialRepository + 'static>(
    State(use_cases): State<Arc<MaterialUseCases<R>>>,
    PageQuery(page): PageQuery,
) -> MaterialResult<Json<Paginated<MaterialResponse>>> {
    let materials = use_cases.find_all.execute(page).await?;
    Ok(Json(materials.map(MaterialResponse::from)))
}

/// Create a material
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateMaterial,
    responses(
        (status = 201, description = "Material created", body = MaterialResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn create_material<R: MaterialRepository + 'static>(
    State(use_cases): State<Arc<MaterialUseCases<R>>>,
    ValidatedJson(input): ValidatedJson<CreateMaterial>,
) -> MaterialResult<impl IntoResponse> {
    let material = use_cases.create.execute(input).await?;
    Ok((StatusCode::CREATED, Json(MaterialResponse::from(material))))
}

/// Get a material by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Material ID", minimum = 1)
    ),
    responses(
        (status = 200, description = "Material found", body = MaterialResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn get_material<R: MaterialRepository + 'static>(
    State(use_cases): State<Arc<MaterialUseCases<R>>>,
    IdPath(id): IdPath,
) -> MaterialResult<Json<MaterialResponse>> {
    let material = use_cases.find_by_id.execute(id).await?;
    Ok(Json(material.into()))
}

/// Replace a material's fields
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Material ID", minimum = 1)
    ),
    request_body = UpdateMaterial,
    responses(
        (status = 200, description = "Material updated", body = MaterialResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn update_material<R: MaterialRepository + 'static>(
    State(use_cases): State<Arc<MaterialUseCases<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateMaterial>,
) -> MaterialResult<Json<MaterialResponse>> {
    let material = use_cases.update.execute(id, input).await?;
    Ok(Json(material.into()))
}

/// Soft-delete a material
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Material ID", minimum = 1)
    ),
    responses(
        (status = 200, description = "Material deleted; returns the marked record", body = MaterialResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn delete_material<R: MaterialRepository + 'static>(
    State(use_cases): State<Arc<MaterialUseCases<R>>>,
    IdPath(id): IdPath,
) -> MaterialResult<Json<MaterialResponse>> {
    let material = use_cases.delete.execute(id).await?;
    Ok(Json(material.into()))
}
