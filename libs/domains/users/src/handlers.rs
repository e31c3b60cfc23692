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
        BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse, NotFoundResponse,
        OperationFailedResponse,
    },
    extractors::page_query::PageParams,
};
use database::Paginated;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser};
use crate::repository::UserRepository;
use crate::serializer::UserResponse;
use crate::use_cases::UserUseCases;

pub const TAG: &str = "users";

#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(
        schemas(UserResponse, CreateUser, UpdateUser),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            ConflictResponse,
            OperationFailedResponse
        )
    ),
    tags(
        (name = TAG, description = "Borrowers")
    )
)]
pub struct ApiDoc;

pub fn router<R: UserRepository + 'static>(use_cases: UserUseCases<R>) -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(Arc::new(use_cases))
}

/// List live users one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of users", body = Paginated<UserResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn list_users<R: UserRepository + 'static>(
    State(use_cases): State<Arc<UserUseCases<R>>>,
    PageQuery(page): PageQuery,
) -> UserResult<Json<Paginated<UserResponse>>> {
    let users = use_cases.find_all.execute(page).await?;
    Ok(Json(users.map(UserResponse::from)))
}

/// Register a user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn create_user<R: UserRepository + 'static>(
    State(use_cases): State<Arc<UserUseCases<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = use_cases.create.execute(input).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "User ID", minimum = 1)),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn get_user<R: UserRepository + 'static>(
    State(use_cases): State<Arc<UserUseCases<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<UserResponse>> {
    let user = use_cases.find_by_id.execute(id).await?;
    Ok(Json(user.into()))
}

/// Replace a user's profile (username is immutable)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "User ID", minimum = 1)),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn update_user<R: UserRepository + 'static>(
    State(use_cases): State<Arc<UserUseCases<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<Json<UserResponse>> {
    let user = use_cases.update.execute(id, input).await?;
    Ok(Json(user.into()))
}

/// Soft-delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "User ID", minimum = 1)),
    responses(
        (status = 200, description = "User deleted; returns the marked record", body = UserResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = OperationFailedResponse)
    )
)]
async fn delete_user<R: UserRepository + 'static>(
    State(use_cases): State<Arc<UserUseCases<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<UserResponse>> {
    let user = use_cases.delete.execute(id).await?;
    Ok(Json(user.into()))
}
