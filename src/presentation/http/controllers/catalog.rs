use crate::application::{
    commands::catalog::{AddPublisherMemberCommand, CreateCategoryCommand, CreatePublisherCommand},
    dto::{CategoryDto, PublisherDetailDto, PublisherDto},
};
use crate::domain::publisher::MembershipKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePublisherRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Empty for none.
    #[serde(default)]
    pub website: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddMemberRequest {
    pub user_id: i64,
    pub kind: MembershipKind,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/publishers",
    responses((status = 200, description = "All publishers by name.", body = [PublisherDto])),
    tag = "Catalog"
)]
pub async fn list_publishers(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PublisherDto>>> {
    state
        .services
        .catalog_queries
        .list_publishers()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/publishers/{id}",
    params(("id" = i64, Path, description = "Publisher identifier")),
    responses(
        (status = 200, description = "Publisher with its editors and journalists.", body = PublisherDetailDto),
        (status = 404, description = "Not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_publisher(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PublisherDetailDto>> {
    state
        .services
        .catalog_queries
        .get_publisher(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/publishers",
    request_body = CreatePublisherRequest,
    responses(
        (status = 200, description = "Publisher created.", body = PublisherDto),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalog"
)]
pub async fn create_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePublisherRequest>,
) -> HttpResult<Json<PublisherDto>> {
    let command = CreatePublisherCommand {
        name: payload.name,
        description: payload.description,
        website: payload.website,
    };

    state
        .services
        .catalog_commands
        .create_publisher(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/publishers/{id}/members",
    params(("id" = i64, Path, description = "Publisher identifier")),
    request_body = AddMemberRequest,
    responses(
        (status = 200, description = "Member attached.", body = PublisherDetailDto),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown publisher or user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalog"
)]
pub async fn add_publisher_member(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<AddMemberRequest>,
) -> HttpResult<Json<PublisherDetailDto>> {
    let command = AddPublisherMemberCommand {
        publisher_id: id,
        user_id: payload.user_id,
        kind: payload.kind,
    };

    state
        .services
        .catalog_commands
        .add_publisher_member(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses((status = 200, description = "All categories by name.", body = [CategoryDto])),
    tag = "Catalog"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .catalog_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created.", body = CategoryDto),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Catalog"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    let command = CreateCategoryCommand {
        name: payload.name,
        description: payload.description,
    };

    state
        .services
        .catalog_commands
        .create_category(&user, command)
        .await
        .into_http()
        .map(Json)
}
