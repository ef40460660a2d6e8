// src/presentation/http/controllers/categories.rs
use crate::application::{dto::CategoryDto, inputs::CreateCategoryInput};
use crate::presentation::http::error::{HttpResult, IntoHttpResult, ProblemDetails};
use crate::presentation::http::extractors::RequestCancellation;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use uuid::Uuid;

const GET_ALL_FAILED: &str = "Error while getting all categories.";
const GET_BY_ID_FAILED: &str = "Error while getting category by id.";
const GET_BY_NAME_FAILED: &str = "Error while getting category by name.";
const CREATE_FAILED: &str = "Error while creating new category.";

#[utoipa::path(
    get,
    path = "/category",
    responses(
        (status = 200, description = "All categories ordered by name.", body = [CategoryDto]),
        (status = 400, description = "Lookup failed.", body = ProblemDetails)
    ),
    tag = "Categories"
)]
pub async fn get_categories(
    Extension(state): Extension<HttpState>,
    cancellation: RequestCancellation,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .get_categories(cancellation.token())
        .await
        .map(|categories| categories.into_iter().map(CategoryDto::from).collect())
        .into_http(GET_ALL_FAILED)
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/category/{id}",
    params(("id" = Uuid, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "The category.", body = CategoryDto),
        (status = 400, description = "Lookup failed.", body = ProblemDetails)
    ),
    tag = "Categories"
)]
pub async fn get_category_by_id(
    Extension(state): Extension<HttpState>,
    cancellation: RequestCancellation,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_id(id, cancellation.token())
        .await
        .map(CategoryDto::from)
        .into_http(GET_BY_ID_FAILED)
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/category/by-name/{name}",
    params(("name" = String, Path, description = "Exact, case-sensitive category name")),
    responses(
        (status = 200, description = "The category.", body = CategoryDto),
        (status = 400, description = "Lookup failed.", body = ProblemDetails)
    ),
    tag = "Categories"
)]
pub async fn get_category_by_name(
    Extension(state): Extension<HttpState>,
    cancellation: RequestCancellation,
    Path(name): Path<String>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_name(&name, cancellation.token())
        .await
        .map(CategoryDto::from)
        .into_http(GET_BY_NAME_FAILED)
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/category",
    request_body = CreateCategoryInput,
    responses(
        (status = 200, description = "The created category.", body = CategoryDto),
        (status = 400, description = "Creation failed.", body = ProblemDetails)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    cancellation: RequestCancellation,
    Json(input): Json<CreateCategoryInput>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .create_category(input, cancellation.token())
        .await
        .map(CategoryDto::from)
        .into_http(CREATE_FAILED)
        .map(Json)
}
