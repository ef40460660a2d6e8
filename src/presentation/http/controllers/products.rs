// src/presentation/http/controllers/products.rs
use crate::application::{
    dto::ProductDto,
    inputs::{CreateProductInput, UpdateProductInput},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult, ProblemDetails};
use crate::presentation::http::extractors::RequestCancellation;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use uuid::Uuid;

const GET_ALL_FAILED: &str = "Error while getting all products.";
const GET_BY_ID_FAILED: &str = "Error while getting product by id.";
const GET_BY_NAME_FAILED: &str = "Error while getting product by name.";
const CREATE_FAILED: &str = "Error while creating new product.";
const UPDATE_FAILED: &str = "Error while updating product.";

#[utoipa::path(
    get,
    path = "/product",
    responses(
        (status = 200, description = "All products.", body = [ProductDto]),
        (status = 400, description = "Lookup failed.", body = ProblemDetails)
    ),
    tag = "Products"
)]
pub async fn get_products(
    Extension(state): Extension<HttpState>,
    cancellation: RequestCancellation,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .product_queries
        .get_products(cancellation.token())
        .await
        .map(|products| products.into_iter().map(ProductDto::from).collect())
        .into_http(GET_ALL_FAILED)
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    params(("id" = Uuid, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "The product.", body = ProductDto),
        (status = 400, description = "Lookup failed.", body = ProblemDetails)
    ),
    tag = "Products"
)]
pub async fn get_product_by_id(
    Extension(state): Extension<HttpState>,
    cancellation: RequestCancellation,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product_by_id(id, cancellation.token())
        .await
        .map(ProductDto::from)
        .into_http(GET_BY_ID_FAILED)
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/product/by-name/{name}",
    params(("name" = String, Path, description = "Exact product name")),
    responses(
        (status = 200, description = "The product.", body = ProductDto),
        (status = 400, description = "Lookup failed.", body = ProblemDetails)
    ),
    tag = "Products"
)]
pub async fn get_product_by_name(
    Extension(state): Extension<HttpState>,
    cancellation: RequestCancellation,
    Path(name): Path<String>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product_by_name(&name, cancellation.token())
        .await
        .map(ProductDto::from)
        .into_http(GET_BY_NAME_FAILED)
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/product",
    request_body = CreateProductInput,
    responses(
        (status = 200, description = "The created product with its category.", body = ProductDto),
        (status = 400, description = "Creation failed.", body = ProblemDetails)
    ),
    tag = "Products"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    cancellation: RequestCancellation,
    Json(input): Json<CreateProductInput>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_commands
        .create_product(input, cancellation.token())
        .await
        .map(ProductDto::from)
        .into_http(CREATE_FAILED)
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/product",
    request_body = UpdateProductInput,
    responses(
        (status = 200, description = "The updated product with its category.", body = ProductDto),
        (status = 400, description = "Update failed.", body = ProblemDetails)
    ),
    tag = "Products"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    cancellation: RequestCancellation,
    Json(input): Json<UpdateProductInput>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_commands
        .update_product(input, cancellation.token())
        .await
        .map(ProductDto::from)
        .into_http(UPDATE_FAILED)
        .map(Json)
}
