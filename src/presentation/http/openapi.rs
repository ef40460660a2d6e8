// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::products::get_products,
        crate::presentation::http::controllers::products::get_product_by_id,
        crate::presentation::http::controllers::products::get_product_by_name,
        crate::presentation::http::controllers::products::create_product,
        crate::presentation::http::controllers::products::update_product,
        crate::presentation::http::controllers::categories::get_categories,
        crate::presentation::http::controllers::categories::get_category_by_id,
        crate::presentation::http::controllers::categories::get_category_by_name,
        crate::presentation::http::controllers::categories::create_category,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ProblemDetails,
            crate::application::inputs::CreateProductInput,
            crate::application::inputs::UpdateProductInput,
            crate::application::inputs::CreateCategoryInput,
            crate::application::dto::ProductDto,
            crate::application::dto::CategoryDto
        )
    ),
    tags(
        (name = "Products", description = "Product endpoints"),
        (name = "Categories", description = "Category endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Catalog API",
        description = "Product and category catalog",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
