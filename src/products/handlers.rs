use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::AppResult,
    hal::{CollectionModel, EntityModel, Hal, LinkBuilder},
    state::AppState,
};

use super::dto::{PriceRange, ProductRequest};
use super::repo_types::Product;
use super::services;

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products/category/:category", get(products_by_category))
        .route("/products/stock-below/:threshold", get(products_with_stock_below))
        .route("/products/price-between", get(products_in_price_range))
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses((status = 200, description = "Every product", body = [Product], content_type = "application/hal+json"))
)]
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> AppResult<Hal<CollectionModel<Product>>> {
    let products = services::list_products(&state).await?;
    Ok(Hal(state.links().collection(products, &uri)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product, content_type = "application/hal+json"),
        (status = 404, description = "No such product")
    )
)]
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Hal<EntityModel<Product>>> {
    let product = services::get_product(&state, id).await?;
    Ok(Hal(state.links().entity(product)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductRequest,
    responses((status = 201, description = "Product created", body = Product, content_type = "application/hal+json"))
)]
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> AppResult<impl IntoResponse> {
    let product = services::create_product(&state, payload).await?;
    let links = state.links();
    let location = links.link(&LinkBuilder::item_path::<Product>(product.id)).href;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Hal(links.entity(product)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product, content_type = "application/hal+json"),
        (status = 404, description = "No such product")
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductRequest>,
) -> AppResult<Hal<EntityModel<Product>>> {
    let product = services::update_product(&state, id, payload).await?;
    Ok(Hal(state.links().entity(product)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "No such product")
    )
)]
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    services::delete_product(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/products/category/{category}",
    tag = "products",
    params(("category" = String, Path, description = "Exact category name")),
    responses((status = 200, description = "Products in the category", body = [Product], content_type = "application/hal+json"))
)]
#[instrument(skip(state))]
pub async fn products_by_category(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(category): Path<String>,
) -> AppResult<Hal<CollectionModel<Product>>> {
    let products = services::products_by_category(&state, &category).await?;
    Ok(Hal(state.links().collection(products, &uri)))
}

#[utoipa::path(
    get,
    path = "/api/products/stock-below/{threshold}",
    tag = "products",
    params(("threshold" = i32, Path, description = "Exclusive upper bound on stock")),
    responses((status = 200, description = "Products running low", body = [Product], content_type = "application/hal+json"))
)]
#[instrument(skip(state))]
pub async fn products_with_stock_below(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(threshold): Path<i32>,
) -> AppResult<Hal<CollectionModel<Product>>> {
    let products = services::products_with_stock_below(&state, threshold).await?;
    Ok(Hal(state.links().collection(products, &uri)))
}

#[utoipa::path(
    get,
    path = "/api/products/price-between",
    tag = "products",
    params(PriceRange),
    responses(
        (status = 200, description = "Products priced within the range", body = [Product], content_type = "application/hal+json"),
        (status = 400, description = "min_price exceeds max_price")
    )
)]
#[instrument(skip(state))]
pub async fn products_in_price_range(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(range): Query<PriceRange>,
) -> AppResult<Hal<CollectionModel<Product>>> {
    let products = services::products_in_price_range(&state, &range).await?;
    Ok(Hal(state.links().collection(products, &uri)))
}
