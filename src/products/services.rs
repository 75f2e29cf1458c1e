use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::products::dto::{PriceRange, ProductRequest};
use crate::products::repo_types::Product;
use crate::state::AppState;

pub async fn list_products(st: &AppState) -> AppResult<Vec<Product>> {
    Ok(st.products.list().await?)
}

pub async fn get_product(st: &AppState, id: i64) -> AppResult<Product> {
    st.products
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found("product", id))
}

pub async fn create_product(st: &AppState, req: ProductRequest) -> AppResult<Product> {
    let product = st.products.insert(&req).await?;
    info!(product_id = product.id, "product created");
    Ok(product)
}

pub async fn update_product(st: &AppState, id: i64, req: ProductRequest) -> AppResult<Product> {
    let product = st
        .products
        .update(id, &req)
        .await?
        .ok_or_else(|| AppError::not_found("product", id))?;
    info!(product_id = id, "product updated");
    Ok(product)
}

pub async fn delete_product(st: &AppState, id: i64) -> AppResult<()> {
    if !st.products.delete(id).await? {
        return Err(AppError::not_found("product", id));
    }
    info!(product_id = id, "product deleted");
    Ok(())
}

pub async fn products_by_category(st: &AppState, category: &str) -> AppResult<Vec<Product>> {
    Ok(st.products.by_category(category).await?)
}

pub async fn products_with_stock_below(st: &AppState, threshold: i32) -> AppResult<Vec<Product>> {
    Ok(st.products.stock_below(threshold).await?)
}

pub async fn products_in_price_range(st: &AppState, range: &PriceRange) -> AppResult<Vec<Product>> {
    if !range.min_price.is_finite() || !range.max_price.is_finite() {
        warn!(min = range.min_price, max = range.max_price, "non-finite price bound");
        return Err(AppError::BadRequest(
            "min_price and max_price must be finite numbers".into(),
        ));
    }
    if range.min_price > range.max_price {
        warn!(min = range.min_price, max = range.max_price, "inverted price range");
        return Err(AppError::BadRequest(
            "min_price must not exceed max_price".into(),
        ));
    }
    Ok(st
        .products
        .price_between(range.min_price, range.max_price)
        .await?)
}
