use time::OffsetDateTime;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::orders::dto::{DateRange, OrderRequest};
use crate::orders::repo_types::{NewOrder, Order, PENDING};
use crate::state::AppState;
use crate::users::services::ensure_user;

pub async fn list_orders(st: &AppState) -> AppResult<Vec<Order>> {
    Ok(st.orders.list().await?)
}

pub async fn get_order(st: &AppState, id: i64) -> AppResult<Order> {
    st.orders
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found("order", id))
}

pub async fn create_order(st: &AppState, req: OrderRequest) -> AppResult<Order> {
    let new = NewOrder {
        status: req.status.unwrap_or_else(|| PENDING.to_string()),
        date: req.date.unwrap_or_else(OffsetDateTime::now_utc),
        total: req.total,
        user_id: req.user_id,
    };
    let order = st.orders.insert(&new).await.map_err(|e| {
        warn!(user_id = new.user_id, error = %e, "order rejected");
        e
    })?;
    info!(order_id = order.id, user_id = order.user_id, "order created");
    Ok(order)
}

pub async fn update_order(st: &AppState, id: i64, req: OrderRequest) -> AppResult<Order> {
    let current = get_order(st, id).await?;
    let new = NewOrder {
        status: req.status.unwrap_or(current.status),
        date: req.date.unwrap_or(current.date),
        total: req.total,
        user_id: req.user_id,
    };
    let order = st
        .orders
        .update(id, &new)
        .await?
        .ok_or_else(|| AppError::not_found("order", id))?;
    info!(order_id = id, "order updated");
    Ok(order)
}

pub async fn delete_order(st: &AppState, id: i64) -> AppResult<()> {
    if !st.orders.delete(id).await? {
        return Err(AppError::not_found("order", id));
    }
    info!(order_id = id, "order deleted");
    Ok(())
}

pub async fn orders_by_status(st: &AppState, status: &str) -> AppResult<Vec<Order>> {
    Ok(st.orders.by_status(status).await?)
}

pub async fn orders_by_user(st: &AppState, user_id: i64) -> AppResult<Vec<Order>> {
    ensure_user(st, user_id).await?;
    Ok(st.orders.by_user(user_id).await?)
}

pub async fn orders_between(st: &AppState, range: &DateRange) -> AppResult<Vec<Order>> {
    if range.start > range.end {
        warn!(start = %range.start, end = %range.end, "inverted date range");
        return Err(AppError::BadRequest("start must not be after end".into()));
    }
    Ok(st.orders.between(range.start, range.end).await?)
}

pub async fn count_orders_by_user(st: &AppState, user_id: i64) -> AppResult<i64> {
    ensure_user(st, user_id).await?;
    Ok(st.orders.count_by_user(user_id).await?)
}
