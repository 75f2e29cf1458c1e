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
    hal::{CollectionModel, EntityModel, Hal, HalResource, LinkBuilder, Links},
    state::AppState,
};

use super::dto::{DateRange, OrderCount, OrderRequest};
use super::repo_types::Order;
use super::services;

pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/:id",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/orders/status/:status", get(orders_by_status))
        .route("/orders/user/:user_id", get(orders_by_user))
        .route("/orders/user/:user_id/count", get(count_orders_by_user))
        .route("/orders/date-range", get(orders_between))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    responses((status = 200, description = "Every order", body = [Order], content_type = "application/hal+json"))
)]
#[instrument(skip(state))]
pub async fn list_orders(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> AppResult<Hal<CollectionModel<Order>>> {
    let orders = services::list_orders(&state).await?;
    Ok(Hal(state.links().collection(orders, &uri)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = Order, content_type = "application/hal+json"),
        (status = 404, description = "No such order")
    )
)]
#[instrument(skip(state))]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Hal<EntityModel<Order>>> {
    let order = services::get_order(&state, id).await?;
    Ok(Hal(state.links().entity(order)))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = Order, content_type = "application/hal+json"),
        (status = 400, description = "The referenced user does not exist")
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderRequest>,
) -> AppResult<impl IntoResponse> {
    let order = services::create_order(&state, payload).await?;
    let links = state.links();
    let location = links.link(&LinkBuilder::item_path::<Order>(order.id)).href;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Hal(links.entity(order)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated", body = Order, content_type = "application/hal+json"),
        (status = 400, description = "The referenced user does not exist"),
        (status = 404, description = "No such order")
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderRequest>,
) -> AppResult<Hal<EntityModel<Order>>> {
    let order = services::update_order(&state, id, payload).await?;
    Ok(Hal(state.links().entity(order)))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "No such order")
    )
)]
#[instrument(skip(state))]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    services::delete_order(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/orders/status/{status}",
    tag = "orders",
    params(("status" = String, Path, description = "Exact status, e.g. Pending")),
    responses((status = 200, description = "Orders in that status", body = [Order], content_type = "application/hal+json"))
)]
#[instrument(skip(state))]
pub async fn orders_by_status(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(status): Path<String>,
) -> AppResult<Hal<CollectionModel<Order>>> {
    let orders = services::orders_by_status(&state, &status).await?;
    Ok(Hal(state.links().collection(orders, &uri)))
}

#[utoipa::path(
    get,
    path = "/api/orders/user/{user_id}",
    tag = "orders",
    params(("user_id" = i64, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Orders placed by the user", body = [Order], content_type = "application/hal+json"),
        (status = 404, description = "No such user")
    )
)]
#[instrument(skip(state))]
pub async fn orders_by_user(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<i64>,
) -> AppResult<Hal<CollectionModel<Order>>> {
    let orders = services::orders_by_user(&state, user_id).await?;
    Ok(Hal(state.links().collection(orders, &uri)))
}

#[utoipa::path(
    get,
    path = "/api/orders/date-range",
    tag = "orders",
    params(DateRange),
    responses(
        (status = 200, description = "Orders dated within the range", body = [Order], content_type = "application/hal+json"),
        (status = 400, description = "Malformed or inverted range")
    )
)]
#[instrument(skip(state))]
pub async fn orders_between(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(range): Query<DateRange>,
) -> AppResult<Hal<CollectionModel<Order>>> {
    let orders = services::orders_between(&state, &range).await?;
    Ok(Hal(state.links().collection(orders, &uri)))
}

#[utoipa::path(
    get,
    path = "/api/orders/user/{user_id}/count",
    tag = "orders",
    params(("user_id" = i64, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Number of orders placed by the user", body = OrderCount, content_type = "application/hal+json"),
        (status = 404, description = "No such user")
    )
)]
#[instrument(skip(state))]
pub async fn count_orders_by_user(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<i64>,
) -> AppResult<Hal<OrderCount>> {
    let total_orders = services::count_orders_by_user(&state, user_id).await?;
    let builder = state.links();
    let mut links = Links::new();
    links.insert("self", builder.self_link(&uri));
    links.insert(
        "user-orders",
        builder.link(&format!("{}/user/{}", Order::PATH, user_id)),
    );
    Ok(Hal(OrderCount {
        user_id,
        total_orders,
        links,
    }))
}
