use axum::Json;
use utoipa::OpenApi;

use crate::hal::Link;
use crate::notifications::{dto::NotificationRequest, handlers as notification_handlers, repo_types::Notification};
use crate::orders::{
    dto::{OrderCount, OrderRequest},
    handlers as order_handlers,
    repo_types::Order,
};
use crate::products::{dto::ProductRequest, handlers as product_handlers, repo_types::Product};
use crate::users::{dto::UserRequest, handlers as user_handlers, repo_types::User};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EcoMarket API",
        version = "1.0.0",
        description = "Back-office API for users, products, orders and notifications. Resources are served as HAL (application/hal+json).",
        license(name = "Apache 2.0", url = "https://www.apache.org/licenses/LICENSE-2.0")
    ),
    paths(
        user_handlers::list_users,
        user_handlers::get_user,
        user_handlers::create_user,
        user_handlers::update_user,
        user_handlers::delete_user,
        user_handlers::users_by_name,
        user_handlers::users_by_email,
        user_handlers::users_with_pending_orders,
        product_handlers::list_products,
        product_handlers::get_product,
        product_handlers::create_product,
        product_handlers::update_product,
        product_handlers::delete_product,
        product_handlers::products_by_category,
        product_handlers::products_with_stock_below,
        product_handlers::products_in_price_range,
        order_handlers::list_orders,
        order_handlers::get_order,
        order_handlers::create_order,
        order_handlers::update_order,
        order_handlers::delete_order,
        order_handlers::orders_by_status,
        order_handlers::orders_by_user,
        order_handlers::orders_between,
        order_handlers::count_orders_by_user,
        notification_handlers::list_notifications,
        notification_handlers::get_notification,
        notification_handlers::create_notification,
        notification_handlers::update_notification,
        notification_handlers::delete_notification,
        notification_handlers::notifications_by_user,
    ),
    components(schemas(
        User,
        UserRequest,
        Product,
        ProductRequest,
        Order,
        OrderRequest,
        OrderCount,
        Notification,
        NotificationRequest,
        Link,
    )),
    tags(
        (name = "users", description = "Customer accounts"),
        (name = "products", description = "Catalogue and stock"),
        (name = "orders", description = "Purchases placed by users"),
        (name = "notifications", description = "Messages sent to users")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use super::*;
    use crate::testing::{fake_state, send};

    #[test]
    fn document_lists_every_resource() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(doc["info"]["title"], "EcoMarket API");
        assert_eq!(doc["info"]["version"], "1.0.0");
        assert_eq!(doc["info"]["license"]["name"], "Apache 2.0");

        let paths = doc["paths"].as_object().unwrap();
        for p in [
            "/api/users/{id}",
            "/api/users/with-pending-orders",
            "/api/products/price-between",
            "/api/orders/date-range",
            "/api/orders/user/{user_id}/count",
            "/api/notifications/user/{user_id}",
        ] {
            assert!(paths.contains_key(p), "missing {p}");
        }
        assert!(doc["components"]["schemas"]["OrderCount"].is_object());
    }

    #[tokio::test]
    async fn document_is_served() {
        let (state, _store) = fake_state();
        let (status, _, body) = send(&state, Method::GET, "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "EcoMarket API");
    }

    #[test]
    fn date_range_params_explain_offset_encoding() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let params = doc["paths"]["/api/orders/date-range"]["get"]["parameters"]
            .as_array()
            .unwrap();
        for name in ["start", "end"] {
            let param = params.iter().find(|p| p["name"] == name).unwrap();
            assert_eq!(param["in"], "query");
            assert!(
                param["description"].as_str().unwrap().contains("%2B"),
                "{name} should document the %2B offset encoding"
            );
        }
    }
}
