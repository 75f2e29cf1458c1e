use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::hal::{HalResource, Links};
use crate::orders::repo_types::Order;

/// Body of `POST /api/orders` and `PUT /api/orders/{id}`.
///
/// On create a missing `status` becomes `Pending` and a missing `date` the
/// current time; on update they keep their stored values.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderRequest {
    #[serde(default)]
    #[schema(example = "Pending")]
    pub status: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub date: Option<OffsetDateTime>,
    #[schema(example = 15990.0)]
    pub total: f64,
    pub user_id: i64,
}

/// Bounds for `GET /api/orders/date-range`, both inclusive, RFC 3339.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRange {
    /// Inclusive lower bound, RFC 3339. Send a `+hh:mm` offset as
    /// `%2Bhh:mm`; a bare `+` decodes to a space.
    #[serde(with = "time::serde::rfc3339")]
    #[param(value_type = String, format = DateTime, example = "2024-01-01T00:00:00Z")]
    pub start: OffsetDateTime,
    /// Inclusive upper bound, RFC 3339. Send a `+hh:mm` offset as
    /// `%2Bhh:mm`; a bare `+` decodes to a space.
    #[serde(with = "time::serde::rfc3339")]
    #[param(value_type = String, format = DateTime, example = "2024-12-31T23:59:59Z")]
    pub end: OffsetDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderCount {
    pub user_id: i64,
    pub total_orders: i64,
    #[serde(rename = "_links")]
    #[schema(value_type = Object)]
    pub links: Links,
}

impl HalResource for Order {
    const REL: &'static str = "orders";
    const PATH: &'static str = "/api/orders";

    fn id(&self) -> i64 {
        self.id
    }

    fn related(&self) -> Vec<(&'static str, String)> {
        vec![("user", format!("/api/users/{}", self.user_id))]
    }
}
