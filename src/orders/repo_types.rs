use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

pub const PENDING: &str = "Pending";

/// Statuses the back office uses; the column itself accepts any string.
pub const STATUSES: [&str; 5] = [PENDING, "Processing", "Shipped", "Delivered", "Cancelled"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub id: i64,
    #[schema(example = "Pending")]
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub date: OffsetDateTime,
    pub total: f64,
    pub user_id: i64,
}

/// Fully resolved write model; defaults are applied by the service.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub status: String,
    pub date: OffsetDateTime,
    pub total: f64,
    pub user_id: i64,
}
