use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const KINDS: [&str; 3] = ["Email", "SMS", "App"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notification {
    pub id: i64,
    /// Delivery channel, e.g. `Email`.
    #[serde(rename = "type")]
    #[schema(example = "Email")]
    pub kind: String,
    pub message: String,
    pub user_id: i64,
}
