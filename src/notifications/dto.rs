use serde::Deserialize;
use utoipa::ToSchema;

use crate::hal::HalResource;
use crate::notifications::repo_types::Notification;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NotificationRequest {
    #[serde(rename = "type")]
    #[schema(example = "SMS")]
    pub kind: String,
    #[schema(example = "Your order has shipped")]
    pub message: String,
    pub user_id: i64,
}

impl HalResource for Notification {
    const REL: &'static str = "notifications";
    const PATH: &'static str = "/api/notifications";

    fn id(&self) -> i64 {
        self.id
    }

    fn related(&self) -> Vec<(&'static str, String)> {
        vec![("user", format!("/api/users/{}", self.user_id))]
    }
}
