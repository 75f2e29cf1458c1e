use serde::Deserialize;
use utoipa::ToSchema;

use crate::hal::HalResource;
use crate::users::repo_types::User;

/// Body of `POST /api/users` and `PUT /api/users/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserRequest {
    #[schema(example = "Ana Rojas")]
    pub name: String,
    #[schema(example = "ana.rojas@example.cl")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "+56 9 1234 5678")]
    pub phone: Option<String>,
}

impl HalResource for User {
    const REL: &'static str = "users";
    const PATH: &'static str = "/api/users";

    fn id(&self) -> i64 {
        self.id
    }

    fn related(&self) -> Vec<(&'static str, String)> {
        vec![("orders", format!("/api/orders/user/{}", self.id))]
    }
}
