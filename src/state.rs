use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::db;
use crate::hal::LinkBuilder;
use crate::notifications::repo::{NotificationRepo, PgNotificationRepo};
use crate::orders::repo::{OrderRepo, PgOrderRepo};
use crate::products::repo::{PgProductRepo, ProductRepo};
use crate::users::repo::{PgUserRepo, UserRepo};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepo>,
    pub products: Arc<dyn ProductRepo>,
    pub orders: Arc<dyn OrderRepo>,
    pub notifications: Arc<dyn NotificationRepo>,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let db = db::connect(&config).await?;
        db::migrate(&db).await?;
        Ok(Self::from_pool(db, Arc::new(config)))
    }

    pub fn from_pool(db: PgPool, config: Arc<AppConfig>) -> Self {
        Self {
            config,
            users: Arc::new(PgUserRepo::new(db.clone())),
            products: Arc::new(PgProductRepo::new(db.clone())),
            orders: Arc::new(PgOrderRepo::new(db.clone())),
            notifications: Arc::new(PgNotificationRepo::new(db)),
        }
    }

    pub fn links(&self) -> LinkBuilder {
        LinkBuilder::new(self.config.public_base_url.as_str())
    }
}
