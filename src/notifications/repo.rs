use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{user_reference_error, RepositoryError};
use crate::notifications::dto::NotificationRequest;
use crate::notifications::repo_types::Notification;

#[async_trait]
pub trait NotificationRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Notification>, RepositoryError>;
    async fn find(&self, id: i64) -> Result<Option<Notification>, RepositoryError>;
    async fn insert(&self, req: &NotificationRequest) -> Result<Notification, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        req: &NotificationRequest,
    ) -> Result<Option<Notification>, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
    async fn by_user(&self, user_id: i64) -> Result<Vec<Notification>, RepositoryError>;
}

#[derive(Clone)]
pub struct PgNotificationRepo {
    db: PgPool,
}

impl PgNotificationRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationRepo for PgNotificationRepo {
    async fn list(&self) -> Result<Vec<Notification>, RepositoryError> {
        let rows = sqlx::query_as::<_, Notification>(
            "SELECT id, kind, message, user_id FROM notifications ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<Notification>, RepositoryError> {
        let row = sqlx::query_as::<_, Notification>(
            "SELECT id, kind, message, user_id FROM notifications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn insert(&self, req: &NotificationRequest) -> Result<Notification, RepositoryError> {
        sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (kind, message, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, kind, message, user_id
            "#,
        )
        .bind(&req.kind)
        .bind(&req.message)
        .bind(req.user_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| user_reference_error(e, req.user_id))
    }

    async fn update(
        &self,
        id: i64,
        req: &NotificationRequest,
    ) -> Result<Option<Notification>, RepositoryError> {
        sqlx::query_as::<_, Notification>(
            r#"
            UPDATE notifications
               SET kind = $2, message = $3, user_id = $4
             WHERE id = $1
            RETURNING id, kind, message, user_id
            "#,
        )
        .bind(id)
        .bind(&req.kind)
        .bind(&req.message)
        .bind(req.user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| user_reference_error(e, req.user_id))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let res = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn by_user(&self, user_id: i64) -> Result<Vec<Notification>, RepositoryError> {
        let rows = sqlx::query_as::<_, Notification>(
            "SELECT id, kind, message, user_id FROM notifications WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod pg_tests {
    use super::*;

    #[ignore = "requires DATABASE_URL"]
    #[sqlx::test(migrations = "./migrations")]
    async fn insert_and_list_by_user(db: PgPool) {
        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, email) VALUES ('Ana', 'ana@shop.cl') RETURNING id",
        )
        .fetch_one(&db)
        .await
        .unwrap();
        let repo = PgNotificationRepo::new(db);

        let sent = repo
            .insert(&NotificationRequest {
                kind: "Email".into(),
                message: "Welcome".into(),
                user_id,
            })
            .await
            .unwrap();
        assert_eq!(repo.by_user(user_id).await.unwrap(), vec![sent]);

        let err = repo
            .insert(&NotificationRequest {
                kind: "SMS".into(),
                message: "Lost".into(),
                user_id: user_id + 1,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::MissingUser(_)));
    }
}
