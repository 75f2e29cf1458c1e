use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;

use crate::db::{user_reference_error, RepositoryError};
use crate::orders::repo_types::{NewOrder, Order};

#[async_trait]
pub trait OrderRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn find(&self, id: i64) -> Result<Option<Order>, RepositoryError>;
    /// Fails with `MissingUser` when `order.user_id` is unknown.
    async fn insert(&self, order: &NewOrder) -> Result<Order, RepositoryError>;
    async fn update(&self, id: i64, order: &NewOrder) -> Result<Option<Order>, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
    async fn by_status(&self, status: &str) -> Result<Vec<Order>, RepositoryError>;
    async fn by_user(&self, user_id: i64) -> Result<Vec<Order>, RepositoryError>;
    async fn between(
        &self,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<Order>, RepositoryError>;
    async fn count_by_user(&self, user_id: i64) -> Result<i64, RepositoryError>;
}

#[derive(Clone)]
pub struct PgOrderRepo {
    db: PgPool,
}

impl PgOrderRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepo for PgOrderRepo {
    async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, status, date, total, user_id
            FROM orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, status, date, total, user_id
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn insert(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (status, date, total, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, status, date, total, user_id
            "#,
        )
        .bind(&order.status)
        .bind(order.date)
        .bind(order.total)
        .bind(order.user_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| user_reference_error(e, order.user_id))
    }

    async fn update(&self, id: i64, order: &NewOrder) -> Result<Option<Order>, RepositoryError> {
        sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
               SET status = $2, date = $3, total = $4, user_id = $5
             WHERE id = $1
            RETURNING id, status, date, total, user_id
            "#,
        )
        .bind(id)
        .bind(&order.status)
        .bind(order.date)
        .bind(order.total)
        .bind(order.user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| user_reference_error(e, order.user_id))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let res = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn by_status(&self, status: &str) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, status, date, total, user_id
            FROM orders
            WHERE status = $1
            ORDER BY id
            "#,
        )
        .bind(status)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn by_user(&self, user_id: i64) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, status, date, total, user_id
            FROM orders
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn between(
        &self,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, status, date, total, user_id
            FROM orders
            WHERE date BETWEEN $1 AND $2
            ORDER BY date, id
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn count_by_user(&self, user_id: i64) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }
}
