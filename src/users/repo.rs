use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{contains_pattern, is_foreign_key_violation, RepositoryError};
use crate::users::dto::UserRequest;
use crate::users::repo_types::User;

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;
    async fn find(&self, id: i64) -> Result<Option<User>, RepositoryError>;
    async fn insert(&self, user: &UserRequest) -> Result<User, RepositoryError>;
    async fn update(&self, id: i64, user: &UserRequest) -> Result<Option<User>, RepositoryError>;
    /// Returns `false` when no row had that id.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<User>, RepositoryError>;
    async fn search_by_email(&self, fragment: &str) -> Result<Vec<User>, RepositoryError>;
    /// Distinct users owning at least one order in `status` (case-insensitive).
    async fn with_orders_in_status(&self, status: &str) -> Result<Vec<User>, RepositoryError>;
}

#[derive(Clone)]
pub struct PgUserRepo {
    db: PgPool,
}

impl PgUserRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepo for PgUserRepo {
    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn insert(&self, user: &UserRequest) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, phone
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, user: &UserRequest) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
               SET name = $2, email = $3, phone = $4
             WHERE id = $1
            RETURNING id, name, email, phone
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    RepositoryError::StillReferenced("orders or notifications")
                } else {
                    RepositoryError::Database(e)
                }
            })?;
        Ok(res.rows_affected() > 0)
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone
            FROM users
            WHERE name ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(contains_pattern(fragment))
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn search_by_email(&self, fragment: &str) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, phone
            FROM users
            WHERE email ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(contains_pattern(fragment))
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn with_orders_in_status(&self, status: &str) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT DISTINCT u.id, u.name, u.email, u.phone
              FROM users u
              JOIN orders o ON o.user_id = u.id
             WHERE lower(o.status) = lower($1)
             ORDER BY u.id
            "#,
        )
        .bind(status)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}
