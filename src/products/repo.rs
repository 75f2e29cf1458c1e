use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::RepositoryError;
use crate::products::dto::ProductRequest;
use crate::products::repo_types::Product;

#[async_trait]
pub trait ProductRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
    async fn insert(&self, product: &ProductRequest) -> Result<Product, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        product: &ProductRequest,
    ) -> Result<Option<Product>, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
    async fn by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError>;
    /// Products with `stock < threshold`.
    async fn stock_below(&self, threshold: i32) -> Result<Vec<Product>, RepositoryError>;
    /// Inclusive on both ends.
    async fn price_between(&self, min: f64, max: f64) -> Result<Vec<Product>, RepositoryError>;
}

#[derive(Clone)]
pub struct PgProductRepo {
    db: PgPool,
}

impl PgProductRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepo for PgProductRepo {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, price, stock, description
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, price, stock, description
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn insert(&self, product: &ProductRequest) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, category, price, stock, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, category, price, stock, description
            "#,
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.description)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        product: &ProductRequest,
    ) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
               SET name = $2, category = $3, price = $4, stock = $5, description = $6
             WHERE id = $1
            RETURNING id, name, category, price, stock, description
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.description)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let res = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, price, stock, description
            FROM products
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn stock_below(&self, threshold: i32) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, price, stock, description
            FROM products
            WHERE stock < $1
            ORDER BY id
            "#,
        )
        .bind(threshold)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn price_between(&self, min: f64, max: f64) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, category, price, stock, description
            FROM products
            WHERE price BETWEEN $1 AND $2
            ORDER BY id
            "#,
        )
        .bind(min)
        .bind(max)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}
