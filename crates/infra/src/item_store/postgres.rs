//! Postgres-backed item store implementation.
//!
//! One row per item in the `items` table. Ids come from the `BIGSERIAL`
//! column, so uniqueness and monotonicity hold across restarts and across
//! concurrent writers; each operation is a single statement, which gives the
//! atomicity the store contract asks for without explicit transactions.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Row};
use tracing::instrument;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, NewItem};

use super::r#trait::{ItemStore, StoreError};

/// Postgres-backed item store.
///
/// All operations go through the SQLx connection pool, which handles
/// thread-safe connection management; the store itself is cheap to clone
/// and share.
#[derive(Debug, Clone)]
pub struct PostgresItemStore {
    pool: Arc<PgPool>,
}

impl PostgresItemStore {
    /// Create a new PostgresItemStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Create the `items` table when it is missing.
    ///
    /// Idempotent; run once at startup, before the store serves requests.
    #[instrument(skip(self), err)]
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                quantity BIGINT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                category TEXT NOT NULL
            )
            "#,
        )
        .execute(&*self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ItemStore for PostgresItemStore {
    #[instrument(skip(self, item), fields(category = %item.category), err)]
    async fn insert(&self, item: NewItem) -> Result<Item, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO items (name, quantity, price, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, quantity, price, category
            "#,
        )
        .bind(&item.name)
        .bind(item.quantity)
        .bind(item.price)
        .bind(&item.category)
        .fetch_one(&*self.pool)
        .await?;

        Ok(ItemRow::from_row(&row)?.into())
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, quantity, price, category
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&*self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(ItemRow::from_row(&row)?.into())),
            None => Ok(None),
        }
    }

    #[instrument(skip(self), err)]
    async fn list(&self, category: Option<&str>) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, quantity, price, category
            FROM items
            WHERE $1::text IS NULL OR category = $1
            ORDER BY id ASC
            "#,
        )
        .bind(category)
        .fetch_all(&*self.pool)
        .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(ItemRow::from_row(&row)?.into());
        }

        Ok(items)
    }

    #[instrument(skip(self, item), fields(id = %item.id), err)]
    async fn update(&self, item: &Item) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = $2, quantity = $3, price = $4, category = $5
            WHERE id = $1
            "#,
        )
        .bind(item.id.as_i64())
        .bind(&item.name)
        .bind(item.quantity)
        .bind(item.price)
        .bind(&item.category)
        .execute(&*self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn delete(&self, id: ItemId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id.as_i64())
            .execute(&*self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// SQLx row type

#[derive(Debug)]
struct ItemRow {
    id: i64,
    name: String,
    quantity: i64,
    price: f64,
    category: String,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for ItemRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(ItemRow {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            quantity: row.try_get("quantity")?,
            price: row.try_get("price")?,
            category: row.try_get("category")?,
        })
    }
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: ItemId::new(row.id),
            name: row.name,
            quantity: row.quantity,
            price: row.price,
            category: row.category,
        }
    }
}
