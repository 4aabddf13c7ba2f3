use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::forms::NewItem;
use crate::models::Item;

/// Caller-scoped reads over the items collection.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Item>>;
    async fn get(&self, id: Uuid) -> AppResult<Option<Item>>;
}

/// Privileged insert capability. Implementations hold the service-role
/// credential, which bypasses row-level security, so this is a separate
/// trait injected explicitly rather than something derived from the
/// caller's own session.
#[async_trait]
pub trait ItemWriter: Send + Sync {
    /// Inserts the record with `user_id` set to the acting identity and
    /// `created_at` set server-side. Single attempt, no retry.
    async fn insert(&self, user_id: Uuid, item: NewItem) -> AppResult<Item>;
}

pub struct PgItems {
    pool: PgPool,
}

impl PgItems {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItems {
    async fn list(&self) -> AppResult<Vec<Item>> {
        let items: Vec<Item> = sqlx::query_as(
            "SELECT id, name, description, location, photo, user_id, created_at \
             FROM items ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Item>> {
        let item: Option<Item> = sqlx::query_as(
            "SELECT id, name, description, location, photo, user_id, created_at \
             FROM items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }
}

/// Insert path backed by the service-role pool.
pub struct ServiceRoleItems {
    pool: PgPool,
}

impl ServiceRoleItems {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemWriter for ServiceRoleItems {
    async fn insert(&self, user_id: Uuid, item: NewItem) -> AppResult<Item> {
        let stored: Item = sqlx::query_as(
            "INSERT INTO items (user_id, name, description, location, photo, created_at) \
             VALUES ($1, $2, $3, $4, $5, NOW()) \
             RETURNING id, name, description, location, photo, user_id, created_at",
        )
        .bind(user_id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.location)
        .bind(&item.photo)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }
}
