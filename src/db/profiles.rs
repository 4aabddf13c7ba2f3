use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::Profile;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Profile>>;
}

pub struct PgProfiles {
    pool: PgPool,
}

impl PgProfiles {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfiles {
    async fn list(&self) -> AppResult<Vec<Profile>> {
        let profiles: Vec<Profile> = sqlx::query_as(
            "SELECT id, full_name, avatar_url, created_at FROM profiles ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(profiles)
    }
}
