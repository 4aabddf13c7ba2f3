use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored item. Owned by the creating user; never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    pub photo: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
