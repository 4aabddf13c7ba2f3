use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Barangay {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub description: String,
    pub address: String,
    pub logo: String,
    pub mobile: String,
    pub phone: String,
    pub region: String,
    pub url1: String,
    pub url2: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
