use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::forms::NewBarangay;
use crate::models::Barangay;

/// Privileged insert capability for the barangays collection. Same
/// service-role seam as [`crate::db::ItemWriter`].
#[async_trait]
pub trait BarangayWriter: Send + Sync {
    async fn insert(&self, user_id: Uuid, barangay: NewBarangay) -> AppResult<Barangay>;
}

pub struct ServiceRoleBarangays {
    pool: PgPool,
}

impl ServiceRoleBarangays {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BarangayWriter for ServiceRoleBarangays {
    async fn insert(&self, user_id: Uuid, barangay: NewBarangay) -> AppResult<Barangay> {
        let stored: Barangay = sqlx::query_as(
            "INSERT INTO barangays \
             (user_id, name, city, description, address, logo, mobile, phone, region, url1, url2, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, NOW()) \
             RETURNING id, name, city, description, address, logo, mobile, phone, region, url1, url2, \
             user_id, created_at",
        )
        .bind(user_id)
        .bind(&barangay.name)
        .bind(&barangay.city)
        .bind(&barangay.description)
        .bind(&barangay.address)
        .bind(&barangay.logo)
        .bind(&barangay.mobile)
        .bind(&barangay.phone)
        .bind(&barangay.region)
        .bind(&barangay.url1)
        .bind(&barangay.url2)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }
}
