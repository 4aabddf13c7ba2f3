pub mod barangays;
pub mod items;
pub mod profiles;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::{BarangayWriter, ItemStore, ItemWriter, ProfileStore};

/// Shared handler state. Read stores use the caller-scoped pool; the
/// writers hold the service-role capability and are injected explicitly so
/// the privileged path is visible at the composition root.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileStore>,
    pub items: Arc<dyn ItemStore>,
    pub item_writer: Arc<dyn ItemWriter>,
    pub barangay_writer: Arc<dyn BarangayWriter>,
    pub jwt_secret: String,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    Router::new()
        .route("/", get(profiles::list_profiles))
        .route("/profiles", get(profiles::list_profiles))
        .route("/items", get(items::list_items).post(items::create_item))
        .route("/items/:id", get(items::get_item))
        .route("/barangays", post(barangays::create_barangay))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    use crate::db::{BarangayWriter, ItemStore, ItemWriter, ProfileStore};
    use crate::error::{AppError, AppResult};
    use crate::forms::{NewBarangay, NewItem};
    use crate::middleware::Claims;
    use crate::models::{Barangay, Item, Profile};

    use super::AppState;

    pub const JWT_SECRET: &str = "test-secret";

    pub struct FakeProfiles(pub Vec<Profile>);

    #[async_trait]
    impl ProfileStore for FakeProfiles {
        async fn list(&self) -> AppResult<Vec<Profile>> {
            Ok(self.0.clone())
        }
    }

    pub struct FakeItems(pub Vec<Item>);

    #[async_trait]
    impl ItemStore for FakeItems {
        async fn list(&self) -> AppResult<Vec<Item>> {
            Ok(self.0.clone())
        }

        async fn get(&self, id: Uuid) -> AppResult<Option<Item>> {
            Ok(self.0.iter().find(|i| i.id == id).cloned())
        }
    }

    /// Records item inserts; fails every call when `fail` is set so tests
    /// can exercise the surfaced-error path.
    #[derive(Default)]
    pub struct RecordingItemWriter {
        pub fail: bool,
        pub inserted: Mutex<Vec<(Uuid, NewItem)>>,
    }

    #[async_trait]
    impl ItemWriter for RecordingItemWriter {
        async fn insert(&self, user_id: Uuid, item: NewItem) -> AppResult<Item> {
            if self.fail {
                return Err(AppError::Internal("insert failed".to_string()));
            }
            let stored = Item {
                id: Uuid::new_v4(),
                name: item.name.clone(),
                description: item.description.clone(),
                location: item.location.clone(),
                photo: item.photo.clone(),
                user_id,
                created_at: Utc::now(),
            };
            self.inserted.lock().unwrap().push((user_id, item));
            Ok(stored)
        }
    }

    #[derive(Default)]
    pub struct RecordingBarangayWriter {
        pub fail: bool,
        pub inserted: Mutex<Vec<(Uuid, NewBarangay)>>,
    }

    #[async_trait]
    impl BarangayWriter for RecordingBarangayWriter {
        async fn insert(&self, user_id: Uuid, barangay: NewBarangay) -> AppResult<Barangay> {
            if self.fail {
                return Err(AppError::Internal("insert failed".to_string()));
            }
            let stored = Barangay {
                id: Uuid::new_v4(),
                name: barangay.name.clone(),
                city: barangay.city.clone(),
                description: barangay.description.clone(),
                address: barangay.address.clone(),
                logo: barangay.logo.clone(),
                mobile: barangay.mobile.clone(),
                phone: barangay.phone.clone(),
                region: barangay.region.clone(),
                url1: barangay.url1.clone(),
                url2: barangay.url2.clone(),
                user_id,
                created_at: Utc::now(),
            };
            self.inserted.lock().unwrap().push((user_id, barangay));
            Ok(stored)
        }
    }

    pub struct TestApp {
        pub state: AppState,
        pub item_writer: Arc<RecordingItemWriter>,
        pub barangay_writer: Arc<RecordingBarangayWriter>,
    }

    pub fn app(items: Vec<Item>, profiles: Vec<Profile>, fail_writes: bool) -> TestApp {
        let item_writer = Arc::new(RecordingItemWriter {
            fail: fail_writes,
            inserted: Mutex::new(Vec::new()),
        });
        let barangay_writer = Arc::new(RecordingBarangayWriter {
            fail: fail_writes,
            inserted: Mutex::new(Vec::new()),
        });
        let state = AppState {
            profiles: Arc::new(FakeProfiles(profiles)),
            items: Arc::new(FakeItems(items)),
            item_writer: item_writer.clone(),
            barangay_writer: barangay_writer.clone(),
            jwt_secret: JWT_SECRET.to_string(),
        };
        TestApp {
            state,
            item_writer,
            barangay_writer,
        }
    }

    pub fn bearer_for(user_id: Uuid) -> String {
        let claims = Claims {
            sub: user_id.to_string(),
            email: "u1@example.com".to_string(),
            exp: (Utc::now() + chrono::Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
        )
        .unwrap();
        format!("Bearer {}", token)
    }

    pub fn item(user_id: Uuid) -> Item {
        Item {
            id: Uuid::new_v4(),
            name: "Ball".to_string(),
            description: "x".to_string(),
            location: "loc".to_string(),
            photo: "p".to_string(),
            user_id,
            created_at: Utc::now(),
        }
    }
}
