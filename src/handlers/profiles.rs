use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::models::Profile;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct ProfilesPage {
    pub data: Vec<Profile>,
}

/// Page data for the landing page: every profile in the collection.
pub async fn list_profiles(State(state): State<AppState>) -> AppResult<Json<ProfilesPage>> {
    let data = state.profiles.list().await?;
    Ok(Json(ProfilesPage { data }))
}
