use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::{Form, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::forms::ItemForm;
use crate::middleware::AuthenticatedUser;
use crate::models::Item;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct ItemsPage {
    pub data: Vec<Item>,
}

#[derive(Debug, Serialize)]
pub struct ItemPage {
    pub item: Item,
}

pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<ItemsPage>> {
    let data = state.items.list().await?;
    Ok(Json(ItemsPage { data }))
}

/// Fetches a single item by id. An absent row is an explicit 404, never a
/// null page payload.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ItemPage>> {
    let item = state
        .items
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item not found: {}", id)))?;
    Ok(Json(ItemPage { item }))
}

/// Item creation action: authenticate, validate, insert, redirect.
///
/// The `AuthenticatedUser` extractor rejects anonymous callers before the
/// body is read. Validation failures echo the submitted values with
/// per-field errors; writer failures surface to the caller rather than
/// redirecting as if the insert had happened.
pub async fn create_item(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Form(form): Form<ItemForm>,
) -> AppResult<Redirect> {
    let item = form.validate().map_err(|errors| AppError::Validation {
        values: serde_json::to_value(&form).unwrap_or_default(),
        errors,
    })?;

    let stored = state.item_writer.insert(user.user_id, item).await?;
    tracing::info!("Item created: id={}, user_id={}", stored.id, stored.user_id);

    Ok(Redirect::to("/items"))
}
