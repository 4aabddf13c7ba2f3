use axum::extract::State;
use axum::response::Redirect;
use axum::Form;

use crate::error::{AppError, AppResult};
use crate::forms::BarangayForm;
use crate::middleware::AuthenticatedUser;

use super::AppState;

/// Barangay registration action. Same pipeline as item creation: the
/// record is attributed to the session identity and written through the
/// service-role capability.
pub async fn create_barangay(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Form(form): Form<BarangayForm>,
) -> AppResult<Redirect> {
    let barangay = form.validate().map_err(|errors| AppError::Validation {
        values: serde_json::to_value(&form).unwrap_or_default(),
        errors,
    })?;

    let stored = state.barangay_writer.insert(user.user_id, barangay).await?;
    tracing::info!(
        "Barangay created: id={}, user_id={}",
        stored.id,
        stored.user_id
    );

    Ok(Redirect::to("/barangays"))
}
