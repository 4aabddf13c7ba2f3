use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use http::request::Parts;
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::AppState;

/// JWT claims for an established session. Token issuance is owned by the
/// external auth service; this server only verifies.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub email: String,
    pub exp: i64,
}

/// The authenticated caller, resolved from the Authorization header.
///
/// As an extractor this rejects with 401 when no valid session is present,
/// so any handler taking it cannot run a privileged write attributed to an
/// anonymous identity.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Decodes the bearer token into an identity. An absent header, a bad
/// signature, an expired token, or a non-UUID subject all resolve to
/// anonymous.
pub fn resolve_session(parts: &Parts, jwt_secret: &str) -> Option<AuthenticatedUser> {
    let token = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))?;

    let claims = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .ok()?
    .claims;

    let user_id = Uuid::parse_str(&claims.sub).ok()?;
    Some(AuthenticatedUser {
        user_id,
        email: claims.email,
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app = AppState::from_ref(state);
        resolve_session(parts, &app.jwt_secret).ok_or(AppError::Unauthorized)
    }
}
