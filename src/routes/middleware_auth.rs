use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Reserved caller id for tokens that carry no `userId` claim. Row owners
/// are always positive (enforced by the schema), so this id never matches a
/// row and such callers fall through the normal not-found paths.
pub const RESERVED_USER_ID: i64 = 0;

/// Caller identity resolved by `require_auth`, handed to handlers as an
/// explicit parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub i64);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or(ApiError::Unauthorized("missing user"))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    user_id: Option<i64>,
    exp: usize,
    iat: usize,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => &h[7..],
        _ => {
            return Err(ApiError::Unauthorized("missing token"));
        }
    };

    let caller = decode_caller(token, &state.jwt_secret).map_err(|e| {
        tracing::debug!("JWT decode error: {e}");
        ApiError::Unauthorized("invalid token")
    })?;

    req.extensions_mut().insert(CurrentUser(caller));
    Ok(next.run(req).await)
}

/// Validate the token and resolve the caller id from its `userId` claim.
fn decode_caller(token: &str, secret: &str) -> Result<i64, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims.user_id.unwrap_or(RESERVED_USER_ID))
}
