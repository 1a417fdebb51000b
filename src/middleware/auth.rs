use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::auth::Claims;
use crate::error::ApiError;
use crate::AppState;

/// Authenticated subject extracted from a verified bearer token and
/// inserted into request extensions for handlers to read.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub subject: String,
}

/// Bearer-token middleware guarding every /api route. Verification failure
/// is terminal for the request; there are no retries.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;
    let claims = verify_token(&token, &state.config.jwt_secret)?;

    request.extensions_mut().insert(AuthUser {
        subject: claims.sub,
    });

    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("missing Authorization header"))?;

    let value = value
        .to_str()
        .map_err(|_| ApiError::unauthorized("invalid Authorization header"))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("Authorization header must use the Bearer scheme"))?;

    if token.trim().is_empty() {
        return Err(ApiError::unauthorized("empty bearer token"));
    }

    Ok(token.to_string())
}

fn verify_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());

    // Validation::default() enforces the exp claim, so expired tokens fail here.
    decode::<Claims>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!("rejected bearer token: {}", e);
            ApiError::unauthorized("invalid or expired token")
        })
}
