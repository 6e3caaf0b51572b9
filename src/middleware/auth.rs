use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, services::TokenClaims, AppState};

/// Middleware guarding protected routes.
///
/// A missing bearer token is a 401; a token that fails verification
/// (malformed or expired) is a 403. On success the claims are attached to
/// the request so handlers can read the caller's identity. Any
/// authenticated user passes; roles are carried in the claims but not
/// checked here.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let token = match token {
        Some(token) => token,
        None => {
            return Err(AppError::Unauthorized("Access token required".to_string()));
        }
    };

    let claims = match state.jwt.verify_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!(error = %e, "Token rejected");
            return Err(AppError::Forbidden("Invalid or expired token".to_string()));
        }
    };

    // Store claims in request extensions so handlers can access them
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Extractor to easily get claims in handlers.
pub struct AuthUser(pub TokenClaims);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts.extensions.get::<TokenClaims>().ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("Auth claims missing from request extensions"))
        })?;

        Ok(AuthUser(claims.clone()))
    }
}
