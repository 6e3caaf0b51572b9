use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::JwtConfig;
use crate::models::User;

/// JWT service for session token issuance and verification.
///
/// Tokens are HS256-signed with a process-wide secret from configuration
/// and carry the identity claims needed to authorize a request without a
/// user re-fetch. There is no server-side revocation; a token stays valid
/// until its expiry passes.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
}

/// Claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user id)
    pub sub: i64,
    pub username: String,
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(jsonwebtoken::errors::Error),
}

impl JwtService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            token_expiry_hours: config.token_expiry_hours,
        }
    }

    /// Issue a session token for a user with the configured expiry.
    pub fn issue_token(&self, user: &User) -> Result<String, anyhow::Error> {
        let now = Utc::now();
        let exp = now + Duration::hours(self.token_expiry_hours);

        let claims = TokenClaims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| anyhow::anyhow!("Failed to encode token: {}", e))?;

        Ok(token)
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// Expiry is checked with zero leeway so a token is rejected the
    /// moment it lapses.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            })?;

        Ok(token_data.claims)
    }
}
