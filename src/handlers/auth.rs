use axum::{extract::State, Json};

use crate::{
    dtos::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserInfo},
    error::AppError,
    models::{NewUser, UserRole},
    utils::{hash_password, verify_password, ValidatedJson},
    AppState,
};

/// Register a new user account with the default "user" role.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    let password_hash = hash_password(&req.password)?;

    let user_id = state
        .db
        .insert_user(&NewUser {
            username: req.username,
            email: req.email,
            password_hash,
            role: UserRole::User,
        })
        .await?;

    tracing::info!(user_id, "User registered");

    Ok(Json(RegisterResponse {
        message: "User registered successfully".to_string(),
        user_id,
    }))
}

/// Login with a username or email plus password.
///
/// Unknown identifier and wrong password produce the same response so the
/// endpoint does not reveal which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .db
        .find_user_by_identifier(&req.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!(identifier = %req.username, "Login failed - user not found");
            AppError::Unauthorized("Invalid credentials".to_string())
        })?;

    if !verify_password(&req.password, &user.password_hash)? {
        tracing::warn!(identifier = %req.username, "Login failed - invalid credentials");
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = state.jwt.issue_token(&user)?;

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        user: UserInfo::from(&user),
    }))
}
