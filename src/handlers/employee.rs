//! Employee CRUD handlers.
//!
//! All routes here sit behind the auth middleware; any authenticated user
//! may read and mutate records.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    dtos::employee::{
        CreateEmployeeResponse, EmployeeGetResponse, EmployeeListResponse, EmployeePayload,
        IdPayload, MutationResponse,
    },
    error::AppError,
    middleware::AuthUser,
    utils::ValidatedJson,
    AppState,
};

/// List all employees, most recently created first.
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<EmployeeListResponse>, AppError> {
    let employees = state.db.list_employees().await?;

    Ok(Json(EmployeeListResponse {
        message: "success".to_string(),
        data: employees,
    }))
}

/// Fetch a single employee; an unmatched id yields `data: null`.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeGetResponse>, AppError> {
    let employee = state.db.find_employee_by_id(id).await?;

    Ok(Json(EmployeeGetResponse {
        message: "success".to_string(),
        data: employee,
    }))
}

/// Create a new employee record.
pub async fn create_employee(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    ValidatedJson(payload): ValidatedJson<EmployeePayload>,
) -> Result<Json<CreateEmployeeResponse>, AppError> {
    let id = state.db.insert_employee(&payload.into()).await?;

    tracing::info!(id, user = %claims.username, "Employee created");

    Ok(Json(CreateEmployeeResponse {
        message: "Employee created successfully".to_string(),
        data: IdPayload { id },
        id,
    }))
}

/// Overwrite an employee record in full.
pub async fn update_employee(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<EmployeePayload>,
) -> Result<Json<MutationResponse>, AppError> {
    let changes = state.db.update_employee(id, &payload.into()).await?;

    tracing::info!(id, changes, user = %claims.username, "Employee updated");

    Ok(Json(MutationResponse {
        message: "Employee updated successfully".to_string(),
        changes,
    }))
}

/// Delete an employee record.
pub async fn delete_employee(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MutationResponse>, AppError> {
    let changes = state.db.delete_employee(id).await?;

    tracing::info!(id, changes, user = %claims.username, "Employee deleted");

    Ok(Json(MutationResponse {
        message: "Employee deleted successfully".to_string(),
        changes,
    }))
}
