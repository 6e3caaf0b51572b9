pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::services::{Database, JwtService};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: Database,
    pub jwt: JwtService,
}

pub fn build_router(state: AppState) -> Result<Router, AppError> {
    // Everything except register, login, and the health check sits behind
    // the bearer-token gate.
    let protected_routes = Router::new()
        .route(
            "/api/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/api/employees/:id",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
        .route("/api/statistics", get(handlers::statistics))
        .layer(from_fn_with_state(state.clone(), middleware::auth_middleware));

    let cors = cors_layer(&state.config)?;

    let app = Router::new()
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login))
        .route("/api/health", get(health_check))
        .merge(protected_routes)
        .fallback(not_found)
        .with_state(state)
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add CORS layer
        .layer(cors);

    Ok(app)
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer, AppError> {
    let origin = if config.security.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins = config
            .security
            .allowed_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| AppError::Config(format!("Invalid CORS origin '{}': {}", o, e)))
            })
            .collect::<Result<Vec<HeaderValue>, AppError>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]))
}

/// Service health check
pub async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.db.health_check().await.map_err(|e| {
        tracing::error!(error = %e, "Database health check failed");
        e
    })?;

    Ok(Json(serde_json::json!({
        "message": "Employee Management API is running",
        "timestamp": Utc::now().to_rfc3339(),
    })))
}

async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}
