//! Test helper module for employee-service integration tests.
//!
//! Spins the full application up against an in-memory SQLite pool, runs
//! migrations and seeding, and exercises the router in-process.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use employee_service::{
    build_router,
    config::{
        AppConfig, DatabaseConfig, Environment, JwtConfig, SecurityConfig, SeedConfig,
    },
    db,
    services::{seed, Database, JwtService},
    AppState,
};

pub const TEST_JWT_SECRET: &str = "test-signing-secret-0123456789abcdef";
pub const TEST_ADMIN_USERNAME: &str = "Admin";
pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";
pub const TEST_ADMIN_PASSWORD: &str = "Admin1234";

/// Number of employee records installed by the bootstrap seeder.
pub const SEEDED_EMPLOYEES: usize = 5;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Spawn the application with a fresh in-memory database.
    pub async fn spawn() -> Self {
        let config = test_config();

        let pool = db::create_pool(&config.database)
            .await
            .expect("Failed to create test pool");
        db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let database = Database::new(pool);
        seed::run(&database, &config.seed)
            .await
            .expect("Failed to seed test database");

        let jwt = JwtService::new(&config.jwt);

        let state = AppState {
            config,
            db: database,
            jwt,
        };

        let router = build_router(state.clone()).expect("Failed to build router");

        TestApp { router, state }
    }

    /// Send a request through the router.
    pub async fn request(&self, req: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("Request failed")
    }

    /// Login and return the issued token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(json_request(
                "POST",
                "/api/login",
                &json!({ "username": username, "password": password }),
            ))
            .await;
        assert_eq!(response.status(), 200, "login failed for {}", username);

        let body = read_json(response).await;
        body["token"].as_str().expect("token missing").to_string()
    }

    /// Token for the seeded admin account.
    pub async fn admin_token(&self) -> String {
        self.login(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD).await
    }

    /// Register a fresh account and return its login token.
    pub async fn register_and_login(&self, username: &str, email: &str, password: &str) -> String {
        let response = self
            .request(json_request(
                "POST",
                "/api/register",
                &json!({ "username": username, "email": email, "password": password }),
            ))
            .await;
        assert_eq!(response.status(), 200, "registration failed for {}", username);

        self.login(username, password).await
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        environment: Environment::Dev,
        service_name: "employee-service-test".to_string(),
        log_level: "error".to_string(),
        port: 5000,
        database: DatabaseConfig {
            // Single connection keeps the in-memory database alive and
            // shared across the whole test app.
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            token_expiry_hours: 24,
        },
        seed: SeedConfig {
            admin_username: TEST_ADMIN_USERNAME.to_string(),
            admin_email: TEST_ADMIN_EMAIL.to_string(),
            admin_password: TEST_ADMIN_PASSWORD.to_string(),
        },
        security: SecurityConfig {
            allowed_origins: vec!["*".to_string()],
        },
    }
}

/// Build a JSON request with no auth header.
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request carrying a bearer token.
pub fn bearer_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Build a JSON request carrying a bearer token.
pub fn bearer_json_request(method: &str, uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collect a response body as JSON.
pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body was not valid JSON")
}

/// A well-formed employee payload with the given unique email.
pub fn employee_payload(email: &str) -> Value {
    json!({
        "name": "Test Person",
        "email": email,
        "position": "Engineer",
        "department": "Engineering",
        "salary": 500000.0,
        "hire_date": "2024-06-01",
        "phone": "+91-9000000000",
        "address": "1 Test Street"
    })
}
