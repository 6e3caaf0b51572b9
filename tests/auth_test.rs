//! Integration tests for registration and login.

mod common;

use common::{json_request, read_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn register_login_and_list_flow() {
    let app = TestApp::spawn().await;

    // Register
    let response = app
        .request(json_request(
            "POST",
            "/api/register",
            &json!({ "username": "alice", "email": "alice@x.com", "password": "pw123456" }),
        ))
        .await;
    assert_eq!(response.status(), 200);
    let body = read_json(response).await;
    assert_eq!(body["message"], "User registered successfully");
    assert!(body["userId"].as_i64().unwrap() > 0);

    // Login
    let response = app
        .request(json_request(
            "POST",
            "/api/login",
            &json!({ "username": "alice", "password": "pw123456" }),
        ))
        .await;
    assert_eq!(response.status(), 200);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@x.com");
    assert_eq!(body["user"]["role"], "user");
    let token = body["token"].as_str().unwrap().to_string();

    // The token grants access to the employee list, which includes the
    // seeded sample records.
    let response = app
        .request(common::bearer_request("GET", "/api/employees", &token))
        .await;
    assert_eq!(response.status(), 200);
    let body = read_json(response).await;
    assert_eq!(body["message"], "success");
    assert!(body["data"].as_array().unwrap().len() >= common::SEEDED_EMPLOYEES);
}

#[tokio::test]
async fn login_accepts_email_as_identifier() {
    let app = TestApp::spawn().await;
    app.register_and_login("bob", "bob@x.com", "pw123456").await;

    let response = app
        .request(json_request(
            "POST",
            "/api/login",
            &json!({ "username": "bob@x.com", "password": "pw123456" }),
        ))
        .await;
    assert_eq!(response.status(), 200);
    let body = read_json(response).await;
    assert_eq!(body["user"]["username"], "bob");
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let app = TestApp::spawn().await;

    let response = app
        .request(json_request(
            "POST",
            "/api/register",
            &json!({ "username": "carol", "email": "carol@x.com", "password": "pw123456" }),
        ))
        .await;
    assert_eq!(response.status(), 200);
    let users_before = app.state.db.count_users().await.unwrap();

    // Same username, different email
    let response = app
        .request(json_request(
            "POST",
            "/api/register",
            &json!({ "username": "carol", "email": "carol2@x.com", "password": "pw123456" }),
        ))
        .await;
    assert_eq!(response.status(), 400);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Username or email already exists");

    // Same email, different username
    let response = app
        .request(json_request(
            "POST",
            "/api/register",
            &json!({ "username": "carol2", "email": "carol@x.com", "password": "pw123456" }),
        ))
        .await;
    assert_eq!(response.status(), 400);

    // No duplicate rows were created
    assert_eq!(app.state.db.count_users().await.unwrap(), users_before);
}

#[tokio::test]
async fn registration_requires_all_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .request(json_request(
            "POST",
            "/api/register",
            &json!({ "username": "dave", "email": "dave@x.com" }),
        ))
        .await;
    assert_eq!(response.status(), 400);

    let response = app
        .request(json_request(
            "POST",
            "/api/register",
            &json!({ "username": "", "email": "dave@x.com", "password": "pw123456" }),
        ))
        .await;
    assert_eq!(response.status(), 400);

    let response = app
        .request(json_request(
            "POST",
            "/api/register",
            &json!({ "username": "dave", "email": "not-an-email", "password": "pw123456" }),
        ))
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = TestApp::spawn().await;
    app.register_and_login("erin", "erin@x.com", "pw123456").await;

    // Wrong password
    let response = app
        .request(json_request(
            "POST",
            "/api/login",
            &json!({ "username": "erin", "password": "wrong-password" }),
        ))
        .await;
    assert_eq!(response.status(), 401);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Invalid credentials");

    // Unknown user gets the same answer
    let response = app
        .request(json_request(
            "POST",
            "/api/login",
            &json!({ "username": "nobody", "password": "pw123456" }),
        ))
        .await;
    assert_eq!(response.status(), 401);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn login_response_never_contains_password_material() {
    let app = TestApp::spawn().await;
    app.register_and_login("frank", "frank@x.com", "pw123456").await;

    let response = app
        .request(json_request(
            "POST",
            "/api/login",
            &json!({ "username": "frank", "password": "pw123456" }),
        ))
        .await;
    let body = read_json(response).await;

    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
}
