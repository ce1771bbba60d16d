mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "email": "alice@example.com",
            "password": "secret1",
            "firstName": "Alice",
            "lastName": "Martin",
            "phone": "06 12-34 (56) 78"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["firstName"], "Alice");
    // Separators stripped and stored as a number
    assert_eq!(body["user"]["phone"], 612345678);
    assert!(body["user"]["id"].is_string());
    assert!(body["token"].is_string());
    // The password hash never appears in any response shape
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "email": "alice@example.com",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["error"],
        "Email, password, firstName and lastName are required"
    );
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register_user("alice@example.com", "secret1").await;

    // Same email, different everything else
    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "email": "alice@example.com",
            "password": "other-password",
            "firstName": "Someone",
            "lastName": "Else"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "User already exists with this email");
}

#[tokio::test]
async fn test_register_unparseable_phone_is_omitted() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "email": "alice@example.com",
            "password": "secret1",
            "firstName": "Alice",
            "lastName": "Martin",
            "phone": "not-a-phone"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["user"].get("phone").is_none());
}

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::spawn().await;

    let (_, user_id) = app.register_user("alice@example.com", "secret1").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "alice@example.com",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["id"], user_id.as_str());

    // The fresh token authenticates a profile fetch
    let token = body["token"].as_str().unwrap();
    let profile = app
        .get_authenticated("/api/user/profile", token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(profile.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({ "email": "alice@example.com" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Email and password are required");
}

#[tokio::test]
async fn test_login_failure_does_not_reveal_which_field_was_wrong() {
    let app = TestApp::spawn().await;

    app.register_user("alice@example.com", "secret1").await;

    let unknown_email = app
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "secret1" }))
        .send()
        .await
        .expect("Failed to execute request");
    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let body_a: Value = unknown_email.json().await.unwrap();
    let body_b: Value = wrong_password.json().await.unwrap();
    assert_eq!(body_a, body_b);
    assert_eq!(body_a["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_profile_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/user/profile")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Access denied. No token provided.");
}

#[tokio::test]
async fn test_profile_rejects_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/api/user/profile", "definitely.not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid token.");
}

#[tokio::test]
async fn test_profile_rejects_expired_token_distinctly() {
    let app = TestApp::spawn().await;

    let (_, user_id) = app.register_user("alice@example.com", "secret1").await;
    let expired = app.expired_token(&user_id, "alice@example.com");

    let response = app
        .get_authenticated("/api/user/profile", &expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Token expired.");
}

#[tokio::test]
async fn test_update_profile_keeps_unspecified_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "email": "alice@example.com",
            "password": "secret1",
            "firstName": "Alice",
            "lastName": "Martin",
            "phone": "0612345678"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: Value = response.json().await.unwrap();
    let token = body["token"].as_str().unwrap().to_string();

    let response = app
        .put_authenticated("/api/user/profile", &token)
        .json(&json!({ "firstName": "Alicia" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Profile updated successfully");
    assert_eq!(body["user"]["firstName"], "Alicia");
    assert_eq!(body["user"]["lastName"], "Martin");
    assert_eq!(body["user"]["phone"], 612345678);

    // And the merge is visible on a subsequent read
    let profile = app
        .get_authenticated("/api/user/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: Value = profile.json().await.unwrap();
    assert_eq!(body["user"]["firstName"], "Alicia");
    assert_eq!(body["user"]["lastName"], "Martin");
}

#[tokio::test]
async fn test_account_lifecycle_register_profile_delete() {
    let app = TestApp::spawn().await;

    let (token, _) = app.register_user("a@x.com", "secret1").await;

    // Profile resolves while the account exists
    let profile = app
        .get_authenticated("/api/user/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(profile.status(), StatusCode::OK);
    let body: Value = profile.json().await.unwrap();
    assert_eq!(body["user"]["email"], "a@x.com");

    // Delete the account with the same token
    let deleted = app
        .delete_authenticated("/api/user/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(deleted.status(), StatusCode::OK);
    let body: Value = deleted.json().await.unwrap();
    assert_eq!(body["message"], "Account deleted successfully");

    // The still-valid token no longer resolves to an identity
    let after = app
        .get_authenticated("/api/user/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(after.status(), StatusCode::UNAUTHORIZED);
    let body: Value = after.json().await.unwrap();
    assert_eq!(body["error"], "Invalid token. User not found.");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Portfolio API is running!");
    assert!(body["timestamp"].is_string());
}
