//! Integration tests for signup, login, and logout.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_signup_sets_cookie_and_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/signup",
            Some(serde_json::json!({
                "username": "amina",
                "email": "amina@example.com",
                "password": "pw",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    assert_eq!(response.body["redirect"], "/");
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));

    let cookie = response.cookie().unwrap();
    assert!(cookie.starts_with(&format!("{}=", app.config.session.cookie_name)));
}

#[tokio::test]
async fn test_duplicate_signup() {
    let app = helpers::TestApp::new().await;
    app.signup("amina", "pw").await;

    let response = app
        .request(
            "POST",
            "/signup",
            Some(serde_json::json!({
                "username": "amina",
                "email": "other@example.com",
                "password": "pw2",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "DUPLICATE_IDENTITY");
}

#[tokio::test]
async fn test_signup_rejects_bad_email() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/signup",
            Some(serde_json::json!({
                "username": "amina",
                "email": "not-an-email",
                "password": "pw",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.signup("amina", "pw").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": "amina", "password": "pw" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["redirect"], "/");
    assert!(response.body.get("token").is_some());
}

#[tokio::test]
async fn test_admin_login_redirects_to_dashboard() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "username": app.config.auth.admin_username,
                "password": app.config.auth.admin_password,
                "role": "admin",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["redirect"], "/admin/overview");
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    app.signup("amina", "pw").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": "amina", "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_role_mismatch() {
    let app = helpers::TestApp::new().await;
    app.signup("amina", "pw").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "username": "amina",
                "password": "pw",
                "role": "admin",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": "nobody", "password": "pw" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cookie_authenticates() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/signup",
            Some(serde_json::json!({
                "username": "amina",
                "email": "amina@example.com",
                "password": "pw",
            })),
            None,
        )
        .await;
    let cookie = response.cookie().unwrap();

    let response = app.get_with_cookie("/api/status", &cookie).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "rejected");
}

#[tokio::test]
async fn test_logout_invalidates_token() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("amina", "pw").await;

    let response = app.request("GET", "/logout", None, Some(&token)).await;
    assert!(response.status.is_redirection());
    assert_eq!(response.location(), Some("/"));

    let response = app.request("GET", "/api/status", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/status", None, Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}
