//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use hostel_api::{AppState, bootstrap, build_app};
use hostel_core::config::AppConfig;
use hostel_database::DatabasePool;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct service access
    pub state: AppState,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Fresh in-memory database with the default grid and admin account.
    pub async fn new() -> Self {
        let config = AppConfig::for_tests();

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        let state = AppState::new(config.clone(), db.into_pool());
        bootstrap(&state).await.expect("Failed to bootstrap");

        Self {
            router: build_app(state.clone()),
            state,
            config,
        }
    }

    /// Log in as the bootstrap admin and return the token.
    pub async fn admin_token(&self) -> String {
        let body = serde_json::json!({
            "username": self.config.auth.admin_username,
            "password": self.config.auth.admin_password,
            "role": "admin",
        });
        let response = self.request("POST", "/login", Some(body), None).await;
        assert_eq!(response.status, StatusCode::OK, "Admin login failed: {:?}", response.body);
        token_of(&response)
    }

    /// Sign up a `user`-role account and return its token.
    pub async fn signup(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": password,
        });
        let response = self.request("POST", "/signup", Some(body), None).await;
        assert_eq!(response.status, StatusCode::OK, "Signup failed: {:?}", response.body);
        token_of(&response)
    }

    /// `POST /api/book`.
    pub async fn book(&self, name: &str, gender: &str, block: &str, room_no: i64) -> TestResponse {
        let body = serde_json::json!({
            "name": name,
            "gender": gender,
            "block": block,
            "room_no": room_no,
        });
        self.request("POST", "/api/book", Some(body), None).await
    }

    /// Occupants per room number for one gender and block.
    pub async fn occupants(&self, gender: &str, block: &str) -> Vec<i64> {
        let response = self
            .request(
                "GET",
                &format!("/api/rooms?gender={gender}&block={block}"),
                None,
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response
            .body
            .as_array()
            .expect("room list")
            .iter()
            .map(|r| r["occupants"].as_i64().expect("occupants"))
            .collect()
    }

    /// Make a JSON request, optionally with a bearer token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        self.send(req.body(Body::from(body_str)).expect("Failed to build request"))
            .await
    }

    /// Submit an urlencoded form with a bearer token.
    pub async fn form(&self, path: &str, fields: &[(&str, &str)], token: &str) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// `GET` carrying only a `Cookie` header.
    pub async fn get_with_cookie(&self, path: &str, cookie: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` when empty or not JSON)
    pub body: Value,
}

impl TestResponse {
    /// Machine-readable error code of an error body.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }

    /// `Location` header of a redirect.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// `name=value` part of the first `Set-Cookie` header.
    pub fn cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string)
    }
}

fn token_of(response: &TestResponse) -> String {
    response.body["token"]
        .as_str()
        .expect("No token in auth response")
        .to_string()
}
