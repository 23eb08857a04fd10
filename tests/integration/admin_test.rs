//! Integration tests for the admin booking ledger.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_admin_routes_require_session() {
    let app = helpers::TestApp::new().await;

    for path in ["/bookings", "/users", "/admin/overview", "/edit/1", "/delete/1"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn test_admin_routes_reject_users() {
    let app = helpers::TestApp::new().await;
    let token = app.signup("amina", "pw").await;

    for path in ["/bookings", "/users", "/admin/overview", "/delete/1"] {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{path}");
        assert_eq!(response.error_code(), "FORBIDDEN");
    }

    let response = app
        .request("POST", "/admin/clear_bookings", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_list_and_fetch_bookings() {
    let app = helpers::TestApp::new().await;
    let admin = app.admin_token().await;
    app.book("amir", "male", "A", 1).await;
    app.book("fatima", "female", "C", 2).await;

    let response = app.request("GET", "/bookings", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
    let bookings = response.body.as_array().unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0]["name"], "amir");

    let id = bookings[1]["id"].as_i64().unwrap();
    let response = app
        .request("GET", &format!("/edit/{id}"), None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "fatima");
    assert_eq!(response.body["gender"], "female");
}

#[tokio::test]
async fn test_edit_unknown_and_malformed_ids() {
    let app = helpers::TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app.request("GET", "/edit/999", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/edit/abc", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_moves_occupancy() {
    let app = helpers::TestApp::new().await;
    let admin = app.admin_token().await;
    let booked = app.book("amir", "male", "A", 1).await;
    assert_eq!(booked.status, StatusCode::OK);

    let response = app
        .form(
            "/update/1",
            &[("name", "amir"), ("gender", "male"), ("block", "B"), ("room_no", "3")],
            &admin,
        )
        .await;

    assert!(response.status.is_redirection());
    assert_eq!(response.location(), Some("/bookings"));
    assert_eq!(app.occupants("male", "A").await[0], 0);
    assert_eq!(app.occupants("male", "B").await[2], 1);
}

#[tokio::test]
async fn test_update_with_malformed_form() {
    let app = helpers::TestApp::new().await;
    let admin = app.admin_token().await;
    app.book("amir", "male", "A", 1).await;

    let response = app
        .form(
            "/update/1",
            &[("name", "amir"), ("gender", "male"), ("block", "B"), ("room_no", "two")],
            &admin,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert_eq!(app.occupants("male", "A").await[0], 1);
}

#[tokio::test]
async fn test_update_into_full_room_changes_nothing() {
    let app = helpers::TestApp::new().await;
    let admin = app.admin_token().await;
    app.book("mover", "female", "D", 1).await;
    for name in ["a", "b", "c", "d"] {
        app.book(name, "female", "D", 2).await;
    }

    let response = app
        .form(
            "/update/1",
            &[("name", "mover"), ("gender", "female"), ("block", "D"), ("room_no", "2")],
            &admin,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "ROOM_FULL");
    assert_eq!(app.occupants("female", "D").await[..2], [1, 4]);
}

#[tokio::test]
async fn test_delete_frees_place() {
    let app = helpers::TestApp::new().await;
    let admin = app.admin_token().await;
    app.book("amir", "male", "C", 4).await;

    let response = app.request("GET", "/delete/1", None, Some(&admin)).await;
    assert!(response.status.is_redirection());
    assert_eq!(response.location(), Some("/bookings"));
    assert_eq!(app.occupants("male", "C").await[3], 0);

    let response = app.request("GET", "/delete/1", None, Some(&admin)).await;
    assert!(response.status.is_redirection());
    assert_eq!(app.occupants("male", "C").await[3], 0);

    assert_eq!(app.book("amir", "male", "C", 4).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_clear_bookings_twice() {
    let app = helpers::TestApp::new().await;
    let admin = app.admin_token().await;
    app.book("amir", "male", "A", 1).await;
    app.book("fatima", "female", "A", 1).await;

    for _ in 0..2 {
        let response = app
            .request("POST", "/admin/clear_bookings", None, Some(&admin))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["status"], "success");
    }

    let response = app.request("GET", "/bookings", None, Some(&admin)).await;
    assert_eq!(response.body.as_array().unwrap().len(), 0);
    assert!(app.occupants("male", "A").await.iter().all(|n| *n == 0));
    assert!(app.occupants("female", "A").await.iter().all(|n| *n == 0));
}

#[tokio::test]
async fn test_users_and_overview() {
    let app = helpers::TestApp::new().await;
    let admin = app.admin_token().await;
    app.signup("amina", "pw").await;
    app.book("amina", "female", "A", 1).await;

    let response = app.request("GET", "/users", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
    let users = response.body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password").is_none()));

    let response = app
        .request("GET", "/admin/overview", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["users"].as_array().unwrap().len(), 2);
    assert_eq!(response.body["status"], "Vacant");
    assert_eq!(response.body["total_occupied"], 1);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}
