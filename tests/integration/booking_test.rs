//! Integration tests for room listing and booking.

mod helpers;

use std::sync::Arc;

use http::StatusCode;

#[tokio::test]
async fn test_list_rooms_returns_block_grid() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/rooms?gender=male&block=B", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let rooms = response.body.as_array().unwrap();
    let numbers: Vec<i64> = rooms.iter().map(|r| r["room_no"].as_i64().unwrap()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    assert!(rooms.iter().all(|r| r["occupants"] == 0));
}

#[tokio::test]
async fn test_list_rooms_unknown_gender() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/rooms?gender=staff&block=A", None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_rooms_missing_gender() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/rooms?block=B", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "error");
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_book_malformed_body() {
    let app = helpers::TestApp::new().await;

    for body in [
        serde_json::json!({ "name": "amir", "gender": "male", "block": "A" }),
        serde_json::json!({ "name": "amir", "gender": "male", "block": "A", "room_no": "2" }),
    ] {
        let response = app.request("POST", "/api/book", Some(body), None).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["status"], "error");
        assert_eq!(response.error_code(), "VALIDATION_ERROR");
        assert!(response.body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
    assert_eq!(app.occupants("male", "A").await[1], 0);
}

#[tokio::test]
async fn test_book_increments_room() {
    let app = helpers::TestApp::new().await;

    let response = app.book("amir", "male", "B", 2).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    assert_eq!(app.occupants("male", "B").await, vec![0, 1, 0, 0, 0]);
}

#[tokio::test]
async fn test_boys_and_girls_labels() {
    let app = helpers::TestApp::new().await;

    assert_eq!(app.book("amir", "boys", "a", 1).await.status, StatusCode::OK);
    assert_eq!(app.book("fatima", "girls", "A", 1).await.status, StatusCode::OK);

    assert_eq!(app.occupants("male", "A").await[0], 1);
    assert_eq!(app.occupants("female", "A").await[0], 1);
}

#[tokio::test]
async fn test_second_booking_for_holder_rejected() {
    let app = helpers::TestApp::new().await;

    assert_eq!(app.book("amir", "male", "B", 2).await.status, StatusCode::OK);
    let response = app.book("amir", "male", "C", 1).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "ALREADY_BOOKED");
    assert_eq!(app.occupants("male", "C").await[0], 0);
}

#[tokio::test]
async fn test_fifth_booking_finds_room_full() {
    let app = helpers::TestApp::new().await;

    for name in ["a", "b", "c", "d"] {
        assert_eq!(app.book(name, "female", "A", 3).await.status, StatusCode::OK);
    }
    let response = app.book("e", "female", "A", 3).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "ROOM_FULL");
    assert_eq!(app.occupants("female", "A").await, vec![0, 0, 4, 0, 0]);
}

#[tokio::test]
async fn test_booking_missing_room() {
    let app = helpers::TestApp::new().await;

    let response = app.book("amir", "male", "Z", 1).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "ROOM_NOT_FOUND");

    let response = app.book("amir", "male", "A", 9).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_requires_name() {
    let app = helpers::TestApp::new().await;

    let response = app.book("", "male", "A", 1).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.occupants("male", "A").await[0], 0);
}

#[tokio::test]
async fn test_concurrent_bookings_fill_room_once() {
    let app = Arc::new(helpers::TestApp::new().await);

    let attempts = (0..12).map(|i| {
        let app = Arc::clone(&app);
        tokio::spawn(async move { app.book(&format!("guest-{i}"), "male", "D", 5).await.status })
    });
    let statuses: Vec<StatusCode> = futures::future::join_all(attempts)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 4);
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count(),
        8
    );
    assert_eq!(app.occupants("male", "D").await[4], 4);
}

#[tokio::test]
async fn test_status_reports_own_booking() {
    let app = helpers::TestApp::new().await;
    let amina = app.signup("amina", "pw").await;
    let omar = app.signup("omar", "pw").await;

    app.book("amina", "female", "B", 1).await;

    let response = app.request("GET", "/api/status", None, Some(&amina)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "approved");
    assert_eq!(response.body["booking"]["block"], "B");

    let response = app.request("GET", "/api/status", None, Some(&omar)).await;
    assert_eq!(response.body["status"], "rejected");
    assert!(response.body.get("booking").is_none());
}

#[tokio::test]
async fn test_status_requires_session() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/status", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_occupancy_summary() {
    let app = helpers::TestApp::new().await;
    app.book("amir", "male", "A", 1).await;

    let response = app.request("GET", "/api/occupancy", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "Vacant");
    assert_eq!(response.body["total_capacity"], 160);
    assert_eq!(response.body["total_occupied"], 1);
}
