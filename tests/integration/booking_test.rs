//! Integration tests for the booking lifecycle.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_booking_snapshots_price() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (token, user_id) = app.register("Alice").await;
    let dest = app
        .create_destination(&admin, "Paris", "France", "Romantic", 100.0)
        .await;

    let response = app.book(&token, &dest, "2024-01-01", "2024-01-04", 2).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert_eq!(response.body["totalPrice"], 600.0);
    assert_eq!(response.body["status"], "pending");
    assert_eq!(response.body["paymentStatus"], "unpaid");
    assert_eq!(response.body["paymentMethod"], "Pay at Check-in");
    assert_eq!(response.body["guests"], 2);
    assert_eq!(response.body["userId"], user_id);
    assert_eq!(response.body["destination"]["name"], "Paris");
    assert_eq!(response.body["user"]["name"], "Alice");
    let booking_id = response.id();

    app.request(
        "PUT",
        &format!("/api/admin/destinations/{dest}"),
        Some(json!({ "price": 999 })),
        Some(&admin),
    )
    .await;

    let response = app
        .request("GET", &format!("/api/bookings/{booking_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["totalPrice"], 600.0);
}

#[tokio::test]
async fn test_partial_days_round_up_and_guests_alias() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (token, _) = app.register("Bob").await;
    let dest = app
        .create_destination(&admin, "Bali", "Indonesia", "Beach", 50.0)
        .await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(json!({
                "destinationId": dest,
                "startDate": "2024-03-01T10:00:00Z",
                "endDate": "2024-03-02T12:00:00Z",
                "guests": 3,
                "notes": "Late arrival",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert_eq!(response.body["travelers"], 3);
    assert_eq!(response.body["totalPrice"], 300.0);
    assert_eq!(response.body["notes"], "Late arrival");
}

#[tokio::test]
async fn test_create_booking_rejections() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (token, _) = app.register("Carol").await;
    let dest = app
        .create_destination(&admin, "Rome", "Italy", "Cultural", 80.0)
        .await;

    let response = app.book(&token, &dest, "2024-01-01", "2024-01-01", 1).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "End date must be after start date");

    let response = app.book(&token, &dest, "2024-01-01", "2024-01-05", 21).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(json!({ "destinationId": dest, "startDate": "2024-01-01", "endDate": "2024-01-04" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert_eq!(response.message(), "Travelers must be at least 1");

    let response = app
        .book(
            &token,
            "00000000-0000-0000-0000-000000000000",
            "2024-01-01",
            "2024-01-05",
            1,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(json!({ "destinationId": dest, "startDate": "2024-01-01", "endDate": "2024-01-02" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    app.request(
        "PUT",
        &format!("/api/admin/destinations/{dest}"),
        Some(json!({ "available": false })),
        Some(&admin),
    )
    .await;
    let response = app.book(&token, &dest, "2024-01-01", "2024-01-05", 1).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_owner_or_admin_access() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (owner, owner_id) = app.register("Owner").await;
    let (other, _) = app.register("Stranger").await;
    let dest = app
        .create_destination(&admin, "Tokyo", "Japan", "City", 120.0)
        .await;
    let booking_id = app
        .book(&owner, &dest, "2024-05-01", "2024-05-03", 1)
        .await
        .id();
    let path = format!("/api/bookings/{booking_id}");

    let response = app.request("GET", &path, None, Some(&other)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("GET", &path, None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/bookings/user/{owner_id}"), None, Some(&other))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("GET", &format!("/api/bookings/user/{owner_id}"), None, Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);

    let response = app
        .request(
            "PUT",
            &format!("{path}/cancel"),
            None,
            Some(&other),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_owner_may_only_cancel() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (owner, _) = app.register("Owner").await;
    let dest = app
        .create_destination(&admin, "Tokyo", "Japan", "City", 120.0)
        .await;
    let booking_id = app
        .book(&owner, &dest, "2024-05-01", "2024-05-03", 1)
        .await
        .id();

    let response = app
        .request(
            "PUT",
            &format!("/api/bookings/{booking_id}/status"),
            Some(json!({ "status": "confirmed" })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            &format!("/api/bookings/{booking_id}/status"),
            Some(json!({ "status": "archived" })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PUT",
            &format!("/api/bookings/{booking_id}/cancel"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "cancelled");

    // Cancelled is terminal.
    let response = app.set_status(&admin, &booking_id, "confirmed").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        "Cannot change booking status from cancelled to confirmed"
    );
}

#[tokio::test]
async fn test_completing_forces_paid() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (owner, _) = app.register("Owner").await;
    let dest = app
        .create_destination(&admin, "Dubai", "United Arab Emirates", "Luxury", 650.0)
        .await;
    let booking_id = app
        .book(&owner, &dest, "2024-05-01", "2024-05-03", 1)
        .await
        .id();

    let response = app.set_status(&admin, &booking_id, "completed").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.set_status(&admin, &booking_id, "confirmed").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["paymentStatus"], "unpaid");

    let response = app.set_status(&admin, &booking_id, "completed").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "completed");
    assert_eq!(response.body["paymentStatus"], "paid");

    let response = app
        .request(
            "PUT",
            &format!("/api/bookings/{booking_id}/cancel"),
            None,
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_payment_updates() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (owner, _) = app.register("Owner").await;
    let dest = app
        .create_destination(&admin, "Maldives", "Maldives", "Beach", 1200.0)
        .await;
    let booking_id = app
        .book(&owner, &dest, "2024-05-01", "2024-05-03", 1)
        .await
        .id();
    let path = format!("/api/bookings/{booking_id}/payment");

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "paymentStatus": "paid", "paymentMethod": "Credit Card" })),
            Some(&owner),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["paymentStatus"], "paid");
    assert_eq!(response.body["paymentMethod"], "Credit Card");

    let response = app
        .request("PUT", &path, Some(json!({ "paymentStatus": "refunded" })), Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("PUT", &path, Some(json!({})), Some(&owner)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    app.request(
        "PUT",
        &format!("/api/bookings/{booking_id}/cancel"),
        None,
        Some(&owner),
    )
    .await;
    let response = app
        .request("PUT", &path, Some(json!({ "paymentStatus": "unpaid" })), Some(&owner))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_lists_all_bookings_newest_first() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (alice, _) = app.register("Alice").await;
    let (bob, _) = app.register("Bob").await;
    let dest = app
        .create_destination(&admin, "Santorini", "Greece", "Beach", 550.0)
        .await;

    let first = app.book(&alice, &dest, "2024-05-01", "2024-05-03", 1).await.id();
    let second = app.book(&bob, &dest, "2024-06-01", "2024-06-03", 2).await.id();

    let response = app
        .request("GET", "/api/admin/bookings", None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![second.as_str(), first.as_str()]);
}
