//! Integration tests for review submission and rating aggregation.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_review_requires_completed_booking() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (token, _) = app.register("Alice").await;
    let dest = app
        .create_destination(&admin, "Paris", "France", "Romantic", 100.0)
        .await;
    let path = format!("/api/destinations/{dest}/review");

    let response = app
        .request("POST", &path, Some(json!({ "rating": 5 })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.message(),
        "You can only review destinations after completing a booking"
    );

    // A pending booking is not enough.
    app.book(&token, &dest, "2024-01-01", "2024-01-02", 1).await;
    let response = app
        .request("POST", &path, Some(json!({ "rating": 5 })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            "/api/destinations/00000000-0000-0000-0000-000000000000/review",
            Some(json!({ "rating": 5 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_rating_rejected_before_eligibility() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (token, _) = app.register("Dana").await;
    let dest = app
        .create_destination(&admin, "Cusco", "Peru", "Adventure", 90.0)
        .await;
    let path = format!("/api/destinations/{dest}/review");

    for body in [json!({ "rating": 9 }), json!({ "comment": "no stars" })] {
        let response = app.request("POST", &path, Some(body), Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.message(), "Rating must be between 1 and 5");
    }
}

#[tokio::test]
async fn test_average_and_upsert() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let dest = app
        .create_destination(&admin, "Bali", "Indonesia", "Beach", 80.0)
        .await;
    let path = format!("/api/destinations/{dest}/review");

    let (alice, _) = app.register("Alice").await;
    let (bob, _) = app.register("Bob").await;
    let (carol, _) = app.register("Carol").await;
    for token in [&alice, &bob, &carol] {
        app.complete_trip(&admin, token, &dest).await;
    }

    let response = app
        .request("POST", &path, Some(json!({ "rating": 4, "comment": "Lovely" })), Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    app.request("POST", &path, Some(json!({ "rating": 2 })), Some(&bob))
        .await;

    let response = app.request("GET", &format!("/api/destinations/{dest}"), None, None).await;
    assert_eq!(response.body["averageRating"], 3.0);
    assert_eq!(response.body["rating"], 3.0);
    assert_eq!(response.body["reviews"].as_array().unwrap().len(), 2);
    assert_eq!(response.body["reviews"][0]["user"]["name"], "Alice");
    assert_eq!(response.body["reviews"][0]["comment"], "Lovely");

    let response = app
        .request("POST", &path, Some(json!({ "rating": 5 })), Some(&carol))
        .await;
    let average = response.body["averageRating"].as_f64().unwrap();
    assert!((average - 11.0 / 3.0).abs() < 1e-9);
    assert_eq!(response.body["reviews"].as_array().unwrap().len(), 3);

    // Bob changes his mind: updated in place, count unchanged.
    let response = app
        .request("POST", &path, Some(json!({ "rating": 5 })), Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let reviews = response.body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[1]["user"]["name"], "Bob");
    assert_eq!(reviews[1]["rating"], 5);
    let average = response.body["averageRating"].as_f64().unwrap();
    assert!((average - 14.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_rating_out_of_range() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let dest = app
        .create_destination(&admin, "Rome", "Italy", "Cultural", 80.0)
        .await;
    let (token, _) = app.register("Alice").await;
    app.complete_trip(&admin, &token, &dest).await;
    let path = format!("/api/destinations/{dest}/review");

    for body in [json!({ "rating": 6 }), json!({ "rating": 0 }), json!({ "comment": "no stars" })] {
        let response = app.request("POST", &path, Some(body), Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.message(), "Rating must be between 1 and 5");
    }

    let response = app.request("GET", &format!("/api/destinations/{dest}"), None, None).await;
    assert!(response.body["reviews"].as_array().unwrap().is_empty());
}
