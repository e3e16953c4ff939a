//! Integration tests for the destination catalog and its admin endpoints.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, destination_body};

#[tokio::test]
async fn test_query_filters_and_newest_first() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    app.create_destination(&admin, "Paris", "France", "Romantic", 450.0)
        .await;
    app.create_destination(&admin, "Nice", "France", "Beach", 200.0)
        .await;
    app.create_destination(&admin, "Kyoto", "Japan", "Cultural", 300.0)
        .await;

    let response = app.request("GET", "/api/destinations", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Kyoto", "Nice", "Paris"]);

    let response = app
        .request(
            "GET",
            "/api/destinations?country=France&category=all&maxPrice=300",
            None,
            None,
        )
        .await;
    let body = response.body.as_array().unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Nice");

    let response = app
        .request("GET", "/api/destinations?search=KYO", None, None)
        .await;
    assert_eq!(response.body.as_array().unwrap().len(), 1);

    let response = app
        .request("GET", "/api/destinations?search=atlantis", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_min_rating_honours_seed_rating() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let mut rated = destination_body("Paris", "France", "Romantic", 450.0);
    rated["rating"] = json!(4.8);
    let response = app
        .request("POST", "/api/admin/destinations", Some(rated), Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    app.create_destination(&admin, "Lyon", "France", "City", 150.0)
        .await;
    let mut rome = destination_body("Rome", "Italy", "Cultural", 500.0);
    rome["rating"] = json!(4.9);
    app.request("POST", "/api/admin/destinations", Some(rome), Some(&admin))
        .await;

    let response = app
        .request(
            "GET",
            "/api/destinations?country=France&minRating=4",
            None,
            None,
        )
        .await;
    let body = response.body.as_array().unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Paris");
    assert_eq!(body[0]["rating"], 4.8);
}

#[tokio::test]
async fn test_meta_is_distinct_and_sorted() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    app.create_destination(&admin, "Paris", "France", "Romantic", 1.0)
        .await;
    app.create_destination(&admin, "Nice", "France", "Beach", 1.0)
        .await;
    app.create_destination(&admin, "Bali", "Indonesia", "Beach", 1.0)
        .await;

    let response = app
        .request("GET", "/api/destinations/meta", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["countries"], json!(["France", "Indonesia"]));
    assert_eq!(response.body["categories"], json!(["Beach", "Romantic"]));
    assert_eq!(response.body["ratings"], json!([1, 2, 3, 4, 5]));
}

#[tokio::test]
async fn test_get_destination_and_missing() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let id = app
        .create_destination(&admin, "Paris", "France", "Romantic", 450.0)
        .await;

    let response = app
        .request("GET", &format!("/api/destinations/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["image"], "https://img.example/Paris.jpg");
    assert_eq!(response.body["bestTimeToVisit"], "Year-round");
    assert_eq!(response.body["averageRating"], 0.0);

    let response = app
        .request(
            "GET",
            "/api/destinations/00000000-0000-0000-0000-000000000000",
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Destination not found");

    let response = app
        .request("GET", "/api/destinations/not-a-uuid", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_lists_every_violation() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/admin/destinations",
            Some(json!({ "name": "Nowhere", "price": -5, "category": "Space" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.message();
    for field in ["location", "country", "description", "duration", "price", "category", "images"] {
        assert!(message.contains(field), "{field} missing from: {message}");
    }
}

#[tokio::test]
async fn test_create_accepts_legacy_image() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let mut body = destination_body("Bali", "Indonesia", "Beach", 350.0);
    body.as_object_mut().unwrap().remove("images");
    body["image"] = json!("https://img.example/bali.jpg");

    let response = app
        .request("POST", "/api/admin/destinations", Some(body), Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["images"], json!(["https://img.example/bali.jpg"]));
}

#[tokio::test]
async fn test_partial_update_keeps_images() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let id = app
        .create_destination(&admin, "Paris", "France", "Romantic", 450.0)
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/destinations/{id}"),
            Some(json!({ "price": 500, "images": [] })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["price"], 500.0);
    assert_eq!(response.body["name"], "Paris");
    assert_eq!(response.body["images"], json!(["https://img.example/Paris.jpg"]));

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/destinations/{id}"),
            Some(json!({ "image": "https://img.example/new.jpg" })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.body["images"], json!(["https://img.example/new.jpg"]));
}

#[tokio::test]
async fn test_unavailable_destinations_are_hidden_but_listed_for_admin() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let id = app
        .create_destination(&admin, "Paris", "France", "Romantic", 450.0)
        .await;
    app.request(
        "PUT",
        &format!("/api/admin/destinations/{id}"),
        Some(json!({ "available": false })),
        Some(&admin),
    )
    .await;

    let public = app.request("GET", "/api/destinations", None, None).await;
    assert!(public.body.as_array().unwrap().is_empty());

    let all = app
        .request("GET", "/api/admin/destinations", None, Some(&admin))
        .await;
    assert_eq!(all.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_blocked_by_active_booking() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let (token, _) = app.register("Dana").await;
    let id = app
        .create_destination(&admin, "Paris", "France", "Romantic", 100.0)
        .await;
    let booking = app.book(&token, &id, "2024-01-01", "2024-01-04", 2).await;
    let booking_id = booking.id();

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/destinations/{id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    app.request(
        "PUT",
        &format!("/api/bookings/{booking_id}/cancel"),
        None,
        Some(&token),
    )
    .await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/destinations/{id}"),
            None,
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/destinations/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // The cancelled booking still resolves its destination.
    let response = app
        .request("GET", &format!("/api/bookings/{booking_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["destination"]["name"], "Paris");
}
