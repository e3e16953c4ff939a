//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use travelhub_api::{AppState, build_app};
use travelhub_core::config::AppConfig;
use travelhub_database::Database;
use travelhub_service::account::Registration;

/// Password used for every test account.
pub const PASSWORD: &str = "password123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for setup that has no HTTP endpoint
    pub state: AppState,
}

/// Response captured from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty)
    pub body: Value,
}

impl TestResponse {
    /// The `error` code of an error body.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }

    /// The `message` of an error body.
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }

    /// The `id` field of the body.
    pub fn id(&self) -> String {
        self.body["id"]
            .as_str()
            .unwrap_or_else(|| panic!("response has no id: {}", self.body))
            .to_string()
    }
}

impl TestApp {
    /// Create a new test application over fresh in-memory storage
    pub async fn new() -> Self {
        let state = AppState::new(AppConfig::in_memory(), Database::in_memory());
        let router = build_app(state.clone());
        Self { router, state }
    }

    /// Send a request and parse the JSON response
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
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Register a traveller and return (token, user id)
    pub async fn register(&self, name: &str) -> (String, String) {
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(json!({ "name": name, "email": email, "password": PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

        let token = response.body["token"].as_str().expect("token").to_string();
        let id = response.body["user"]["id"].as_str().expect("id").to_string();
        (token, id)
    }

    /// Create an administrator directly and log in over HTTP
    pub async fn admin_token(&self) -> String {
        self.state
            .accounts
            .create_admin(Registration {
                name: "Admin User".to_string(),
                email: "admin@example.com".to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .expect("Failed to create admin");

        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "email": "admin@example.com", "password": PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        response.body["token"].as_str().expect("token").to_string()
    }

    /// Create a destination as admin and return its id
    pub async fn create_destination(
        &self,
        admin: &str,
        name: &str,
        country: &str,
        category: &str,
        price: f64,
    ) -> String {
        let response = self
            .request(
                "POST",
                "/api/admin/destinations",
                Some(destination_body(name, country, category, price)),
                Some(admin),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.id()
    }

    /// Book a destination
    pub async fn book(
        &self,
        token: &str,
        destination_id: &str,
        start: &str,
        end: &str,
        travelers: i32,
    ) -> TestResponse {
        self.request(
            "POST",
            "/api/bookings",
            Some(json!({
                "destinationId": destination_id,
                "startDate": start,
                "endDate": end,
                "travelers": travelers,
            })),
            Some(token),
        )
        .await
    }

    /// Set a booking's status as admin
    pub async fn set_status(&self, admin: &str, booking_id: &str, status: &str) -> TestResponse {
        self.request(
            "PUT",
            &format!("/api/admin/bookings/{booking_id}/status"),
            Some(json!({ "status": status })),
            Some(admin),
        )
        .await
    }

    /// Book, confirm and complete a trip so the traveller may review
    pub async fn complete_trip(&self, admin: &str, token: &str, destination_id: &str) {
        let booking = self
            .book(token, destination_id, "2024-01-01", "2024-01-03", 1)
            .await;
        assert_eq!(booking.status, StatusCode::CREATED, "{}", booking.body);
        let id = booking.id();
        assert_eq!(self.set_status(admin, &id, "confirmed").await.status, StatusCode::OK);
        assert_eq!(self.set_status(admin, &id, "completed").await.status, StatusCode::OK);
    }
}

/// A complete destination body
pub fn destination_body(name: &str, country: &str, category: &str, price: f64) -> Value {
    json!({
        "name": name,
        "location": format!("{name}, {country}"),
        "country": country,
        "description": format!("A trip to {name}"),
        "price": price,
        "images": [format!("https://img.example/{name}.jpg")],
        "duration": "5 days",
        "category": category,
        "activities": ["Walking tour"],
    })
}
