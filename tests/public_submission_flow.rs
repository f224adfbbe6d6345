// Public submission endpoints exercised over HTTP, with and without a token

mod common;

use poem::test::TestClient;
use poem_openapi::OpenApiService;
use serde_json::json;

use showroom_backend::api::{CustomerApi, HealthApi};

const PASSWORD: &str = "hunter2hunter2";

fn booking_body() -> serde_json::Value {
    json!({
        "car_name": "Corolla",
        "customer_name": "Sam Buyer",
        "customer_email": "sam@example.com",
        "customer_phone": "555-0100",
        "preferred_date": "2026-09-15",
        "preferred_time": "10:00",
    })
}

#[tokio::test]
async fn booking_without_token_is_recorded_anonymously() {
    let app_data = common::setup().await;
    let cli = TestClient::new(OpenApiService::new(
        CustomerApi::new(app_data.clone()),
        "test",
        "0",
    ));

    let resp = cli.post("/bookings").body_json(&booking_body()).send().await;
    resp.assert_status_is_ok();

    let bookings = app_data
        .booking_store
        .list_bookings(None, 10, 0)
        .await
        .unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].user_id, None);
}

#[tokio::test]
async fn booking_with_bearer_token_links_the_account() {
    let app_data = common::setup().await;
    let user_id = common::register_user(&app_data, "sam@example.com", PASSWORD).await;
    let token = app_data
        .auth_service
        .login("sam@example.com", PASSWORD, None)
        .await
        .unwrap()
        .access_token;

    let cli = TestClient::new(OpenApiService::new(
        CustomerApi::new(app_data.clone()),
        "test",
        "0",
    ));

    let resp = cli
        .post("/bookings")
        .header("Authorization", format!("Bearer {token}"))
        .body_json(&booking_body())
        .send()
        .await;
    resp.assert_status_is_ok();

    let bookings = app_data
        .booking_store
        .list_bookings(None, 10, 0)
        .await
        .unwrap();
    assert_eq!(bookings[0].user_id.as_deref(), Some(user_id.as_str()));
}

#[tokio::test]
async fn invalid_token_degrades_to_anonymous_submission() {
    let app_data = common::setup().await;
    let cli = TestClient::new(OpenApiService::new(
        CustomerApi::new(app_data.clone()),
        "test",
        "0",
    ));

    let resp = cli
        .post("/bookings")
        .header("Authorization", "Bearer not-a-real-token")
        .body_json(&booking_body())
        .send()
        .await;
    resp.assert_status_is_ok();

    let bookings = app_data
        .booking_store
        .list_bookings(None, 10, 0)
        .await
        .unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].user_id, None);
}

#[tokio::test]
async fn service_request_submission_is_recorded_pending() {
    let app_data = common::setup().await;
    let cli = TestClient::new(OpenApiService::new(
        CustomerApi::new(app_data.clone()),
        "test",
        "0",
    ));

    let resp = cli
        .post("/service-requests")
        .body_json(&json!({
            "name": "Sam Buyer",
            "email": "sam@example.com",
            "phone": "555-0100",
            "service_type": "Periodic Maintenance",
            "vehicle_details": "2019 Mazda 3",
        }))
        .send()
        .await;
    resp.assert_status_is_ok();

    let requests = app_data
        .booking_store
        .list_service_requests(Some("pending"), 10, 0)
        .await
        .unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].service_type, "Periodic Maintenance");

    // A bad email is rejected before anything is written
    let resp = cli
        .post("/service-requests")
        .body_json(&json!({
            "name": "Sam Buyer",
            "email": "not-an-email",
            "phone": "555-0100",
            "service_type": "Diagnostics & Repairs",
        }))
        .send()
        .await;
    resp.assert_status(poem::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_package_name_and_version() {
    let cli = TestClient::new(OpenApiService::new(HealthApi, "test", "0"));

    let resp = cli.get("/health").send().await;
    resp.assert_status_is_ok();

    let body = resp.json().await;
    let object = body.value().object();
    assert_eq!(object.get("status").string(), "healthy");
    assert_eq!(object.get("service").string(), "showroom-backend");
    assert_eq!(object.get("version").string(), env!("CARGO_PKG_VERSION"));
}
