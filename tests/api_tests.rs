//! End-to-end tests for the HTTP surface
//!
//! The router is driven in-process with a default (credential-less)
//! configuration, so every external source reports unavailable and the
//! fallback chains resolve deterministically without touching the network.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use travel_buddy::{AppState, TravelBuddyConfig, api};

fn app() -> Router {
    let state = Arc::new(AppState::new(TravelBuddyConfig::default()).unwrap());
    api::router(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    into_json(response).await
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    into_json(response).await
}

async fn into_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn banner_and_health() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Travel Buddy AI");

    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn suggest_destinations_falls_back_to_knowledge_base() {
    let (status, body) =
        post_json(app(), "/suggest-destinations", json!({"interest": "mountains"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["destinations"],
        "Nepal, Peru, Switzerland, Bhutan, Canada"
    );
}

#[tokio::test]
async fn suggest_destinations_always_five_distinct() {
    for interest in ["mountains and beaches", "culture", "deep sea diving"] {
        let (status, body) =
            post_json(app(), "/suggest-destinations", json!({"interest": interest})).await;
        assert_eq!(status, StatusCode::OK);

        let names: Vec<&str> = body["destinations"].as_str().unwrap().split(", ").collect();
        assert_eq!(names.len(), 5, "interest {interest:?}");

        let mut lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        lowered.sort();
        lowered.dedup();
        assert_eq!(lowered.len(), 5, "case-duplicates for {interest:?}");
    }
}

#[tokio::test]
async fn suggest_destinations_requires_interest() {
    let (status, _) = post_json(app(), "/suggest-destinations", json!({})).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn suggest_destinations_output_is_stable_when_fed_back() {
    let (_, first) = post_json(app(), "/suggest-destinations", json!({"interest": "mountains"})).await;
    let returned = first["destinations"].as_str().unwrap().to_string();

    // feeding the output back must not disturb the static tables
    let (status, _) =
        post_json(app(), "/suggest-destinations", json!({"interest": returned})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, again) = post_json(app(), "/suggest-destinations", json!({"interest": "mountains"})).await;
    assert_eq!(first, again);
}

#[tokio::test]
async fn budget_falls_back_to_formula() {
    let (status, body) = post_json(
        app(),
        "/budget",
        json!({"destination": "Paris", "days": 5, "style": "luxury"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let message = body["budget"].as_str().unwrap();
    assert!(message.contains("150000"), "got {message}");
    assert!(message.contains("Paris"));
    assert!(body["llm_raw"].is_null());
    assert_eq!(
        body["disclaimer"],
        "This is an estimated calculation based on typical costs. Actual prices may vary."
    );
}

#[tokio::test]
async fn budget_applies_schema_defaults() {
    let (status, body) = post_json(app(), "/budget", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    // Paris, 5 days, mid-range
    assert!(body["budget"].as_str().unwrap().contains("100000"));
}

#[tokio::test]
async fn budget_unknown_destination_uses_default_base() {
    let (status, body) = post_json(
        app(),
        "/budget",
        json!({"destination": "Atlantis", "days": 2, "style": "mid-range"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["budget"].as_str().unwrap().contains("20000"));
}

#[tokio::test]
async fn budget_rejects_non_positive_days() {
    let (status, body) = post_json(
        app(),
        "/budget",
        json!({"destination": "Paris", "days": 0, "style": "budget"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("days"));
}

#[tokio::test]
async fn itinerary_falls_back_to_theme_pool() {
    let (status, body) = post_json(
        app(),
        "/itinerary",
        json!({"destination": "Unknown City", "days": 2, "interest": "food"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let days = body["itinerary"].as_array().unwrap();
    assert_eq!(days.len(), 2);

    for (i, day) in days.iter().enumerate() {
        let slots = &day[format!("Day {}", i + 1)];
        for slot in ["morning", "afternoon", "evening"] {
            assert!(
                !slots[slot].as_str().unwrap().is_empty(),
                "empty {slot} on day {}",
                i + 1
            );
        }
        assert_ne!(slots["morning"], slots["afternoon"]);
        assert_ne!(slots["afternoon"], slots["evening"]);
        assert_ne!(slots["morning"], slots["evening"]);
    }
}

#[tokio::test]
async fn itinerary_rejects_bad_days() {
    let (status, _) = post_json(
        app(),
        "/itinerary",
        json!({"destination": "Rome", "days": -1, "interest": "food"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn itinerary_rejects_missing_required_fields() {
    let (status, _) = post_json(app(), "/itinerary", json!({"days": 2})).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/budget")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}
