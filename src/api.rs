//! HTTP surface: request/response shapes and handlers
//!
//! Handlers validate the structural shape of the input, delegate to the
//! planners, and wrap the result in the response envelope. Degraded upstream
//! sources never turn into error responses here; the only rejections are for
//! malformed input.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::TravelBuddyConfig;
use crate::error::TravelBuddyError;
use crate::fetch::{ModelClient, PlacesClient};
use crate::planner::{self, DayPlan};

/// Shared per-process state: configuration and the two external clients.
/// Everything here is read-only once built, so requests share it freely.
pub struct AppState {
    pub config: TravelBuddyConfig,
    pub places: PlacesClient,
    pub model: ModelClient,
}

impl AppState {
    /// Build the application state from configuration
    pub fn new(config: TravelBuddyConfig) -> Result<Self> {
        let places = PlacesClient::new(&config.places)?;
        let model = ModelClient::new(&config.model)?;
        Ok(Self {
            config,
            places,
            model,
        })
    }
}

type Rejection = (StatusCode, Json<Value>);

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/suggest-destinations", post(suggest_destinations))
        .route("/budget", post(budget))
        .route("/itinerary", post(itinerary))
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({"message": "Travel Buddy AI"}))
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok", "version": crate::VERSION}))
}

#[derive(Debug, Deserialize)]
struct DestinationRequest {
    interest: String,
}

#[derive(Debug, Serialize)]
struct DestinationResponse {
    destinations: String,
}

async fn suggest_destinations(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DestinationRequest>,
) -> Json<DestinationResponse> {
    let destinations = planner::destinations::suggest(
        &state.places,
        &state.model,
        &request.interest,
        state.config.defaults.suggestion_count,
    )
    .await;
    Json(DestinationResponse { destinations })
}

#[derive(Debug, Deserialize)]
struct BudgetRequest {
    #[serde(default = "default_destination")]
    destination: String,
    #[serde(default = "default_days")]
    days: i64,
    #[serde(default = "default_style")]
    style: String,
}

/// `llm_raw` is always present, `null` when the formula produced the figure
#[derive(Debug, Serialize)]
struct BudgetResponse {
    budget: String,
    llm_raw: Option<String>,
    disclaimer: String,
}

async fn budget(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BudgetRequest>,
) -> Result<Json<BudgetResponse>, Rejection> {
    let days = validated_days(request.days)?;
    let estimate =
        planner::budget::estimate(&state.model, &request.destination, days, &request.style).await;
    Ok(Json(BudgetResponse {
        budget: estimate.message,
        llm_raw: estimate.llm_raw,
        disclaimer: estimate.disclaimer,
    }))
}

#[derive(Debug, Deserialize)]
struct ItineraryRequest {
    destination: String,
    days: i64,
    #[serde(default = "default_theme")]
    interest: String,
}

#[derive(Debug, Serialize)]
struct ItineraryResponse {
    itinerary: Vec<DayEntry>,
}

/// Serializes a day as `{"Day N": {"morning": .., "afternoon": .., "evening": ..}}`
#[derive(Debug)]
struct DayEntry(DayPlan);

impl Serialize for DayEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Slots<'a> {
            morning: &'a str,
            afternoon: &'a str,
            evening: &'a str,
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            &self.0.label,
            &Slots {
                morning: &self.0.morning,
                afternoon: &self.0.afternoon,
                evening: &self.0.evening,
            },
        )?;
        map.end()
    }
}

async fn itinerary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ItineraryRequest>,
) -> Result<Json<ItineraryResponse>, Rejection> {
    let days = validated_days(request.days)?;
    let plans =
        planner::itinerary::build(&state.places, &request.destination, days, &request.interest)
            .await;
    Ok(Json(ItineraryResponse {
        itinerary: plans.into_iter().map(DayEntry).collect(),
    }))
}

fn validated_days(days: i64) -> Result<u32, Rejection> {
    if (1..=365).contains(&days) {
        Ok(days as u32)
    } else {
        let error =
            TravelBuddyError::validation(format!("days must be between 1 and 365, got {days}"));
        Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": error.user_message()})),
        ))
    }
}

fn default_destination() -> String {
    "Paris".to_string()
}

fn default_days() -> i64 {
    5
}

fn default_style() -> String {
    "mid-range".to_string()
}

fn default_theme() -> String {
    "interesting_places".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_entry_serialization_shape() {
        let entry = DayEntry(DayPlan {
            label: "Day 1".to_string(),
            morning: "a".to_string(),
            afternoon: "b".to_string(),
            evening: "c".to_string(),
        });
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({"Day 1": {"morning": "a", "afternoon": "b", "evening": "c"}})
        );
    }

    #[test]
    fn test_validated_days() {
        assert_eq!(validated_days(1).unwrap(), 1);
        assert_eq!(validated_days(365).unwrap(), 365);
        assert!(validated_days(0).is_err());
        assert!(validated_days(-3).is_err());
        assert!(validated_days(1000).is_err());
    }

    #[test]
    fn test_validated_days_rejection_carries_user_message() {
        let (status, Json(body)) = validated_days(0).unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Invalid input"));
        assert!(message.contains("days"));
    }

    #[test]
    fn test_destination_request_requires_interest() {
        assert!(serde_json::from_str::<DestinationRequest>("{}").is_err());
        let request: DestinationRequest =
            serde_json::from_str(r#"{"interest": "mountains"}"#).unwrap();
        assert_eq!(request.interest, "mountains");
    }

    #[test]
    fn test_budget_request_defaults() {
        let request: BudgetRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.destination, "Paris");
        assert_eq!(request.days, 5);
        assert_eq!(request.style, "mid-range");
    }

    #[test]
    fn test_itinerary_request_requires_destination_and_days() {
        assert!(serde_json::from_str::<ItineraryRequest>("{}").is_err());
        let request: ItineraryRequest =
            serde_json::from_str(r#"{"destination": "Rome", "days": 2}"#).unwrap();
        assert_eq!(request.interest, "interesting_places");
    }
}
