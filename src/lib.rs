//! `Travel Buddy` - travel planning backend
//!
//! This library answers three travel-planning questions - suggested
//! destinations, an estimated budget, and a day-by-day itinerary - by
//! combining a static knowledge base, a places-lookup API, and a
//! text-generation model, degrading gracefully when live sources fail.

pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod knowledge;
pub mod parse;
pub mod planner;
pub mod resolve;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::TravelBuddyConfig;
pub use error::TravelBuddyError;
pub use fetch::{Coordinates, Fetched, ModelClient, PlacesClient};
pub use resolve::{Origin, Resolved, Strategy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
