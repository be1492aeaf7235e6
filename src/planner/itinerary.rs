//! Itinerary generation
//!
//! Primary path resolves the destination to coordinates and pulls points of
//! interest, three per day. When the places API is unavailable or answers
//! empty, the theme-keyed fallback activity pool is cycled instead. Every day
//! ends up with exactly three filled slots.

use tracing::instrument;

use crate::fetch::PlacesClient;
use crate::knowledge;
use crate::resolve::{self, Origin, Strategy};

const SLOTS_PER_DAY: usize = 3;

/// One day of an itinerary with its three time-slot activities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub label: String,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
}

/// Build a `days`-day itinerary for a destination and interest theme.
#[instrument(skip(places))]
pub async fn build(
    places: &PlacesClient,
    destination: &str,
    days: u32,
    interest: &str,
) -> Vec<DayPlan> {
    let needed = days as usize * SLOTS_PER_DAY;

    let resolved = resolve::resolve(
        vec![Strategy::new(
            Origin::Live,
            places.points_of_interest(destination, interest, needed),
            |pois: &Vec<String>| !pois.is_empty(),
        )],
        || theme_pool(interest, needed),
    )
    .await;

    into_days(&resolved.value, days)
}

/// The theme-keyed fallback pool cycled out to `needed` activities.
/// A fresh list every call; the pool itself is never touched.
fn theme_pool(interest: &str, needed: usize) -> Vec<String> {
    knowledge::fallback_activities(interest)
        .iter()
        .cycle()
        .take(needed)
        .map(|s| s.to_string())
        .collect()
}

/// Slice activities into consecutive groups of three, one per day, padding
/// short days from the generic pool without repeating within the day.
fn into_days(activities: &[String], days: u32) -> Vec<DayPlan> {
    let mut plans = Vec::with_capacity(days as usize);

    for day in 0..days as usize {
        let mut slots: Vec<String> = activities
            .iter()
            .skip(day * SLOTS_PER_DAY)
            .take(SLOTS_PER_DAY)
            .cloned()
            .collect();
        resolve::pad_unique(&mut slots, knowledge::GENERIC_DAY_ACTIVITIES, SLOTS_PER_DAY);

        let mut slots = slots.into_iter();
        plans.push(DayPlan {
            label: format!("Day {}", day + 1),
            morning: slots.next().unwrap_or_else(|| "Start your day".to_string()),
            afternoon: slots.next().unwrap_or_else(|| "Explore the city".to_string()),
            evening: slots.next().unwrap_or_else(|| "Enjoy local cuisine".to_string()),
        });
    }

    plans
}
