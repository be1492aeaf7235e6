//! Static travel knowledge base
//!
//! Read-only reference data used when live sources are unavailable or come up
//! short: destination base costs, travel style multipliers, interest-category
//! destination lists, and fallback activity pools. All lookups are pure and
//! the tables are never mutated; callers that need to pad or reorder entries
//! work on their own copies.

/// Base cost for an unknown destination, in INR per day.
pub const DEFAULT_BASE_COST: u64 = 10_000;

/// Per-day base cost for a destination, matched case-insensitively.
pub fn base_cost(destination: &str) -> u64 {
    match destination.to_lowercase().as_str() {
        "paris" => 20_000,
        "peru" => 15_000,
        "japan" => 25_000,
        "nepal" => 8_000,
        "thailand" => 9_000,
        _ => DEFAULT_BASE_COST,
    }
}

/// Budget multiplier for a travel style, matched case-insensitively.
/// Unknown styles are treated as mid-range.
pub fn style_multiplier(style: &str) -> f64 {
    match style.to_lowercase().as_str() {
        "budget" => 0.8,
        "mid-range" => 1.0,
        "luxury" => 1.5,
        _ => 1.0,
    }
}

/// Interest categories with their curated destination lists, in the order the
/// lists should be consumed when merging.
pub const CATEGORY_DESTINATIONS: &[(&str, &[&str])] = &[
    ("mountains", &["Nepal", "Peru", "Switzerland", "Bhutan", "Canada"]),
    ("beaches", &["Maldives", "Bali", "Hawaii", "Ibiza", "Phuket"]),
    ("culture", &["Japan", "Italy", "Morocco", "India", "Turkey"]),
];

/// Destinations used to pad suggestion lists that come up short.
pub const FALLBACK_DESTINATIONS: &[&str] =
    &["Japan", "Peru", "Canada", "Nepal", "Morocco", "Australia"];

/// Curated destination list for a known category, if any.
pub fn category_destinations(category: &str) -> Option<&'static [&'static str]> {
    CATEGORY_DESTINATIONS
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(_, list)| *list)
}

/// Singular/plural forms under which a category keyword is recognized.
/// "mountains" also matches "mountain"; "beach" would also match "beaches".
pub fn category_forms(category: &str) -> Vec<String> {
    let mut forms = vec![category.to_string()];
    if let Some(singular) = category.strip_suffix('s') {
        forms.push(singular.to_string());
    } else {
        forms.push(format!("{category}s"));
    }
    forms
}

const INTERESTING_PLACES: &[&str] = &[
    "Visit the main square",
    "Explore historical landmarks",
    "Take a guided city tour",
    "Visit a local museum",
    "Walk through the old town",
];

const FOOD_CULTURE: &[&str] = &[
    "Try local street food",
    "Visit a traditional restaurant",
    "Take a cooking class",
    "Explore food markets",
    "Sample local desserts",
];

const NATURE_ADVENTURE: &[&str] = &[
    "Hike in nearby nature trails",
    "Visit a national park",
    "Go on a nature walk",
    "Explore botanical gardens",
    "Take a scenic drive",
];

const SHOPPING_NIGHTLIFE: &[&str] = &[
    "Visit shopping districts",
    "Explore local markets",
    "Enjoy nightlife venues",
    "Shop for souvenirs",
    "Experience local entertainment",
];

const HISTORY_MUSEUMS: &[&str] = &[
    "Visit historical museums",
    "Explore ancient ruins",
    "Take a history tour",
    "Visit cultural sites",
    "Learn about local heritage",
];

/// Activities used to fill itinerary slots that upstream data left empty.
pub const GENERIC_DAY_ACTIVITIES: &[&str] = &[
    "Explore a local cafe",
    "Take a city walk",
    "Visit a local market",
    "Relax in a park",
    "Try a local restaurant",
];

/// Fallback activity pool for an itinerary theme. Unknown themes fall back to
/// the generic interesting-places pool.
pub fn fallback_activities(theme: &str) -> &'static [&'static str] {
    match theme {
        "interesting_places" => INTERESTING_PLACES,
        "food_culture" => FOOD_CULTURE,
        "nature_adventure" => NATURE_ADVENTURE,
        "shopping_nightlife" => SHOPPING_NIGHTLIFE,
        "history_museums" => HISTORY_MUSEUMS,
        _ => INTERESTING_PLACES,
    }
}
