//! Places-lookup API client (OpenTripMap)
//!
//! Three lookups: autosuggest by free text, city name to coordinates, and
//! points of interest around a coordinate. All of them go through one
//! `reqwest` client built with an explicit timeout.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::PlacesConfig;
use crate::fetch::Fetched;

/// Geographic coordinate pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Client for the places-lookup API
pub struct PlacesClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    poi_radius_m: u32,
}

impl PlacesClient {
    /// Create a new places client from configuration
    pub fn new(config: &PlacesConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("travel-buddy/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client for places API")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            poi_radius_m: config.poi_radius_m,
        })
    }

    /// Suggest place names matching a free-text interest.
    ///
    /// An empty result list is still `Ok`; callers decide whether that
    /// qualifies. Only a missing key or a failed call is `Unavailable`.
    #[instrument(skip(self))]
    pub async fn suggest_places(&self, interest: &str, limit: usize) -> Fetched<Vec<String>> {
        let Some(key) = self.api_key.as_deref() else {
            debug!("No places API key configured, autosuggest unavailable");
            return Fetched::Unavailable;
        };

        let query = format!(
            "{}/places/autosuggest?name={}&limit={}",
            self.base_url,
            urlencoding::encode(interest),
            limit
        );

        self.get_json::<AutosuggestResponse>(&query, key)
            .await
            .map(AutosuggestResponse::into_names)
    }

    /// Resolve a city name to coordinates via the geoname endpoint
    #[instrument(skip(self))]
    pub async fn coordinates(&self, city: &str) -> Fetched<Coordinates> {
        let Some(key) = self.api_key.as_deref() else {
            debug!("No places API key configured, geocoding unavailable");
            return Fetched::Unavailable;
        };

        let query = format!(
            "{}/places/geoname?name={}",
            self.base_url,
            urlencoding::encode(city)
        );

        match self.get_json::<GeonameResponse>(&query, key).await {
            Fetched::Ok(GeonameResponse {
                lat: Some(latitude),
                lon: Some(longitude),
            }) => {
                debug!("Resolved '{}' to ({:.4}, {:.4})", city, latitude, longitude);
                Fetched::Ok(Coordinates {
                    latitude,
                    longitude,
                })
            }
            Fetched::Ok(_) => {
                warn!("Geoname response for '{}' carried no coordinates", city);
                Fetched::Unavailable
            }
            Fetched::Unavailable => Fetched::Unavailable,
        }
    }

    /// Points of interest near a destination, optionally filtered by interest.
    ///
    /// Resolves the destination to coordinates first; an interest of at least
    /// three characters selects the kinds-filtered autosuggest search,
    /// anything shorter the general radius search.
    #[instrument(skip(self))]
    pub async fn points_of_interest(
        &self,
        destination: &str,
        interest: &str,
        limit: usize,
    ) -> Fetched<Vec<String>> {
        let Fetched::Ok(coords) = self.coordinates(destination).await else {
            return Fetched::Unavailable;
        };

        // coordinates() already checked, but the key lookup stays in one place
        let Some(key) = self.api_key.as_deref() else {
            return Fetched::Unavailable;
        };

        if interest.len() >= 3 {
            let query = format!(
                "{}/places/autosuggest?name={}&radius={}&lon={}&lat={}&limit={}&kinds={}",
                self.base_url,
                urlencoding::encode(destination),
                self.poi_radius_m,
                coords.longitude,
                coords.latitude,
                limit,
                urlencoding::encode(interest)
            );
            self.get_json::<AutosuggestResponse>(&query, key)
                .await
                .map(AutosuggestResponse::into_names)
        } else {
            let query = format!(
                "{}/places/radius?radius={}&lon={}&lat={}&format=json&limit={}",
                self.base_url, self.poi_radius_m, coords.longitude, coords.latitude, limit
            );
            self.get_json::<Vec<RadiusPlace>>(&query, key).await.map(|places| {
                places
                    .into_iter()
                    .map(|p| p.name)
                    .filter(|name| !name.is_empty())
                    .collect()
            })
        }
    }

    /// GET a JSON payload, folding every failure into `Unavailable`.
    /// The API key is appended last so logs never carry it.
    async fn get_json<T: DeserializeOwned>(&self, query: &str, key: &str) -> Fetched<T> {
        debug!("Places API request: {}", query);
        let url = format!("{query}&apikey={key}");

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<T>().await {
                    Ok(value) => Fetched::Ok(value),
                    Err(e) => {
                        warn!("Failed to parse places API response: {}", e);
                        Fetched::Unavailable
                    }
                }
            }
            Ok(response) => {
                warn!("Places API returned {} for {}", response.status(), query);
                Fetched::Unavailable
            }
            Err(e) => {
                warn!("Places API request failed: {}", e);
                Fetched::Unavailable
            }
        }
    }
}

impl std::fmt::Debug for PlacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct AutosuggestResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

impl AutosuggestResponse {
    fn into_names(self) -> Vec<String> {
        self.features
            .into_iter()
            .filter_map(|f| f.properties.name)
            .filter(|name| !name.is_empty())
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: FeatureProperties,
}

#[derive(Debug, Default, Deserialize)]
struct FeatureProperties {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeonameResponse {
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RadiusPlace {
    #[serde(default)]
    name: String,
}
