//! Configuration management for the `Travel Buddy` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings. Both external
//! credentials are optional: their absence switches the corresponding
//! fetcher into permanent fallback mode instead of failing requests.

use crate::TravelBuddyError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `Travel Buddy` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelBuddyConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Places-lookup API configuration
    #[serde(default)]
    pub places: PlacesConfig,
    /// Text-generation model configuration
    #[serde(default)]
    pub model: ModelConfig,
    /// Default planning settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Places-lookup API (OpenTripMap) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// API key; without it the places fetcher reports every lookup as unavailable
    pub api_key: Option<String>,
    /// Base URL for the places API
    #[serde(default = "default_places_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Search radius for points of interest, in meters
    #[serde(default = "default_poi_radius")]
    pub poi_radius_m: u32,
}

/// Text-generation model API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// API token; without it the model fetcher reports every prompt as unavailable
    pub api_token: Option<String>,
    /// Base URL of the inference endpoint
    #[serde(default = "default_model_base_url")]
    pub base_url: String,
    /// Model identifier appended to the base URL
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Generation length cap
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
}

/// Default planning settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Number of destinations a suggestion response contains
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,
}

// Default value functions
fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_places_base_url() -> String {
    "https://api.opentripmap.com/0.1/en".to_string()
}

fn default_model_base_url() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_model_id() -> String {
    "google/flan-t5-large".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_poi_radius() -> u32 {
    20_000
}

fn default_max_new_tokens() -> u32 {
    100
}

fn default_suggestion_count() -> usize {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_places_base_url(),
            timeout_seconds: default_timeout(),
            poi_radius_m: default_poi_radius(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: default_model_base_url(),
            model_id: default_model_id(),
            timeout_seconds: default_timeout(),
            max_new_tokens: default_max_new_tokens(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            suggestion_count: default_suggestion_count(),
        }
    }
}

impl Default for TravelBuddyConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            places: PlacesConfig::default(),
            model: ModelConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl TravelBuddyConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRAVEL_BUDDY_PLACES__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("TRAVEL_BUDDY")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TravelBuddyConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travel-buddy").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.places.timeout_seconds == 0 || self.places.timeout_seconds > 120 {
            return Err(TravelBuddyError::config(
                "Places API timeout must be between 1 and 120 seconds",
            )
            .into());
        }

        if self.model.timeout_seconds == 0 || self.model.timeout_seconds > 120 {
            return Err(TravelBuddyError::config(
                "Model API timeout must be between 1 and 120 seconds",
            )
            .into());
        }

        if self.places.poi_radius_m == 0 || self.places.poi_radius_m > 100_000 {
            return Err(TravelBuddyError::config(
                "POI search radius must be between 1 and 100000 meters",
            )
            .into());
        }

        // The padding pool must be able to fill a short suggestion list
        let pool = crate::knowledge::FALLBACK_DESTINATIONS.len();
        if self.defaults.suggestion_count == 0 || self.defaults.suggestion_count > pool {
            return Err(TravelBuddyError::config(format!(
                "Suggestion count must be between 1 and {pool}"
            ))
            .into());
        }

        for (name, url) in [
            ("places", &self.places.base_url),
            ("model", &self.model.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TravelBuddyError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        if let Some(key) = &self.places.api_key
            && key.is_empty()
        {
            return Err(TravelBuddyError::config(
                "Places API key cannot be empty if provided. Either remove it or provide a valid key.",
            )
            .into());
        }

        if let Some(token) = &self.model.api_token
            && token.is_empty()
        {
            return Err(TravelBuddyError::config(
                "Model API token cannot be empty if provided. Either remove it or provide a valid token.",
            )
            .into());
        }

        Ok(())
    }
}
