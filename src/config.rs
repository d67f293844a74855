//! Configuration management for the `TourHub` application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings. The upstream
//! service key and the map widget app key are credentials and only ever
//! enter the process through configuration, never through source.

use crate::TourHubError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TourHub` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourHubConfig {
    /// Tour service API configuration
    pub api: ApiConfig,
    /// Map widget configuration
    pub map: MapConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Default query and output settings
    pub defaults: DefaultsConfig,
}

/// Tour service API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Service key issued by the open-data portal (decoded form)
    #[serde(default)]
    pub service_key: String,
    /// Base URL for the tour service
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Mobile OS tag sent with every request
    #[serde(default = "default_mobile_os")]
    pub mobile_os: String,
    /// Mobile app tag sent with every request
    #[serde(default = "default_mobile_app")]
    pub mobile_app: String,
    /// Request timeout in seconds
    #[serde(default = "default_api_timeout")]
    pub timeout_seconds: u32,
    /// Fixed page size for list requests
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Concurrent page requests (1 = fully sequential)
    #[serde(default = "default_fetch_concurrency")]
    pub fetch_concurrency: u32,
}

/// Map widget settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// App key for the map widget (optional; markers are skipped without one)
    pub app_key: Option<String>,
    /// Initial map center latitude
    #[serde(default = "default_center_latitude")]
    pub center_latitude: f64,
    /// Initial map center longitude
    #[serde(default = "default_center_longitude")]
    pub center_longitude: f64,
    /// Initial zoom level
    #[serde(default = "default_zoom_level")]
    pub zoom_level: u8,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default query and output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Area code for both queries
    #[serde(default = "default_area_code")]
    pub area_code: u32,
    /// Content type id (15 = festivals/events)
    #[serde(default = "default_content_type_id")]
    pub content_type_id: u32,
    /// Major category code
    #[serde(default = "default_cat1")]
    pub cat1: Option<String>,
    /// Middle category code
    #[serde(default = "default_cat2")]
    pub cat2: Option<String>,
    /// Minor category code
    #[serde(default)]
    pub cat3: Option<String>,
    /// How far forward the festival event window reaches, in days
    #[serde(default = "default_event_window_days")]
    pub event_window_days: u32,
    /// Output format for the delivered list (text or json)
    #[serde(default = "default_output_format")]
    pub output_format: String,
}

// Default value functions
fn default_api_base_url() -> String {
    "https://apis.data.go.kr/B551011/KorService1".to_string()
}

fn default_mobile_os() -> String {
    "ETC".to_string()
}

fn default_mobile_app() -> String {
    "TourHub".to_string()
}

fn default_api_timeout() -> u32 {
    10
}

fn default_page_size() -> u32 {
    crate::tour::DEFAULT_PAGE_SIZE
}

fn default_fetch_concurrency() -> u32 {
    1
}

fn default_center_latitude() -> f64 {
    37.5665
}

fn default_center_longitude() -> f64 {
    126.978
}

fn default_zoom_level() -> u8 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_area_code() -> u32 {
    1
}

fn default_content_type_id() -> u32 {
    15
}

fn default_cat1() -> Option<String> {
    Some("A02".to_string())
}

fn default_cat2() -> Option<String> {
    Some("A0207".to_string())
}

fn default_event_window_days() -> u32 {
    90
}

fn default_output_format() -> String {
    "text".to_string()
}

impl Default for TourHubConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                service_key: String::new(),
                base_url: default_api_base_url(),
                mobile_os: default_mobile_os(),
                mobile_app: default_mobile_app(),
                timeout_seconds: default_api_timeout(),
                page_size: default_page_size(),
                fetch_concurrency: default_fetch_concurrency(),
            },
            map: MapConfig {
                app_key: None,
                center_latitude: default_center_latitude(),
                center_longitude: default_center_longitude(),
                zoom_level: default_zoom_level(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
            defaults: DefaultsConfig {
                area_code: default_area_code(),
                content_type_id: default_content_type_id(),
                cat1: default_cat1(),
                cat2: default_cat2(),
                cat3: None,
                event_window_days: default_event_window_days(),
                output_format: default_output_format(),
            },
        }
    }
}

impl TourHubConfig {
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

        // Environment variable overrides, e.g. TOURHUB_API__SERVICE_KEY
        builder = builder.add_source(
            Environment::with_prefix("TOURHUB")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TourHubConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tourhub").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_credentials()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate credentials
    pub fn validate_credentials(&self) -> Result<()> {
        if self.api.service_key.is_empty() {
            return Err(TourHubError::config(
                "Tour service key is required. Set api.service_key in the config file or the TOURHUB_API__SERVICE_KEY environment variable."
            ).into());
        }

        if self.api.service_key.len() < 8 {
            return Err(TourHubError::config(
                "Tour service key appears to be invalid (too short). Please check your key.",
            )
            .into());
        }

        if self.api.service_key.len() > 200 {
            return Err(TourHubError::config(
                "Tour service key appears to be invalid (too long). Please check your key.",
            )
            .into());
        }

        if let Some(app_key) = &self.map.app_key {
            if app_key.is_empty() {
                return Err(TourHubError::config(
                    "Map app key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.api.timeout_seconds == 0 || self.api.timeout_seconds > 300 {
            return Err(
                TourHubError::config("Request timeout must be between 1 and 300 seconds").into(),
            );
        }

        if self.api.page_size == 0 || self.api.page_size > 100 {
            return Err(TourHubError::config("Page size must be between 1 and 100").into());
        }

        if self.api.fetch_concurrency == 0 || self.api.fetch_concurrency > 8 {
            return Err(TourHubError::config("Fetch concurrency must be between 1 and 8").into());
        }

        if !(-90.0..=90.0).contains(&self.map.center_latitude) {
            return Err(
                TourHubError::config("Map center latitude must be between -90 and 90").into(),
            );
        }

        if !(-180.0..=180.0).contains(&self.map.center_longitude) {
            return Err(
                TourHubError::config("Map center longitude must be between -180 and 180").into(),
            );
        }

        if self.map.zoom_level == 0 || self.map.zoom_level > 14 {
            return Err(TourHubError::config("Map zoom level must be between 1 and 14").into());
        }

        if self.defaults.event_window_days > 365 {
            return Err(TourHubError::config("Event window cannot exceed 365 days").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TourHubError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TourHubError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let valid_output_formats = ["text", "json"];
        if !valid_output_formats.contains(&self.defaults.output_format.as_str()) {
            return Err(TourHubError::config(format!(
                "Invalid output format '{}'. Must be one of: {}",
                self.defaults.output_format,
                valid_output_formats.join(", ")
            ))
            .into());
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(
                TourHubError::config("Tour service base URL must be a valid HTTP or HTTPS URL")
                    .into(),
            );
        }

        Ok(())
    }
}
