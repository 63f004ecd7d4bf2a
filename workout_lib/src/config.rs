use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_TILE_URL.into(),
            attribution: DEFAULT_TILE_ATTRIBUTION.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub location_unavailable: String,
    pub invalid_input: String,
    pub form_not_open: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            location_unavailable: "Cannot get your current location".into(),
            invalid_input: "Inputs have to be positive numbers".into(),
            form_not_open: "Click on the map to pick a location first".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationRules {
    /// Off by default: cycling elevation is only required to be a number.
    pub require_positive_elevation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub initial_zoom: f64,
    pub focus_zoom: f64,
    pub pan_duration_secs: f64,
    /// Fits a browser timeout, so it is bounded by `u32`.
    pub layout_restore_delay_ms: u32,
    pub tiles: TileConfig,
    pub messages: Messages,
    pub validation: ValidationRules,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_zoom: 15.,
            focus_zoom: 17.,
            pan_duration_secs: 1.,
            layout_restore_delay_ms: 1000,
            tiles: TileConfig::default(),
            messages: Messages::default(),
            validation: ValidationRules::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        for (name, zoom) in [("initial_zoom", self.initial_zoom), ("focus_zoom", self.focus_zoom)] {
            if !zoom.is_finite() || zoom < 0. {
                return Err(ConfigError::Invalid(format!("{name} must be a non-negative number, got {zoom}")));
            }
        }

        if !self.pan_duration_secs.is_finite() || self.pan_duration_secs < 0. {
            return Err(ConfigError::Invalid(format!("pan_duration_secs must be a non-negative number, got {}", self.pan_duration_secs)));
        }

        if self.tiles.url_template.is_empty() {
            return Err(ConfigError::Invalid("tiles.url_template is empty".into()));
        }

        Ok(())
    }

    pub fn layout_restore_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.layout_restore_delay_ms))
    }
}
