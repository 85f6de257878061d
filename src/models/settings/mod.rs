//! Settings model for the prayer clock.
//!
//! Everything here is read once at startup from `config.toml` and never
//! changes while the window is open.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Astronomical convention used for the Fajr and Isha twilight angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    MuslimWorldLeague,
    Egyptian,
    Karachi,
    UmmAlQura,
    Dubai,
    MoonsightingCommittee,
    NorthAmerica,
    Kuwait,
    Qatar,
    Singapore,
    Tehran,
    Turkey,
}

impl Default for CalculationMethod {
    fn default() -> Self {
        Self::Kuwait
    }
}

/// Juristic convention for the Asr shadow length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisprudence {
    /// Shafi'i, Maliki and Hanbali: shadow equals object length
    Shafi,
    /// Hanafi: shadow equals twice the object length
    Hanafi,
}

impl Default for Jurisprudence {
    fn default() -> Self {
        Self::Shafi
    }
}

/// Location and calculation conventions for the prayer schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub calculation_method: CalculationMethod,
    pub jurisprudence: Jurisprudence,
    /// IANA zone name, e.g. "Asia/Kuwait"
    pub time_zone: String,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            latitude: 29.3117,
            longitude: 47.4818,
            calculation_method: CalculationMethod::default(),
            jurisprudence: Jurisprudence::default(),
            time_zone: "Asia/Kuwait".to_string(),
        }
    }
}

impl GeoConfig {
    /// Validate coordinates and resolve the time zone.
    pub fn validate(&self) -> Result<Tz, ConfigurationError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ConfigurationError::InvalidLatitude(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ConfigurationError::InvalidLongitude(self.longitude));
        }
        self.time_zone()
    }

    pub fn time_zone(&self) -> Result<Tz, ConfigurationError> {
        self.time_zone
            .trim()
            .parse::<Tz>()
            .map_err(|_| ConfigurationError::UnknownTimeZone(self.time_zone.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub decorated: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Athan App".to_string(),
            width: 300.0,
            height: 410.0,
            decorated: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shift applied to the Gregorian date before Hijri conversion, for
    /// regions whose moon sighting differs from Umm al-Qura
    pub hijri_offset_days: i32,
    pub geo: GeoConfig,
    pub window: WindowSettings,
}
