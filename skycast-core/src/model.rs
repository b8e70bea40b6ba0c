use serde::{Deserialize, Serialize};

/// Current conditions for one location, as returned by WeatherAPI.com's
/// `current.json` endpoint. Field names match the wire format, so a decode
/// followed by an encode reproduces the original document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    /// Scheme-relative URL fragment, e.g. `//cdn.weatherapi.com/...`.
    pub icon: String,
    pub code: i64,
}

/// Display unit for temperatures. The API reports both scales, so switching
/// units is a field selection, not a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
        }
    }
}

impl CurrentWeather {
    /// "City, Country" label for display.
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.location.name, self.location.country)
    }
}

impl Current {
    pub fn temperature(&self, unit: TempUnit) -> f64 {
        match unit {
            TempUnit::Celsius => self.temp_c,
            TempUnit::Fahrenheit => self.temp_f,
        }
    }

    pub fn feels_like(&self, unit: TempUnit) -> f64 {
        match unit {
            TempUnit::Celsius => self.feelslike_c,
            TempUnit::Fahrenheit => self.feelslike_f,
        }
    }
}

impl Condition {
    /// The API serves icons as scheme-relative paths; they must be resolved
    /// against `https:` before use.
    pub fn icon_url(&self) -> String {
        if self.icon.starts_with("//") {
            format!("https:{}", self.icon)
        } else {
            self.icon.clone()
        }
    }
}
