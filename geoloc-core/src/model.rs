use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};

use crate::error::ResolveError;

/// Current conditions at a resolved place. Temperatures are in °F.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub place: String,
    pub temperature: i64,
    pub feels_like: i64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub weather_condition: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub weather: WeatherSnapshot,
}

/// Provider response after decoding, before the US check and unit conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub temperature_k: f64,
    pub feels_like_k: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub condition: String,
}

impl Observation {
    pub fn into_location(self) -> LocationResult {
        let weather = WeatherSnapshot {
            place: self.place.clone(),
            temperature: kelvin_to_fahrenheit(self.temperature_k),
            feels_like: kelvin_to_fahrenheit(self.feels_like_k),
            humidity: self.humidity,
            wind_speed: self.wind_speed,
            weather_condition: self.condition,
            country: self.country.clone(),
        };

        LocationResult {
            place: self.place,
            latitude: self.latitude,
            longitude: self.longitude,
            country: self.country,
            weather,
        }
    }
}

/// Result of resolving one input string.
#[derive(Debug)]
pub enum Outcome {
    Resolved(LocationResult),
    Rejected(ResolveError),
    /// Anything that is not a known rejection, e.g. a malformed base URL or a
    /// transport failure. Carried as-is rather than turned into a message.
    Failed(anyhow::Error),
}

impl Outcome {
    pub fn location(&self) -> Option<&LocationResult> {
        match self {
            Outcome::Resolved(loc) => Some(loc),
            _ => None,
        }
    }

    pub fn rejection(&self) -> Option<&ResolveError> {
        match self {
            Outcome::Rejected(err) => Some(err),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&anyhow::Error> {
        match self {
            Outcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResolveError> for Outcome {
    fn from(err: ResolveError) -> Self {
        Outcome::Rejected(err)
    }
}

/// Resolved entries serialize as objects, rejections as their message string,
/// failures as `{ "error": "<context chain>" }`.
impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Resolved(loc) => loc.serialize(serializer),
            Outcome::Rejected(err) => serializer.collect_str(err),
            Outcome::Failed(err) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", &format!("{err:#}"))?;
                map.end()
            }
        }
    }
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> i64 {
    ((kelvin - 273.15) * (9.0 / 5.0) + 32.0).round() as i64
}
