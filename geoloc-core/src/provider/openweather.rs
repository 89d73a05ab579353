use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::fmt;
use tracing::debug;

use crate::{error::ProviderError, model::Observation, query::LocationQuery};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    /// Sent as `appid` when present; without it the provider answers 401.
    api_key: Option<String>,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    fn endpoint(&self) -> anyhow::Result<Url> {
        Url::parse(&self.base_url).with_context(|| format!("Invalid URL: {}", self.base_url))
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    coord: OwCoord,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

/// `cod` is a number for some errors (401) and a string for others ("404").
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OwCode {
    Number(i64),
    Text(String),
}

impl fmt::Display for OwCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwCode::Number(n) => write!(f, "{n}"),
            OwCode::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    cod: OwCode,
    message: String,
}

impl TryFrom<OwCurrentResponse> for Observation {
    type Error = anyhow::Error;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self, Self::Error> {
        let condition = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| anyhow!("OpenWeather response contained no weather conditions"))?;

        Ok(Observation {
            place: parsed.name,
            latitude: parsed.coord.lat,
            longitude: parsed.coord.lon,
            country: parsed.sys.country,
            temperature_k: parsed.main.temp,
            feels_like_k: parsed.main.feels_like,
            humidity: parsed.main.humidity,
            wind_speed: parsed.wind.speed,
            condition,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_conditions(
        &self,
        query: &LocationQuery,
    ) -> Result<Observation, ProviderError> {
        let url = self.endpoint()?;
        let (param, value) = query.query_param();

        debug!(%url, param, "requesting current conditions");

        let mut request = self.http.get(url).query(&[(param, value.as_str())]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("appid", key.as_str())]);
        }

        let res = request
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        if status != StatusCode::OK {
            return Err(failure_from_response(status, &body));
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        Ok(Observation::try_from(parsed)?)
    }
}

fn failure_from_response(status: StatusCode, body: &str) -> ProviderError {
    match serde_json::from_str::<OwErrorBody>(body) {
        Ok(err) => ProviderError::Api {
            code: err.cod.to_string(),
            message: err.message,
        },
        Err(_) => {
            debug!(
                status = status.as_u16(),
                body = %truncate_body(body),
                "unstructured error response"
            );
            ProviderError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }
        }
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
