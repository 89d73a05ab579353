use crate::{
    Config, config::API_KEY_ENV, error::ProviderError, model::Observation, query::LocationQuery,
};
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::warn;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// A geocoding-and-weather backend answering one location per call.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_conditions(
        &self,
        query: &LocationQuery,
    ) -> Result<Observation, ProviderError>;
}

/// Construct the provider described by `config`.
///
/// Neither the key nor the URL is checked here; problems surface per location.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    if config.api_key.is_none() {
        warn!(
            "No API key configured; the provider will reject lookups. \
             Run `geoloc configure` or set the {API_KEY_ENV} environment variable."
        );
    }

    Box::new(OpenWeatherProvider::with_base_url(
        config.api_key.clone(),
        config.base_url.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_accepts_missing_api_key() {
        let provider = provider_from_config(&Config::default());
        assert!(format!("{provider:?}").contains("api_key: None"));
    }

    #[test]
    fn provider_from_config_accepts_unvalidated_base_url() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            base_url: "LOL".into(),
        };

        let provider = provider_from_config(&cfg);
        assert!(format!("{provider:?}").contains("base_url: \"LOL\""));
    }
}
