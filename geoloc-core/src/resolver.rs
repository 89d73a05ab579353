//! Batch resolution of raw location strings.
//!
//! Inputs are deduplicated by exact match, then classified and looked up one
//! at a time so outcomes come back in first-occurrence order.

use std::collections::HashSet;
use tracing::{debug, info};

use crate::{
    Config,
    error::{ProviderError, ResolveError},
    model::{Observation, Outcome},
    provider::{WeatherProvider, provider_from_config},
    query::LocationQuery,
};

#[derive(Debug)]
pub struct LocationResolver {
    provider: Box<dyn WeatherProvider>,
}

impl LocationResolver {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(provider_from_config(config))
    }

    /// Resolve every distinct input. Never fails as a whole; an empty list
    /// yields a single [`ResolveError::NoInput`].
    pub async fn resolve_all<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<Outcome> {
        if inputs.is_empty() {
            return vec![Outcome::Rejected(ResolveError::NoInput)];
        }

        let mut outcomes = Vec::with_capacity(inputs.len());
        for input in dedupe_preserving_order(inputs) {
            outcomes.push(self.resolve_one(input).await);
        }
        outcomes
    }

    pub async fn resolve_one(&self, input: &str) -> Outcome {
        let query = match LocationQuery::classify(input) {
            Ok(query) => query,
            Err(err) => {
                debug!(input, "{err}");
                return Outcome::Rejected(err);
            }
        };

        info!(input, "fetching geolocation");
        let outcome = into_outcome(input, self.provider.current_conditions(&query).await);

        match &outcome {
            Outcome::Resolved(loc) => info!(
                input,
                place = %loc.place,
                lat = loc.latitude,
                lon = loc.longitude,
                "resolved"
            ),
            Outcome::Rejected(err) => debug!(input, "{err}"),
            Outcome::Failed(err) => debug!(input, "lookup failed: {err:#}"),
        }

        outcome
    }
}

fn dedupe_preserving_order<S: AsRef<str>>(inputs: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    inputs
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| seen.insert(*s))
        .collect()
}

fn into_outcome(input: &str, reply: Result<Observation, ProviderError>) -> Outcome {
    match reply {
        Ok(obs) if obs.country != "US" => Outcome::Rejected(ResolveError::CountryMismatch {
            input: input.to_owned(),
            country: obs.country,
        }),
        Ok(obs) => Outcome::Resolved(obs.into_location()),
        Err(ProviderError::Api { code, message }) => {
            Outcome::Rejected(ResolveError::Api { code, message })
        }
        Err(ProviderError::Status { status, reason }) => {
            Outcome::Rejected(ResolveError::HttpStatus { status, reason })
        }
        Err(ProviderError::Other(err)) => Outcome::Failed(err),
    }
}
