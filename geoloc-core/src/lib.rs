//! Core library for the `geoloc` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Classification of raw location strings (city/state or ZIP)
//! - Abstraction over the geocoding/weather provider
//! - The batch resolver and its per-entry outcomes
//!
//! It is used by `geoloc-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod query;
pub mod resolver;

pub use config::Config;
pub use error::{ProviderError, ResolveError};
pub use model::{LocationResult, Observation, Outcome, WeatherSnapshot, kelvin_to_fahrenheit};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use query::LocationQuery;
pub use resolver::LocationResolver;
