//! Core library for the `weather` dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Condition classification and daily forecast aggregation
//! - Abstraction over the OpenWeatherMap provider
//! - Shared domain models (current conditions, forecast samples, day summaries)
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod provider;

pub use aggregate::aggregate;
pub use classify::{ThemeCategory, classify};
pub use config::{Config, ProviderSettings};
pub use dashboard::{Dashboard, load_dashboard};
pub use error::ProviderError;
pub use model::{CurrentConditions, DaySummary, Forecast, ForecastSample, Units};
pub use provider::{WeatherProvider, provider_from_config};
