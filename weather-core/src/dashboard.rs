//! Assembly of everything a presentation layer needs for one city.

use anyhow::Result;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;

use crate::{
    aggregate::{aggregate, local_time},
    classify::{ThemeCategory, classify},
    error::ProviderError,
    model::{CurrentConditions, DaySummary, Forecast, Units},
    provider::WeatherProvider,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub units: Units,
    pub current: CurrentConditions,
    pub theme: ThemeCategory,
    pub daily: Vec<DaySummary>,
    pub sunrise_local: Option<NaiveDateTime>,
    pub sunset_local: Option<NaiveDateTime>,
}

impl Dashboard {
    pub fn build(units: Units, current: CurrentConditions, forecast: &Forecast) -> Self {
        let theme = classify(Some(current.condition_main.as_str()));
        let daily = aggregate(&forecast.samples, forecast.timezone_offset);
        let sunrise_local = local_time(current.sunrise_utc, current.timezone_offset);
        let sunset_local = local_time(current.sunset_utc, current.timezone_offset);

        Self {
            units,
            current,
            theme,
            daily,
            sunrise_local,
            sunset_local,
        }
    }
}

/// Fetch current conditions and forecast for `city` concurrently and build
/// the dashboard.
pub async fn load_dashboard(
    provider: &dyn WeatherProvider,
    city: &str,
    units: Units,
) -> Result<Dashboard> {
    let city = city.trim();
    if city.is_empty() {
        return Err(ProviderError::EmptyCity.into());
    }

    info!(city, "loading weather");
    let (current, forecast) = tokio::try_join!(provider.current(city), provider.forecast(city))?;

    let dashboard = Dashboard::build(units, current, &forecast);
    info!(
        city,
        theme = %dashboard.theme,
        days = dashboard.daily.len(),
        "weather loaded"
    );

    Ok(dashboard)
}
