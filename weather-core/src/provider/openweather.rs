use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::{
    config::ProviderSettings,
    error::{ProviderError, truncate_body},
    model::{CurrentConditions, Forecast, ForecastSample},
};

use super::WeatherProvider;

const CURRENT_ENDPOINT: &str = "weather";
const FORECAST_ENDPOINT: &str = "forecast";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    settings: ProviderSettings,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(settings: ProviderSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { settings, http })
    }

    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str, city: &str) -> Result<T> {
        let url = format!("{}/{endpoint}", self.settings.base_url);
        debug!(%url, city, units = %self.settings.units, lang = %self.settings.language, "requesting");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.settings.api_key.as_str()),
                ("units", self.settings.units.as_str()),
                ("lang", self.settings.language.as_str()),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeatherMap ({endpoint})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeatherMap {endpoint} response body"))?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint,
                status: status.as_u16(),
                body: truncate_body(&body),
            }
            .into());
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse OpenWeatherMap {endpoint} JSON"))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn current(&self, city: &str) -> Result<CurrentConditions> {
        let parsed: OwCurrentResponse = self.get_json(CURRENT_ENDPOINT, city).await?;
        Ok(parsed.into_current()?)
    }

    #[instrument(skip(self))]
    async fn forecast(&self, city: &str) -> Result<Forecast> {
        let parsed: OwForecastResponse = self.get_json(FORECAST_ENDPOINT, city).await?;
        let forecast = parsed.into_forecast()?;
        debug!(samples = forecast.samples.len(), "forecast received");
        Ok(forecast)
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    #[serde(default)]
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    pressure: f64,
    #[serde(default)]
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    coord: OwCoord,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    #[serde(default)]
    visibility: Option<u32>,
    #[serde(default)]
    sys: OwSys,
    #[serde(default)]
    timezone: i64,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    timezone: i64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    #[serde(default)]
    list: Vec<OwForecastEntry>,
}

impl OwCurrentResponse {
    fn into_current(self) -> Result<CurrentConditions, ProviderError> {
        let weather = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedPayload {
                endpoint: CURRENT_ENDPOINT,
                reason: "no weather condition entry".to_string(),
            })?;

        Ok(CurrentConditions {
            location_name: self.name,
            country: self.sys.country,
            condition_main: weather.main,
            description: weather.description,
            icon: weather.icon,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity_pct: self.main.humidity,
            pressure_hpa: self.main.pressure,
            wind_speed: self.wind.speed,
            visibility_m: self.visibility,
            latitude: self.coord.lat,
            longitude: self.coord.lon,
            sunrise_utc: self.sys.sunrise,
            sunset_utc: self.sys.sunset,
            observed_at_utc: self.dt,
            timezone_offset: self.timezone,
        })
    }
}

impl OwForecastResponse {
    fn into_forecast(self) -> Result<Forecast, ProviderError> {
        let samples = self
            .list
            .into_iter()
            .map(|entry| {
                let weather = entry.weather.into_iter().next().ok_or_else(|| {
                    ProviderError::MalformedPayload {
                        endpoint: FORECAST_ENDPOINT,
                        reason: format!("entry at {} has no weather condition", entry.dt),
                    }
                })?;

                Ok(ForecastSample {
                    timestamp_utc: entry.dt,
                    temperature: entry.main.temp,
                    wind_speed: entry.wind.speed,
                    condition_main: weather.main,
                    condition_icon: weather.icon,
                })
            })
            .collect::<Result<Vec<_>, ProviderError>>()?;

        Ok(Forecast {
            city_name: self.city.name,
            country: self.city.country,
            timezone_offset: self.city.timezone,
            samples,
        })
    }
}
