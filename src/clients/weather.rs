use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::{
    config::Config,
    error::NotifyError,
    models::weather::{WEATHER_OK_STATUS, WeatherInfo, WeatherResponse},
};

pub struct WeatherClient {
    http_client: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(config: &Config) -> Result<Self, NotifyError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.weather_timeout_secs))
            .build()?;

        debug!(base_url = %config.weather_url, "Weather client initialized");

        Ok(Self {
            http_client,
            base_url: config.weather_url.clone(),
        })
    }

    /// Fetches today's forecast for `city`. Every failure is reported as
    /// [`NotifyError::Weather`]; callers decide whether to fall back.
    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherInfo, NotifyError> {
        debug!(city, "Fetching weather");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("city", city)])
            .send()
            .await
            .map_err(|e| NotifyError::Weather(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Weather(format!(
                "Weather service returned status {}",
                status
            )));
        }

        let body: WeatherResponse = response
            .json()
            .await
            .map_err(|e| NotifyError::Weather(format!("Failed to parse weather JSON: {}", e)))?;

        if body.status != WEATHER_OK_STATUS {
            return Err(NotifyError::Weather(format!(
                "Unexpected weather status {} ({})",
                body.status,
                body.desc.as_deref().unwrap_or("no description")
            )));
        }

        let today = body
            .data
            .and_then(|data| data.forecast.into_iter().next())
            .ok_or_else(|| NotifyError::Weather("Forecast list is empty".to_string()))?;

        Ok(WeatherInfo::from_forecast(city, today))
    }
}
