use serde::Deserialize;

pub const WEATHER_OK_STATUS: i64 = 1000;
pub const UNKNOWN_CONDITION: &str = "unknown";
pub const UNKNOWN_TEMPERATURE: &str = "-";

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub status: i64,
    pub desc: Option<String>,
    pub data: Option<WeatherData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherData {
    #[serde(default)]
    pub forecast: Vec<Forecast>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub high: String,
    pub low: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherInfo {
    pub city: String,
    pub condition_type: String,

    pub high: String,
    pub low: String,
}

impl WeatherInfo {
    pub fn from_forecast(city: &str, forecast: Forecast) -> Self {
        Self {
            city: city.to_string(),
            condition_type: forecast.condition_type,
            high: forecast.high,
            low: forecast.low,
        }
    }

    pub fn fallback(city: &str) -> Self {
        Self {
            city: city.to_string(),
            condition_type: UNKNOWN_CONDITION.to_string(),
            high: UNKNOWN_TEMPERATURE.to_string(),
            low: UNKNOWN_TEMPERATURE.to_string(),
        }
    }

    /// "<type> <low> <high>", the value shown in the weather template field.
    pub fn summary(&self) -> String {
        format!("{} {} {}", self.condition_type, self.low, self.high)
    }
}
