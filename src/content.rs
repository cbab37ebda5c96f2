use tracing::{debug, warn};

use crate::{clients::weather::WeatherClient, models::weather::WeatherInfo};

pub const NEWS: &str = "Another fine day for an automated deployment!";
pub const DISCOUNT: &str =
    "Supermarket: 100 off orders over 199; the Steam summer sale has started!";

#[derive(Debug, Clone)]
pub struct Content {
    pub weather: WeatherInfo,
    pub news: String,
    pub discount: String,
}

/// Live weather for `city`, or the fallback when anything goes wrong.
pub async fn current_weather(client: &WeatherClient, city: &str) -> WeatherInfo {
    match client.fetch_weather(city).await {
        Ok(weather) => {
            debug!(
                city,
                condition = %weather.condition_type,
                high = %weather.high,
                low = %weather.low,
                "Weather fetched"
            );
            weather
        }
        Err(e) => {
            warn!(city, error = %e, "Weather unavailable, using fallback");
            WeatherInfo::fallback(city)
        }
    }
}

// Static until a news source is wired in.
pub fn news() -> String {
    NEWS.to_string()
}

pub fn discount() -> String {
    DISCOUNT.to_string()
}

pub async fn gather(client: &WeatherClient, city: &str) -> Content {
    Content {
        weather: current_weather(client, city).await,
        news: news(),
        discount: discount(),
    }
}
