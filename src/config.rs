use dotenvy::dotenv;
use serde::Deserialize;

use crate::error::NotifyError;

pub const REQUIRED_VARS: [&str; 4] = ["APP_ID", "APP_SECRET", "USER_ID", "TEMPLATE_ID"];

pub const DEFAULT_TOKEN_URL: &str = "https://api.weixin.qq.com/cgi-bin/token";
pub const DEFAULT_SEND_URL: &str = "https://api.weixin.qq.com/cgi-bin/message/template/send";
pub const DEFAULT_WEATHER_URL: &str = "http://wthrcdn.etouch.cn/weather_mini";
pub const DEFAULT_CITY: &str = "Beijing";

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub app_id: String,
    pub app_secret: String,
    pub user_id: String,
    pub template_id: String,

    #[serde(default = "default_city")]
    pub weather_city: String,

    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_weather_url")]
    pub weather_url: String,
    #[serde(default = "default_send_url")]
    pub send_url: String,

    #[serde(default = "default_token_timeout")]
    pub token_timeout_secs: u64,
    #[serde(default = "default_weather_timeout")]
    pub weather_timeout_secs: u64,
    #[serde(default = "default_send_timeout")]
    pub send_timeout_secs: u64,

    #[serde(default)]
    pub debug_mode: Option<String>,
}

impl Config {
    /// Loads configuration from the process environment, after applying any `.env` file.
    pub fn load() -> Result<Self, NotifyError> {
        dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Builds a config from explicit `(NAME, value)` pairs. Every missing
    /// required variable is reported in a single error.
    pub fn from_vars<I>(vars: I) -> Result<Self, NotifyError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();

        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|name| {
                !vars
                    .iter()
                    .any(|(key, value)| key == name && !value.trim().is_empty())
            })
            .collect();

        if !missing.is_empty() {
            return Err(NotifyError::Config(format!(
                "missing required environment variable(s): {}",
                missing.join(", ")
            )));
        }

        envy::from_iter::<_, Self>(vars).map_err(|e| NotifyError::Config(e.to_string()))
    }

    pub fn verbose(&self) -> bool {
        debug_mode_enabled(self.debug_mode.as_deref())
    }
}

/// Verbose logging is on unless DEBUG_MODE is set to something other than "true".
pub fn debug_mode_enabled(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => v.trim().eq_ignore_ascii_case("true"),
    }
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_weather_url() -> String {
    DEFAULT_WEATHER_URL.to_string()
}

fn default_send_url() -> String {
    DEFAULT_SEND_URL.to_string()
}

fn default_token_timeout() -> u64 {
    10
}

fn default_weather_timeout() -> u64 {
    10
}

fn default_send_timeout() -> u64 {
    15
}
