use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to obtain access token: {body}")]
    Authentication { body: String },

    #[error("Weather unavailable: {0}")]
    Weather(String),

    #[error("Failed to send template message")]
    Dispatch(#[source] reqwest::Error),

    #[error("HTTP client error")]
    Http(#[from] reqwest::Error),
}
