use chrono::Local;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{
    clients::{weather::WeatherClient, wechat::WeChatClient},
    config::Config,
    content,
    error::NotifyError,
    models::template::TemplateMessage,
};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Target of the push result event, which stays enabled under any filter.
pub const PUSH_RESULT_TARGET: &str = "push_result";

/// Builds the log filter. `rust_log` (the `RUST_LOG` value) replaces the
/// verbose default, but the push result directive is always appended.
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let default_filter = if verbose {
        "warn,daily_push=debug"
    } else {
        "warn,daily_push=info"
    };
    let push_result = format!("{}=info", PUSH_RESULT_TARGET);

    rust_log
        .and_then(|directives| EnvFilter::try_new(format!("{},{}", directives, push_result)).ok())
        .unwrap_or_else(|| EnvFilter::new(format!("{},{}", default_filter, push_result)))
}

/// Installs the global subscriber.
pub fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_target(false)
        .init();
}

pub async fn run(config: &Config) -> Result<String, NotifyError> {
    run_at(config, &current_timestamp()).await
}

/// One full push: token, content, payload, send. Returns the raw send response.
pub async fn run_at(config: &Config, timestamp: &str) -> Result<String, NotifyError> {
    let wechat_client = WeChatClient::new(config)?;
    let weather_client = WeatherClient::new(config)?;

    let access_token = wechat_client
        .fetch_access_token(&config.app_id, &config.app_secret)
        .await?;

    let content = content::gather(&weather_client, &config.weather_city).await;

    let message =
        TemplateMessage::daily_digest(&config.user_id, &config.template_id, &content, timestamp);

    debug!(timestamp, city = %content.weather.city, "Payload assembled");

    wechat_client
        .send_template_message(&access_token, &message)
        .await
}
