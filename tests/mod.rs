mod config_tests;

use std::{
    io,
    sync::{Arc, Mutex},
};

use anyhow::Result;
use daily_push::{config::Config, utils::log_filter};
use tracing::subscriber::DefaultGuard;

pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/weather_mini";

pub fn base_vars() -> Vec<(String, String)> {
    vec![
        ("APP_ID".to_string(), "wx_app".to_string()),
        ("APP_SECRET".to_string(), "wx_secret".to_string()),
        ("USER_ID".to_string(), "openid_123".to_string()),
        ("TEMPLATE_ID".to_string(), "tpl_daily".to_string()),
    ]
}

/// Config with every endpoint pointed at `server_uri`, plus any overrides.
pub fn config_for(server_uri: &str, overrides: &[(&str, &str)]) -> Result<Config> {
    let mut vars = base_vars();
    vars.push(("TOKEN_URL".to_string(), format!("{}/cgi-bin/token", server_uri)));
    vars.push(("WEATHER_URL".to_string(), format!("{}/weather_mini", server_uri)));
    vars.push((
        "SEND_URL".to_string(),
        format!("{}/cgi-bin/message/template/send", server_uri),
    ));

    for (key, value) in overrides {
        vars.retain(|(k, _)| k != key);
        vars.push((key.to_string(), value.to_string()));
    }

    Ok(Config::from_vars(vars)?)
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes this thread's events through the production filter into a buffer.
/// Logs are captured until the returned guard is dropped.
pub fn capture_logs(verbose: bool, rust_log: Option<&str>) -> (LogBuffer, DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    (buffer, tracing::subscriber::set_default(subscriber))
}
