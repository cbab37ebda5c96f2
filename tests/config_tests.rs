use anyhow::Result;
use daily_push::{
    config::{Config, DEFAULT_CITY, DEFAULT_SEND_URL, DEFAULT_TOKEN_URL, REQUIRED_VARS},
    error::NotifyError,
};

use super::base_vars;

/// Test: Omitting any single required variable names it in the error
#[test]
fn test_each_missing_variable_is_named() {
    for name in REQUIRED_VARS {
        let vars: Vec<(String, String)> =
            base_vars().into_iter().filter(|(k, _)| k != name).collect();

        match Config::from_vars(vars) {
            Err(NotifyError::Config(message)) => {
                assert!(
                    message.contains(name),
                    "Error should name {}, got: {}",
                    name,
                    message
                );
            }
            other => panic!("Expected config error for {}, got: {:?}", name, other),
        }
    }
}

/// Test: All missing variables are reported together
#[test]
fn test_all_missing_variables_reported() {
    let message = match Config::from_vars(Vec::new()) {
        Err(NotifyError::Config(message)) => message,
        other => panic!("Expected config error, got: {:?}", other),
    };

    for name in REQUIRED_VARS {
        assert!(message.contains(name), "Missing {} in: {}", name, message);
    }
}

/// Test: Blank values count as missing
#[test]
fn test_blank_value_counts_as_missing() {
    let mut vars = base_vars();
    vars.retain(|(k, _)| k != "TEMPLATE_ID");
    vars.push(("TEMPLATE_ID".to_string(), "   ".to_string()));

    let result = Config::from_vars(vars);

    assert!(
        matches!(result, Err(NotifyError::Config(ref m)) if m.contains("TEMPLATE_ID")),
        "Blank TEMPLATE_ID should be rejected, got: {:?}",
        result
    );
}

/// Test: Optional settings fall back to production defaults
#[test]
fn test_defaults_applied() -> Result<()> {
    let config = Config::from_vars(base_vars())?;

    assert_eq!(config.app_id, "wx_app");
    assert_eq!(config.app_secret, "wx_secret");
    assert_eq!(config.user_id, "openid_123");
    assert_eq!(config.template_id, "tpl_daily");
    assert_eq!(config.weather_city, DEFAULT_CITY);
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.send_url, DEFAULT_SEND_URL);
    assert_eq!(config.token_timeout_secs, 10);
    assert_eq!(config.weather_timeout_secs, 10);
    assert_eq!(config.send_timeout_secs, 15);
    assert!(config.verbose(), "Verbose logging should default to on");

    Ok(())
}

/// Test: Overrides and DEBUG_MODE are honoured
#[test]
fn test_overrides_applied() -> Result<()> {
    let mut vars = base_vars();
    vars.push(("WEATHER_CITY".to_string(), "Shanghai".to_string()));
    vars.push(("SEND_TIMEOUT_SECS".to_string(), "3".to_string()));
    vars.push(("DEBUG_MODE".to_string(), "False".to_string()));
    vars.push(("UNRELATED".to_string(), "ignored".to_string()));

    let config = Config::from_vars(vars)?;

    assert_eq!(config.weather_city, "Shanghai");
    assert_eq!(config.send_timeout_secs, 3);
    assert!(!config.verbose());

    Ok(())
}

/// Test: Malformed numeric overrides are configuration errors
#[test]
fn test_invalid_timeout_rejected() {
    let mut vars = base_vars();
    vars.push(("TOKEN_TIMEOUT_SECS".to_string(), "soon".to_string()));

    let result = Config::from_vars(vars);

    assert!(matches!(result, Err(NotifyError::Config(_))));
}
