// ABOUTME: Tests for Config::from_env
// ABOUTME: Environment-mutating tests run serially

use adstudio_config::constants::*;
use adstudio_config::{Config, ConfigError};
use serial_test::serial;
use std::env;
use std::time::Duration;

fn clear_env() {
    for name in [
        ADSTUDIO_API_BASE,
        ADSTUDIO_API_ORIGIN,
        ADSTUDIO_HTTP_TIMEOUT_SECS,
        ADSTUDIO_DISCARD_STALE_RESPONSES,
        ADSTUDIO_TICK_RATE_MS,
        ADSTUDIO_LOG_FILE,
    ] {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.api_base, adstudio_config::build_time_api_base());
    assert_eq!(config.api_origin, "http://localhost:8000");
    assert_eq!(config.http_timeout, None);
    assert!(!config.discard_stale_responses);
    assert_eq!(config.tick_rate_ms, 250);
    assert_eq!(config.log_file, None);
}

#[test]
#[serial]
fn test_config_from_env_with_custom_values() {
    clear_env();
    env::set_var(ADSTUDIO_API_BASE, "https://ia-crm-auto.vercel.app");
    env::set_var(ADSTUDIO_HTTP_TIMEOUT_SECS, "30");
    env::set_var(ADSTUDIO_DISCARD_STALE_RESPONSES, "true");
    env::set_var(ADSTUDIO_TICK_RATE_MS, "100");
    env::set_var(ADSTUDIO_LOG_FILE, "/tmp/adstudio.log");

    let config = Config::from_env().unwrap();

    assert_eq!(config.api_base, "https://ia-crm-auto.vercel.app");
    assert_eq!(config.http_timeout, Some(Duration::from_secs(30)));
    assert!(config.discard_stale_responses);
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(
        config.log_file.as_deref(),
        Some(std::path::Path::new("/tmp/adstudio.log"))
    );
    assert_eq!(
        config.api_base_url().unwrap(),
        "https://ia-crm-auto.vercel.app"
    );

    clear_env();
}

#[test]
#[serial]
fn test_blank_api_base_falls_back_to_default() {
    clear_env();
    env::set_var(ADSTUDIO_API_BASE, "   ");

    let config = Config::from_env().unwrap();
    assert_eq!(config.api_base, adstudio_config::build_time_api_base());

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_timeout() {
    clear_env();
    env::set_var(ADSTUDIO_HTTP_TIMEOUT_SECS, "soon");

    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::InvalidNumber { .. })));

    env::set_var(ADSTUDIO_HTTP_TIMEOUT_SECS, "0");
    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::Zero { .. })));

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_bool() {
    clear_env();
    env::set_var(ADSTUDIO_DISCARD_STALE_RESPONSES, "sometimes");

    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::InvalidBool { .. })));

    clear_env();
}

#[test]
#[serial]
fn test_config_zero_tick_rate() {
    clear_env();
    env::set_var(ADSTUDIO_TICK_RATE_MS, "0");

    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::Zero { .. })));

    clear_env();
}
