use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use std::str::FromStr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    fn parse_as<T>(var: &str, raw: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    }

    let env = parse_environment(&or_default("ICY_ENV", "development"))?;
    let bind_addr: SocketAddr = parse_as("ICY_BIND_ADDR", &or_default("ICY_BIND_ADDR", "0.0.0.0:8000"))?;
    let log_level = or_default("ICY_LOG_LEVEL", "info");
    let creators_path = lookup("ICY_CREATORS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let connector_latency_ms: u64 = parse_as(
        "ICY_CONNECTOR_LATENCY_MS",
        &or_default("ICY_CONNECTOR_LATENCY_MS", "250"),
    )?;
    let connector_max_retries: u32 = parse_as(
        "ICY_CONNECTOR_MAX_RETRIES",
        &or_default("ICY_CONNECTOR_MAX_RETRIES", "2"),
    )?;
    let connector_retry_backoff_ms: u64 = parse_as(
        "ICY_CONNECTOR_RETRY_BACKOFF_MS",
        &or_default("ICY_CONNECTOR_RETRY_BACKOFF_MS", "100"),
    )?;
    let discovery_step_delay_ms: u64 = parse_as(
        "ICY_DISCOVERY_STEP_DELAY_MS",
        &or_default("ICY_DISCOVERY_STEP_DELAY_MS", "500"),
    )?;
    let discovery_max_results: usize = parse_as(
        "ICY_DISCOVERY_MAX_RESULTS",
        &or_default("ICY_DISCOVERY_MAX_RESULTS", "200"),
    )?;
    if discovery_max_results == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ICY_DISCOVERY_MAX_RESULTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let task_retention_secs: u64 = parse_as(
        "ICY_TASK_RETENTION_SECS",
        &or_default("ICY_TASK_RETENTION_SECS", "3600"),
    )?;
    let rate_limit_per_minute: usize = parse_as(
        "ICY_RATE_LIMIT_PER_MINUTE",
        &or_default("ICY_RATE_LIMIT_PER_MINUTE", "120"),
    )?;
    let send_success_rate: f64 = parse_as(
        "ICY_SEND_SUCCESS_RATE",
        &or_default("ICY_SEND_SUCCESS_RATE", "0.75"),
    )?;
    if !(0.0..=1.0).contains(&send_success_rate) {
        return Err(ConfigError::InvalidEnvVar {
            var: "ICY_SEND_SUCCESS_RATE".to_string(),
            reason: format!("must be between 0 and 1; got {send_success_rate}"),
        });
    }
    let scoring_seed = match lookup("ICY_SCORING_SEED") {
        Ok(raw) if !raw.trim().is_empty() => Some(parse_as::<u64>("ICY_SCORING_SEED", &raw)?),
        _ => None,
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        creators_path,
        connector_latency_ms,
        connector_max_retries,
        connector_retry_backoff_ms,
        discovery_step_delay_ms,
        discovery_max_results,
        task_retention_secs,
        rate_limit_per_minute,
        send_success_rate,
        scoring_seed,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "production" => Ok(Environment::Production),
        "test" => Ok(Environment::Test),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ICY_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}
