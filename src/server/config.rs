use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_BATTERY_CHECK_SCHEDULE: &str = "0 * * * * *";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 64;
const DEFAULT_RATE_LIMIT_REPLENISH_MS: u64 = 100;
const DEFAULT_RATE_LIMIT_BURST: u32 = 50;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Six-field cron expression (with seconds) for the battery refresh job.
    pub battery_check_schedule: String,
    pub seed_data: bool,

    pub request_timeout_secs: u64,
    pub max_concurrent_requests: usize,

    /// Milliseconds for one client's rate limit quota to regain a request.
    pub rate_limit_replenish_ms: u64,
    /// Requests one client may burst; 0 turns rate limiting off.
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    fn from_source<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: var("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            battery_check_schedule: var("BATTERY_CHECK_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_BATTERY_CHECK_SCHEDULE.to_string()),
            seed_data: parse_or(&var, "SEED_DATA", true)?,
            request_timeout_secs: parse_or(&var, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            max_concurrent_requests: parse_or(
                &var,
                "MAX_CONCURRENT_REQUESTS",
                DEFAULT_MAX_CONCURRENT_REQUESTS,
            )?,
            rate_limit_replenish_ms: parse_or(
                &var,
                "RATE_LIMIT_REPLENISH_MS",
                DEFAULT_RATE_LIMIT_REPLENISH_MS,
            )?,
            rate_limit_burst: parse_or(&var, "RATE_LIMIT_BURST", DEFAULT_RATE_LIMIT_BURST)?,
        })
    }
}

fn parse_or<F, T>(var: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match var(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
