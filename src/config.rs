use std::env;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub spots_source: String, // URL of the spot endpoint or path to a JSON file
    pub simulated_time: Option<String>,
    pub simulated_day: Option<String>,
    pub simulated_day_offset: Option<i64>,
    pub refresh_secs: Option<u64>,
    pub http_timeout_secs: u64,
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(key: &str, raw: Option<String>) -> Result<Option<T>, AppError> {
    raw.map(|v| {
        v.parse::<T>()
            .map_err(|_| AppError::Config(format!("{} must be a number, got {:?}", key, v)))
    })
    .transpose()
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            spots_source: optional_var("SPOTS_SOURCE")
                .unwrap_or_else(|| "http://localhost:5000/api/parking".to_string()),
            simulated_time: optional_var("SIMULATED_TIME"),
            simulated_day: optional_var("SIMULATED_DAY"),
            simulated_day_offset: parse_var("SIMULATED_DAY_OFFSET", optional_var("SIMULATED_DAY_OFFSET"))?,
            refresh_secs: parse_var::<u64>("REFRESH_SECS", optional_var("REFRESH_SECS"))?
                .filter(|secs| *secs > 0),
            http_timeout_secs: parse_var("HTTP_TIMEOUT_SECS", optional_var("HTTP_TIMEOUT_SECS"))?
                .unwrap_or(10),
        })
    }
}
