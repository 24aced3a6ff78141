pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod state;
pub mod background;

use crate::background::{simulation_request, start_status_ticker};
use crate::config::Config;
use crate::domain::services::availability::AvailabilityService;
use crate::error::AppError;
use crate::infra::factory::bootstrap_state;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn init_logging() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("./logs", "parking-availability.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("info,parking_availability=debug"));

    let console_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    info!("Logging initialized. Writing JSON logs to ./logs/");
    guard
}

/// Loads the spots once and prints the status report as JSON, or keeps
/// re-evaluating them when `REFRESH_SECS` is set.
pub async fn run() -> Result<(), AppError> {
    let _guard = init_logging();

    let config = Config::from_env()?;
    let state = Arc::new(bootstrap_state(&config));
    let request = simulation_request(&state);

    if request.is_live() {
        info!("Evaluating spots against the live clock");
    } else {
        info!(time = ?request.time, day = ?request.day, offset = ?request.day_offset, "Simulation enabled");
    }

    if let Some(secs) = config.refresh_secs {
        start_status_ticker(state, Duration::from_secs(secs)).await;
        return Ok(());
    }

    let service = AvailabilityService::new(state.spot_source.clone());
    let report = service.snapshot(&request, Local::now().naive_local()).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    info!("Rated {} spots at {}", report.spots.len(), report.reference);
    Ok(())
}
