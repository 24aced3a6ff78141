use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::domain::ports::SpotSource;
use crate::infra::sources::{file_spot_source::FileSpotSource, http_spot_source::HttpSpotSource};
use crate::state::AppState;

pub fn build_spot_source(config: &Config) -> Arc<dyn SpotSource> {
    let source = &config.spots_source;

    if source.starts_with("http://") || source.starts_with("https://") {
        info!("Using HTTP spot source {}", source);
        Arc::new(HttpSpotSource::new(
            source.clone(),
            Duration::from_secs(config.http_timeout_secs),
        ))
    } else {
        info!("Using file spot source {}", source);
        Arc::new(FileSpotSource::new(source.clone()))
    }
}

pub fn bootstrap_state(config: &Config) -> AppState {
    AppState {
        config: config.clone(),
        spot_source: build_spot_source(config),
    }
}
