use std::sync::Arc;
use std::time::Duration;
use chrono::Local;
use tokio::time::sleep;
use tracing::{error, info, info_span, Instrument};
use crate::domain::services::availability::{AvailabilityService, SimulationRequest};
use crate::state::AppState;

/// Re-evaluates every spot on a fixed interval, logging a summary per pass.
/// A failed fetch is logged and retried on the next tick.
pub async fn start_status_ticker(state: Arc<AppState>, interval: Duration) {
    info!("Starting status ticker every {:?} from {}", interval, state.spot_source.describe());

    let service = AvailabilityService::new(state.spot_source.clone());
    let request = simulation_request(&state);
    let mut tick: u64 = 0;

    loop {
        tick += 1;
        let span = info_span!("status_tick", tick = tick);

        async {
            match service.snapshot(&request, Local::now().naive_local()).await {
                Ok(report) => info!(
                    reference = %report.reference,
                    spots = report.spots.len(),
                    available = report.totals.available,
                    limited = report.totals.limited,
                    avoid = report.totals.avoid,
                    "Status pass completed"
                ),
                Err(e) => error!("Status pass failed: {}", e),
            }
        }
        .instrument(span)
        .await;

        sleep(interval).await;
    }
}

pub fn simulation_request(state: &AppState) -> SimulationRequest {
    SimulationRequest {
        time: state.config.simulated_time.clone(),
        day: state.config.simulated_day.clone(),
        day_offset: state.config.simulated_day_offset,
    }
}
