use std::sync::Arc;
use chrono::NaiveDateTime;
use crate::api::dtos::responses::StatusReport;
use crate::domain::models::status::ReferenceTime;
use crate::domain::ports::SpotSource;
use crate::domain::services::report::build_report;
use crate::domain::services::simulation::simulate;
use crate::error::AppError;
use tracing::debug;

/// What the user asked to simulate. All unset means "live".
#[derive(Debug, Clone, Default)]
pub struct SimulationRequest {
    pub time: Option<String>,
    pub day: Option<String>,
    pub day_offset: Option<i64>,
}

impl SimulationRequest {
    pub fn is_live(&self) -> bool {
        self.time.is_none() && self.day.is_none() && self.day_offset.is_none()
    }

    pub fn reference(&self, now: NaiveDateTime) -> ReferenceTime {
        ReferenceTime::resolve(now, self.time.as_deref(), self.day.as_deref(), self.day_offset)
    }
}

pub struct AvailabilityService {
    source: Arc<dyn SpotSource>,
}

impl AvailabilityService {
    pub fn new(source: Arc<dyn SpotSource>) -> Self {
        Self { source }
    }

    /// Fetches the spots, applies the simulation and rates every survivor.
    pub async fn snapshot(&self, request: &SimulationRequest, now: NaiveDateTime) -> Result<StatusReport, AppError> {
        let spots = self.source.fetch_spots().await?;
        let simulated = simulate(&spots, request.time.as_deref(), request.day.as_deref());
        let at = request.reference(now);

        debug!(
            fetched = spots.len(),
            kept = simulated.len(),
            reference = %at,
            "Simulation applied"
        );

        Ok(build_report(&simulated, &at))
    }
}
