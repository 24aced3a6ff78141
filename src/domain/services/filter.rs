use serde::Deserialize;

use crate::domain::models::spot::ParkingSpot;
use crate::domain::models::status::{ReferenceTime, Status};
use crate::domain::services::status::compute_status;

/// List-view criteria. Unset criteria do not constrain.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SpotFilter {
    pub category: Option<String>,
    pub vehicle_type: Option<String>,
    pub statuses: Option<Vec<Status>>,
}

impl SpotFilter {
    pub fn matches(&self, spot: &ParkingSpot, at: &ReferenceTime) -> bool {
        if let Some(category) = self.category.as_deref() {
            if !spot.category.trim().eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }

        if let Some(vehicle) = self.vehicle_type.as_deref() {
            if !spot.capacity.supports_vehicle(vehicle) {
                return false;
            }
        }

        match &self.statuses {
            Some(allowed) => allowed.contains(&compute_status(spot, at)),
            None => true,
        }
    }
}

pub fn filter_spots(spots: &[ParkingSpot], filter: &SpotFilter, at: &ReferenceTime) -> Vec<ParkingSpot> {
    spots
        .iter()
        .filter(|spot| filter.matches(spot, at))
        .cloned()
        .collect()
}
