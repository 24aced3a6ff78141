use crate::api::dtos::responses::{SpotStatusRow, StatusReport, StatusTotals};
use crate::domain::models::spot::ParkingSpot;
use crate::domain::models::status::{ReferenceTime, Status};
use crate::domain::services::status::compute_status;

pub fn build_report(spots: &[ParkingSpot], at: &ReferenceTime) -> StatusReport {
    let mut totals = StatusTotals::default();

    let rows = spots
        .iter()
        .map(|spot| {
            let status = compute_status(spot, at);
            match status {
                Status::Available => totals.available += 1,
                Status::Limited => totals.limited += 1,
                Status::Avoid => totals.avoid += 1,
            }

            SpotStatusRow {
                id: spot.id().map(str::to_string),
                name: spot.name().map(str::to_string),
                category: spot.category.clone(),
                status,
                total: spot.capacity.total(),
                available: spot.capacity.available(),
            }
        })
        .collect();

    StatusReport {
        reference: at.to_string(),
        totals,
        spots: rows,
    }
}
