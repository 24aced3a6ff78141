#![allow(dead_code)]

use async_trait::async_trait;
use parking_availability::{
    domain::models::schedule::{TimeSlot, WeeklySchedule},
    domain::models::spot::{Capacity, CapacityCount, ParkingSpot},
    domain::ports::SpotSource,
    error::AppError,
};
use serde_json::Value;

pub struct MockSpotSource {
    spots: Result<Vec<ParkingSpot>, String>,
}

impl MockSpotSource {
    pub fn with_spots(spots: Vec<ParkingSpot>) -> Self {
        Self { spots: Ok(spots) }
    }

    pub fn failing(reason: &str) -> Self {
        Self { spots: Err(reason.to_string()) }
    }
}

#[async_trait]
impl SpotSource for MockSpotSource {
    async fn fetch_spots(&self) -> Result<Vec<ParkingSpot>, AppError> {
        match &self.spots {
            Ok(spots) => Ok(spots.clone()),
            Err(reason) => Err(AppError::Upstream(reason.clone())),
        }
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

pub fn slot(open: &str, close: &str) -> TimeSlot {
    TimeSlot::new(open, close, true)
}

pub fn spot_open_every_day(category: &str, open: &str, close: &str, total: u64) -> ParkingSpot {
    ParkingSpot::new(
        category,
        Some(WeeklySchedule::uniform(vec![slot(open, close)])),
        Capacity::Flat(CapacityCount::new(total, total)),
    )
}

pub fn spot_from_json(raw: Value) -> ParkingSpot {
    serde_json::from_value(raw).expect("fixture must deserialize")
}
