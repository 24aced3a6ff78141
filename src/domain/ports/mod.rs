use crate::domain::models::spot::ParkingSpot;
use crate::error::AppError;
use async_trait::async_trait;

/// Where the currently loaded parking spots come from.
#[async_trait]
pub trait SpotSource: Send + Sync {
    async fn fetch_spots(&self) -> Result<Vec<ParkingSpot>, AppError>;

    /// Human readable origin, used in logs.
    fn describe(&self) -> String;
}
