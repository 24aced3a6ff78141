use crate::domain::models::spot::ParkingSpot;
use crate::domain::ports::SpotSource;
use crate::error::AppError;
use crate::infra::sources::decode_envelope;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, error};

/// Reads a JSON file holding the same envelope the REST API serves.
pub struct FileSpotSource {
    path: PathBuf,
}

impl FileSpotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SpotSource for FileSpotSource {
    async fn fetch_spots(&self) -> Result<Vec<ParkingSpot>, AppError> {
        let body = tokio::fs::read(&self.path).await.map_err(|e| {
            error!("Failed to read spot file {}: {}", self.path.display(), e);
            AppError::Io(e)
        })?;

        let spots = decode_envelope(&body)?;
        debug!("Loaded {} spots from {}", spots.len(), self.path.display());
        Ok(spots)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
