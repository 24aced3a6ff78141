pub mod file_spot_source;
pub mod http_spot_source;

use crate::api::dtos::responses::ApiEnvelope;
use crate::domain::models::spot::ParkingSpot;
use crate::error::AppError;

/// Unwraps a `{ success, data }` body. A failed or empty envelope is an upstream error.
pub fn decode_envelope(body: &[u8]) -> Result<Vec<ParkingSpot>, AppError> {
    let envelope: ApiEnvelope<Vec<ParkingSpot>> = serde_json::from_slice(body)?;

    if !envelope.success {
        let reason = envelope.message.unwrap_or_else(|| "request was not successful".to_string());
        return Err(AppError::Upstream(reason));
    }

    envelope
        .data
        .ok_or_else(|| AppError::Upstream("response carried no data".to_string()))
}
