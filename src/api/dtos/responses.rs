use serde::{Deserialize, Serialize};

use crate::domain::models::status::Status;

/// `{ "success": bool, "data": T }` as returned by the parking REST API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SpotStatusRow {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: String,
    pub status: Status,
    pub total: u64,
    pub available: u64,
}

#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTotals {
    pub available: usize,
    pub limited: usize,
    pub avoid: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StatusReport {
    pub reference: String,
    pub totals: StatusTotals,
    pub spots: Vec<SpotStatusRow>,
}
