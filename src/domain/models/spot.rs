use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::schedule::{null_as_default, WeeklySchedule};

/// Accepts numbers, numeric strings and null. Anything else reads as 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn count_from_value(value: &Value) -> u64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if raw.is_finite() && raw > 0.0 { raw.floor() as u64 } else { 0 }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CapacityCount {
    #[serde(deserialize_with = "lenient_count")]
    pub total: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub available: u64,
}

impl CapacityCount {
    pub fn new(total: u64, available: u64) -> Self {
        Self { total, available }
    }
}

/// Spot capacity as it appears on the wire: either broken down per vehicle
/// type (`{"car": {...}, "bike": {...}}`) or already flattened to a single
/// `{total, available}` pair.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Capacity {
    Flat(CapacityCount),
    ByVehicle(BTreeMap<String, CapacityCount>),
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity::ByVehicle(BTreeMap::new())
    }
}

impl<'de> Deserialize<'de> for Capacity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let Value::Object(map) = value else {
            return Ok(Capacity::default());
        };

        if map.contains_key("total") || map.contains_key("available") {
            let count = |key: &str| map.get(key).map(count_from_value).unwrap_or(0);
            return Ok(Capacity::Flat(CapacityCount::new(count("total"), count("available"))));
        }

        let by_vehicle = map
            .into_iter()
            .filter_map(|(vehicle, entry)| match entry {
                Value::Object(fields) => {
                    let count = |key: &str| fields.get(key).map(count_from_value).unwrap_or(0);
                    Some((vehicle, CapacityCount::new(count("total"), count("available"))))
                }
                _ => None,
            })
            .collect();

        Ok(Capacity::ByVehicle(by_vehicle))
    }
}

impl Capacity {
    /// Sum over vehicle types for a per-vehicle breakdown.
    pub fn total(&self) -> u64 {
        match self {
            Capacity::Flat(count) => count.total,
            Capacity::ByVehicle(map) => map.values().map(|c| c.total).sum(),
        }
    }

    pub fn available(&self) -> u64 {
        match self {
            Capacity::Flat(count) => count.available,
            Capacity::ByVehicle(map) => map.values().map(|c| c.available).sum(),
        }
    }

    pub fn flattened(&self) -> CapacityCount {
        CapacityCount::new(self.total(), self.available())
    }

    /// A flattened capacity carries no vehicle breakdown, so it accepts every type.
    pub fn supports_vehicle(&self, vehicle_type: &str) -> bool {
        match self {
            Capacity::Flat(_) => true,
            Capacity::ByVehicle(map) => map
                .keys()
                .any(|key| key.eq_ignore_ascii_case(vehicle_type.trim())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ParkingSpot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "operatingHours", default, skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<WeeklySchedule>,
    #[serde(default)]
    pub capacity: Capacity,
    /// Fields this crate does not interpret (`_id`, `name`, `location`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ParkingSpot {
    pub fn new(category: &str, operating_hours: Option<WeeklySchedule>, capacity: Capacity) -> Self {
        Self {
            category: category.to_string(),
            operating_hours,
            capacity,
            extra: Map::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.extra
            .get("_id")
            .or_else(|| self.extra.get("id"))
            .and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}
