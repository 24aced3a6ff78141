use crate::domain::models::schedule::WeeklySchedule;
use crate::domain::models::spot::ParkingSpot;
use crate::domain::models::status::{ReferenceTime, Status};

const RESTRICTIVE_CATEGORIES: [&str; 2] = ["hospital", "office"];

/// Substring match, so "Hospital Wing" and "back-office" both count.
pub fn is_restrictive_category(category: &str) -> bool {
    let category = category.to_lowercase();
    RESTRICTIVE_CATEGORIES.iter().any(|c| category.contains(c))
}

pub fn is_within_operating_hours(schedule: &WeeklySchedule, at: &ReferenceTime) -> bool {
    schedule.is_open_at(at.day, at.minute)
}

/// Status of a spot at `at`.
///
/// A spot without a schedule is always `Available`. Outside its hours a spot
/// is `Avoid` when its category is restrictive, otherwise `Limited`.
pub fn compute_status(spot: &ParkingSpot, at: &ReferenceTime) -> Status {
    let Some(schedule) = spot.operating_hours.as_ref() else {
        return Status::Available;
    };

    if is_within_operating_hours(schedule, at) {
        Status::Available
    } else if is_restrictive_category(&spot.category) {
        Status::Avoid
    } else {
        Status::Limited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restrictive_category_matching() {
        assert!(is_restrictive_category("hospital"));
        assert!(is_restrictive_category("Hospital Wing"));
        assert!(is_restrictive_category("hospital-annex"));
        assert!(is_restrictive_category("OFFICE"));
        assert!(!is_restrictive_category("market"));
        assert!(!is_restrictive_category("shopping-mall"));
        assert!(!is_restrictive_category(""));
    }
}
