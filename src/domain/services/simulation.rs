use chrono::Weekday;

use crate::domain::models::schedule::{is_weekend, minutes_of_day, parse_weekday};
use crate::domain::models::spot::{Capacity, CapacityCount, ParkingSpot};

const PEAK_START: u32 = 8 * 60;
const PEAK_END: u32 = 18 * 60;

const WEEKDAY_PEAK_PERCENT: u64 = 20;
const WEEKDAY_OFF_PEAK_PERCENT: u64 = 60;
const WEEKEND_PERCENT: u64 = 80;

/// A parsed simulation request. Empty strings count as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Simulation {
    minute: Option<u32>,
    /// `Some(None)` is a day that was given but is not a weekday name.
    day: Option<Option<Weekday>>,
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

impl Simulation {
    fn parse(simulated_time: Option<&str>, simulated_day: Option<&str>) -> Self {
        Self {
            minute: present(simulated_time).map(minutes_of_day),
            day: present(simulated_day).map(parse_weekday),
        }
    }

    fn is_identity(&self) -> bool {
        self.minute.is_none() && self.day.is_none()
    }
}

/// True iff the spot has slots on `day` and one enabled slot contains `minute`.
pub fn is_open_at_time(spot: &ParkingSpot, day: Weekday, minute: u32) -> bool {
    spot.operating_hours
        .as_ref()
        .is_some_and(|schedule| schedule.is_open_at(day, minute))
}

/// True iff the spot has at least one enabled slot on `day`.
pub fn is_open_on_day(spot: &ParkingSpot, day: Weekday) -> bool {
    spot.operating_hours
        .as_ref()
        .is_some_and(|schedule| schedule.is_open_on(day))
}

pub fn is_peak_hour(minute: u32) -> bool {
    (PEAK_START..=PEAK_END).contains(&minute)
}

/// Share of `total` expected to be free, floored.
pub fn simulated_available(total: u64, day: Weekday, minute: u32) -> u64 {
    let percent = if is_weekend(day) {
        WEEKEND_PERCENT
    } else if is_peak_hour(minute) {
        WEEKDAY_PEAK_PERCENT
    } else {
        WEEKDAY_OFF_PEAK_PERCENT
    };
    total.saturating_mul(percent) / 100
}

fn passes_gate(spot: &ParkingSpot, sim: &Simulation) -> bool {
    match (sim.day, sim.minute) {
        (Some(Some(day)), Some(minute)) => is_open_at_time(spot, day, minute),
        (Some(Some(day)), None) => is_open_on_day(spot, day),
        (Some(None), _) => false,
        (None, _) => true,
    }
}

fn recompute(spot: &ParkingSpot, sim: &Simulation) -> ParkingSpot {
    let total = spot.capacity.total();
    let mut available = spot.capacity.available();

    // survivors of a day+time gate always have an open slot on that day
    if let (Some(Some(day)), Some(minute)) = (sim.day, sim.minute) {
        available = simulated_available(total, day, minute);
    }

    ParkingSpot {
        capacity: Capacity::Flat(CapacityCount::new(total, available)),
        ..spot.clone()
    }
}

/// Applies a time and/or day simulation to `spots`.
///
/// With neither given the spots come back unchanged. A day filters out spots
/// that are closed on it (and, with a time, closed at that time); a time on
/// its own filters nothing. Survivors get a flat `{total, available}`
/// capacity, recomputed from the peak/weekend shares only when both a time
/// and a day were given.
pub fn simulate(
    spots: &[ParkingSpot],
    simulated_time: Option<&str>,
    simulated_day: Option<&str>,
) -> Vec<ParkingSpot> {
    let sim = Simulation::parse(simulated_time, simulated_day);
    if sim.is_identity() {
        return spots.to_vec();
    }

    spots
        .iter()
        .filter(|spot| passes_gate(spot, &sim))
        .map(|spot| recompute(spot, &sim))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_window_is_inclusive() {
        assert!(!is_peak_hour(479));
        assert!(is_peak_hour(480));
        assert!(is_peak_hour(1080));
        assert!(!is_peak_hour(1081));
    }

    #[test]
    fn test_simulated_available_buckets() {
        assert_eq!(simulated_available(100, Weekday::Mon, 540), 20);
        assert_eq!(simulated_available(100, Weekday::Mon, 1200), 60);
        assert_eq!(simulated_available(100, Weekday::Sat, 540), 80);
        assert_eq!(simulated_available(100, Weekday::Sun, 60), 80);
        assert_eq!(simulated_available(7, Weekday::Tue, 600), 1);
        assert_eq!(simulated_available(0, Weekday::Wed, 600), 0);
    }

    #[test]
    fn test_parse_treats_blank_as_absent() {
        assert!(Simulation::parse(Some("  "), Some("")).is_identity());
        let sim = Simulation::parse(Some("09:30"), Some("Blursday"));
        assert_eq!(sim.minute, Some(570));
        assert_eq!(sim.day, Some(None));
    }
}
