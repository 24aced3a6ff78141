mod common;

use common::{spot_from_json, spot_open_every_day};
use parking_availability::domain::models::spot::{Capacity, CapacityCount};
use parking_availability::domain::services::simulation::simulate;
use serde_json::json;

fn flat(total: u64, available: u64) -> Capacity {
    Capacity::Flat(CapacityCount::new(total, available))
}

#[test]
fn test_no_simulation_is_identity() {
    let spots = vec![
        spot_open_every_day("market", "08:00", "20:00", 100),
        spot_from_json(json!({
            "_id": "x1",
            "category": "office",
            "capacity": {"car": {"total": 12, "available": 4}}
        })),
    ];

    assert_eq!(simulate(&spots, None, None), spots);
    assert_eq!(simulate(&spots, Some(""), Some("   ")), spots);
}

#[test]
fn test_weekday_peak_bucket() {
    let spots = vec![spot_open_every_day("market", "08:00", "20:00", 100)];

    let result = simulate(&spots, Some("09:00"), Some("Monday"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].capacity, flat(100, 20));
}

#[test]
fn test_weekday_off_peak_bucket() {
    let spots = vec![spot_open_every_day("market", "08:00", "20:00", 100)];

    let result = simulate(&spots, Some("19:00"), Some("wednesday"));
    assert_eq!(result[0].capacity, flat(100, 60));
}

#[test]
fn test_weekend_overrides_peak() {
    let spots = vec![spot_open_every_day("market", "08:00", "20:00", 100)];

    assert_eq!(simulate(&spots, Some("09:00"), Some("Saturday"))[0].capacity, flat(100, 80));
    assert_eq!(simulate(&spots, Some("19:30"), Some("SUNDAY"))[0].capacity, flat(100, 80));
}

#[test]
fn test_results_are_floored() {
    let spots = vec![spot_open_every_day("market", "00:00", "23:59", 7)];

    assert_eq!(simulate(&spots, Some("12:00"), Some("Tuesday"))[0].capacity, flat(7, 1));
    assert_eq!(simulate(&spots, Some("22:00"), Some("Tuesday"))[0].capacity, flat(7, 4));
    assert_eq!(simulate(&spots, Some("12:00"), Some("Saturday"))[0].capacity, flat(7, 5));
}

#[test]
fn test_day_only_excludes_closed_days() {
    let spot = spot_from_json(json!({
        "category": "market",
        "operatingHours": {
            "sunday": [],
            "monday": [{"open": "08:00", "close": "12:00", "isOpen": true}],
            "tuesday": [{"open": "08:00", "close": "12:00", "isOpen": false}]
        },
        "capacity": {"total": 50, "available": 9}
    }));
    let spots = vec![spot];

    assert!(simulate(&spots, None, Some("Sunday")).is_empty());
    assert!(simulate(&spots, None, Some("Tuesday")).is_empty());
    assert!(simulate(&spots, None, Some("Friday")).is_empty());

    // time is not checked and availability is kept
    let monday = simulate(&spots, None, Some("Monday"));
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].capacity, flat(50, 9));
}

#[test]
fn test_day_and_time_gate() {
    let spots = vec![
        spot_open_every_day("market", "08:00", "12:00", 10),
        spot_open_every_day("transport", "22:00", "06:00", 40),
    ];

    let late = simulate(&spots, Some("23:00"), Some("Thursday"));
    assert_eq!(late.len(), 1);
    assert_eq!(late[0].category, "transport");
    assert_eq!(late[0].capacity, flat(40, 24));

    let noon = simulate(&spots, Some("12:00"), Some("Thursday"));
    assert_eq!(noon.len(), 1);
    assert_eq!(noon[0].category, "market");
    assert_eq!(noon[0].capacity, flat(10, 2));
}

#[test]
fn test_time_only_keeps_everything_and_flattens() {
    let spots = vec![
        spot_open_every_day("market", "08:00", "12:00", 10),
        spot_from_json(json!({
            "category": "office",
            "capacity": {
                "car": {"total": 12, "available": 4},
                "bike": {"total": 8, "available": 8}
            }
        })),
    ];

    let result = simulate(&spots, Some("03:00"), None);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].capacity, flat(10, 10));
    assert_eq!(result[1].capacity, flat(20, 12));
}

#[test]
fn test_spots_without_schedule_fail_the_day_gate() {
    let spots = vec![spot_from_json(json!({"category": "market", "capacity": {"total": 5, "available": 5}}))];

    assert!(simulate(&spots, None, Some("Monday")).is_empty());
    assert!(simulate(&spots, Some("10:00"), Some("Monday")).is_empty());
    assert_eq!(simulate(&spots, Some("10:00"), None).len(), 1);
}

#[test]
fn test_unknown_day_filters_everything() {
    let spots = vec![spot_open_every_day("market", "00:00", "23:59", 10)];

    assert!(simulate(&spots, None, Some("Caturday")).is_empty());
    assert!(simulate(&spots, Some("10:00"), Some("Caturday")).is_empty());
}

#[test]
fn test_missing_counts_default_to_zero() {
    let spots = vec![spot_from_json(json!({
        "category": "market",
        "operatingHours": {"monday": [{"open": "08:00", "close": "20:00", "isOpen": true}]}
    }))];

    let result = simulate(&spots, Some("10:00"), Some("Monday"));
    assert_eq!(result[0].capacity, flat(0, 0));
}

#[test]
fn test_input_is_not_mutated() {
    let spots = vec![spot_from_json(json!({
        "_id": "keep-me",
        "category": "market",
        "operatingHours": {"monday": [{"open": "08:00", "close": "20:00", "isOpen": true}]},
        "capacity": {"car": {"total": 100, "available": 97}}
    }))];
    let before = spots.clone();

    let result = simulate(&spots, Some("09:00"), Some("Monday"));

    assert_eq!(spots, before);
    assert_eq!(result[0].id(), Some("keep-me"));
    assert_eq!(result[0].capacity, flat(100, 20));
}
