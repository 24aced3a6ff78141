use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use super::schedule::{minutes_of_day, parse_weekday, weekday_name};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Available,
    Limited,
    Avoid,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Limited => "limited",
            Status::Avoid => "avoid",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "available" => Some(Status::Available),
            "limited" => Some(Status::Limited),
            "avoid" => Some(Status::Avoid),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekday `offset` days after `day`. Only the weekday matters, so any
/// offset is valid.
fn offset_weekday(day: Weekday, offset: i64) -> Weekday {
    (0..offset.rem_euclid(7)).fold(day, |d, _| d.succ())
}

/// A day of the week and a minute of that day. Carries no date or timezone;
/// callers decide whether it comes from a clock or from a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTime {
    pub day: Weekday,
    pub minute: u32,
}

impl ReferenceTime {
    pub fn new(day: Weekday, minute: u32) -> Self {
        Self { day, minute }
    }

    pub fn from_datetime<T: Datelike + Timelike>(at: &T) -> Self {
        Self {
            day: at.weekday(),
            minute: at.hour() * 60 + at.minute(),
        }
    }

    /// `None` when `day` is not an English weekday name.
    pub fn simulated(time: &str, day: &str) -> Option<Self> {
        parse_weekday(day).map(|day| Self::new(day, minutes_of_day(time)))
    }

    /// `base` shifted by `day_offset` days, with the clock set to `time`.
    pub fn with_day_offset(base: NaiveDateTime, day_offset: i64, time: &str) -> Self {
        Self::new(offset_weekday(base.weekday(), day_offset), minutes_of_day(time))
    }

    /// Picks the reference used for status rendering. A simulated day name
    /// wins over a day offset; an unset time keeps the clock of `now`.
    pub fn resolve(
        now: NaiveDateTime,
        simulated_time: Option<&str>,
        simulated_day: Option<&str>,
        day_offset: Option<i64>,
    ) -> Self {
        let live = Self::from_datetime(&now);
        let minute = simulated_time
            .filter(|t| !t.trim().is_empty())
            .map(minutes_of_day)
            .unwrap_or(live.minute);

        let day = match simulated_day.and_then(parse_weekday) {
            Some(day) => day,
            None => match day_offset {
                Some(offset) => offset_weekday(live.day, offset),
                None => live.day,
            },
        };

        Self::new(day, minute)
    }

    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day)
    }
}

impl fmt::Display for ReferenceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:{:02}", self.day_name(), self.minute / 60, self.minute % 60)
    }
}
