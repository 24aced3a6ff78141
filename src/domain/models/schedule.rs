use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize};

pub const MINUTES_PER_DAY: u32 = 1440;

/// Reads an explicit `null` as the type's default, same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses an `HH:MM` string into minutes since midnight.
///
/// Components that do not parse count as 0, so `"ab:30"` is 30 and `""` is 0.
/// Range checking belongs to whoever produced the schedule.
pub fn minutes_of_day(hhmm: &str) -> u32 {
    let mut parts = hhmm.trim().splitn(2, ':');
    let hours = parts.next().and_then(|h| h.trim().parse::<u32>().ok()).unwrap_or(0);
    let minutes = parts.next().and_then(|m| m.trim().parse::<u32>().ok()).unwrap_or(0);
    hours.saturating_mul(60).saturating_add(minutes)
}

/// Parses a full English weekday name, ignoring case and surrounding whitespace.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.trim().to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimeSlot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub open: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub close: String,
    #[serde(rename = "isOpen", default, deserialize_with = "null_as_default")]
    pub is_open: bool,
}

impl TimeSlot {
    pub fn new(open: &str, close: &str, is_open: bool) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
            is_open,
        }
    }

    pub fn is_overnight(&self) -> bool {
        minutes_of_day(&self.close) <= minutes_of_day(&self.open)
    }

    /// Inclusive on both ends. Overnight slots wrap past midnight.
    /// `is_open` is not consulted here.
    pub fn contains(&self, minute: u32) -> bool {
        let open = minutes_of_day(&self.open);
        let close = minutes_of_day(&self.close);

        if close > open {
            open <= minute && minute <= close
        } else {
            minute >= open || minute <= close
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct WeeklySchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monday: Option<Vec<TimeSlot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<Vec<TimeSlot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<Vec<TimeSlot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thursday: Option<Vec<TimeSlot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friday: Option<Vec<TimeSlot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturday: Option<Vec<TimeSlot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunday: Option<Vec<TimeSlot>>,
}

impl WeeklySchedule {
    /// Every day of the week gets the same slots.
    pub fn uniform(slots: Vec<TimeSlot>) -> Self {
        Self {
            monday: Some(slots.clone()),
            tuesday: Some(slots.clone()),
            wednesday: Some(slots.clone()),
            thursday: Some(slots.clone()),
            friday: Some(slots.clone()),
            saturday: Some(slots.clone()),
            sunday: Some(slots),
        }
    }

    /// Slots for `day`; a missing day reads as closed.
    pub fn slots(&self, day: Weekday) -> &[TimeSlot] {
        let slots = match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        };
        slots.as_deref().unwrap_or(&[])
    }

    pub fn set_slots(&mut self, day: Weekday, slots: Vec<TimeSlot>) {
        let target = match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *target = Some(slots);
    }

    /// True if any enabled slot of `day` contains `minute`.
    pub fn is_open_at(&self, day: Weekday, minute: u32) -> bool {
        self.slots(day)
            .iter()
            .any(|slot| slot.is_open && slot.contains(minute))
    }

    /// True if `day` has at least one enabled slot, whatever its hours.
    pub fn is_open_on(&self, day: Weekday) -> bool {
        self.slots(day).iter().any(|slot| slot.is_open)
    }
}
