//! Time-of-day values and the small amount of arithmetic the timetable needs.
//!
//! A [`ClockTime`] is minutes since midnight, always inside `00:00..=23:59`.
//! Schedule arithmetic is checked: anything that would reach 24:00 is
//! reported to the caller instead of wrapping around.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimeFormatError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from minutes since midnight. Returns `None` for 1440 and above.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self(hour * 60 + minute))
    }

    /// Truncate a wall-clock time (seconds are dropped).
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Add `minutes`, or `None` if the result would reach 24:00.
    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        let total = u32::from(self.0).checked_add(minutes)?;
        u16::try_from(total).ok().and_then(Self::from_minutes)
    }

    /// Minutes from `self` until `later`, or `None` if `later` is earlier.
    pub fn minutes_to(self, later: ClockTime) -> Option<u16> {
        later.0.checked_sub(self.0)
    }
}

/// Parse strict zero-padded `HH:MM` text.
///
/// chrono accepts unpadded fields such as `8:55`; the shape check rejects them.
pub fn parse_time(text: &str) -> Result<ClockTime, TimeFormatError> {
    let padded = text.len() == 5
        && text
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 2 { b == b':' } else { b.is_ascii_digit() });
    if !padded {
        return Err(TimeFormatError::new(text));
    }
    NaiveTime::parse_from_str(text, "%H:%M")
        .map(|time| ClockTime::from_time(&time))
        .map_err(|_| TimeFormatError::new(text))
}

/// Format as zero-padded `HH:MM`.
pub fn format_time(time: ClockTime) -> String {
    time.to_string()
}

/// Minutes left until `target`, floored at zero once `now` has passed it.
pub fn minutes_until(now: ClockTime, target: ClockTime) -> u32 {
    now.minutes_to(target).map(u32::from).unwrap_or(0)
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_time(&text).map_err(serde::de::Error::custom)
    }
}
