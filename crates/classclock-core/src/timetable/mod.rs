//! The immutable weekly timetable.
//!
//! A [`Timetable`] is built once from a [`TimetableConfig`] and then only
//! read: the per-day period sequences, lunch windows and the room/item
//! directories are all fixed for the lifetime of the process.

mod builder;
mod directory;

pub use builder::build;
pub use directory::{ItemDirectory, RoomDirectory};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calendar::DayKey;
use crate::clock::ClockTime;
use crate::config::TimetableConfig;
use crate::error::ConfigError;

/// One scheduled class slot. `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// 1-based position within the day.
    pub index: u32,
    pub label: String,
    /// Empty when no subject is configured.
    pub subject: String,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl Period {
    /// Half-open containment: `start <= now < end`.
    pub fn contains(&self, now: ClockTime) -> bool {
        self.start <= now && now < self.end
    }

    pub fn duration_min(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

/// The midday non-class interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl LunchWindow {
    pub fn contains(&self, now: ClockTime) -> bool {
        self.start <= now && now < self.end
    }

    pub fn duration_min(&self) -> u32 {
        self.start.minutes_to(self.end).map(u32::from).unwrap_or(0)
    }
}

/// Ordered periods for one school day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: DayKey,
    pub periods: Vec<Period>,
}

impl DaySchedule {
    pub fn empty(day: DayKey) -> Self {
        Self {
            day,
            periods: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn first(&self) -> Option<&Period> {
        self.periods.first()
    }

    pub fn last(&self) -> Option<&Period> {
        self.periods.last()
    }
}

/// The whole week, ready for resolving.
#[derive(Debug, Clone)]
pub struct Timetable {
    schedules: BTreeMap<DayKey, DaySchedule>,
    lunches: BTreeMap<DayKey, LunchWindow>,
    rooms: RoomDirectory,
    items: ItemDirectory,
}

impl Timetable {
    /// Build every day's schedule and the lookup directories.
    ///
    /// # Errors
    ///
    /// Returns an error if any day's plan is invalid (zero-length classes,
    /// an inverted lunch window, or periods running past midnight).
    pub fn from_config(config: &TimetableConfig) -> Result<Self, ConfigError> {
        let mut schedules = BTreeMap::new();
        let mut lunches = BTreeMap::new();

        for day in DayKey::ALL {
            schedules.insert(day, build(day, config)?);
            if let Some(lunch) = config.days.get(day).and_then(|d| d.lunch) {
                lunches.insert(day, lunch);
            }
        }

        Ok(Self {
            schedules,
            lunches,
            rooms: RoomDirectory::from_config(config),
            items: ItemDirectory::from_config(config),
        })
    }

    pub fn schedule(&self, day: DayKey) -> &[Period] {
        self.schedules
            .get(&day)
            .map(|s| s.periods.as_slice())
            .unwrap_or(&[])
    }

    pub fn day_schedule(&self, day: DayKey) -> Option<&DaySchedule> {
        self.schedules.get(&day)
    }

    pub fn lunch(&self, day: DayKey) -> Option<LunchWindow> {
        self.lunches.get(&day).copied()
    }

    pub fn rooms(&self) -> &RoomDirectory {
        &self.rooms
    }

    pub fn items(&self) -> &ItemDirectory {
        &self.items
    }
}
