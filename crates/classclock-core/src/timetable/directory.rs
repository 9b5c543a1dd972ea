//! Room and required-item lookups keyed by (day, period index).
//!
//! Absent entries are not errors: rooms come back as `None` and item lists
//! as an empty slice, and the presentation layer prints its "unset" text.

use std::collections::HashMap;

use crate::calendar::DayKey;
use crate::config::TimetableConfig;

#[derive(Debug, Clone, Default)]
pub struct RoomDirectory {
    rooms: HashMap<(DayKey, u32), String>,
}

impl RoomDirectory {
    pub fn from_config(config: &TimetableConfig) -> Self {
        let mut rooms = HashMap::new();
        for day in DayKey::ALL {
            let Some(plan) = config.days.get(day) else {
                continue;
            };
            for (index, class) in (1u32..).zip(&plan.classes) {
                if let Some(room) = class.room.as_deref().filter(|r| !r.trim().is_empty()) {
                    rooms.insert((day, index), room.to_string());
                }
            }
        }
        Self { rooms }
    }

    pub fn room(&self, day: DayKey, index: u32) -> Option<&str> {
        self.rooms.get(&(day, index)).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ItemDirectory {
    items: HashMap<(DayKey, u32), Vec<String>>,
}

impl ItemDirectory {
    pub fn from_config(config: &TimetableConfig) -> Self {
        let mut items = HashMap::new();
        for day in DayKey::ALL {
            let Some(plan) = config.days.get(day) else {
                continue;
            };
            for (index, class) in (1u32..).zip(&plan.classes) {
                if !class.items.is_empty() {
                    items.insert((day, index), class.items.clone());
                }
            }
        }
        Self { items }
    }

    /// Required items in configured order; empty when none are set.
    pub fn items(&self, day: DayKey, index: u32) -> &[String] {
        self.items
            .get(&(day, index))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
