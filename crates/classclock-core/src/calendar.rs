//! School-day keys and weekday navigation.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the five school weekdays.
///
/// Weekends have no key; callers carry them as `Option<DayKey>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl DayKey {
    pub const ALL: [DayKey; 5] = [DayKey::Mon, DayKey::Tue, DayKey::Wed, DayKey::Thu, DayKey::Fri];

    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(Self::Mon),
            Weekday::Tue => Some(Self::Tue),
            Weekday::Wed => Some(Self::Wed),
            Weekday::Thu => Some(Self::Thu),
            Weekday::Fri => Some(Self::Fri),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            Self::Mon => Weekday::Mon,
            Self::Tue => Weekday::Tue,
            Self::Wed => Weekday::Wed,
            Self::Thu => Weekday::Thu,
            Self::Fri => Weekday::Fri,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "mon",
            Self::Tue => "tue",
            Self::Wed => "wed",
            Self::Thu => "thu",
            Self::Fri => "fri",
        }
    }

    /// The school day after this one. Friday rolls over to Monday.
    pub fn following(self) -> DayKey {
        next_school_weekday(self.weekday())
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown school day '{0}': expected one of mon, tue, wed, thu, fri")]
pub struct UnknownDayKey(pub String);

impl FromStr for DayKey {
    type Err = UnknownDayKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDayKey(s.to_string()))
    }
}

/// School-day key for a calendar date, `None` on weekends.
pub fn current_day_key(date: NaiveDate) -> Option<DayKey> {
    DayKey::from_weekday(date.weekday())
}

/// First school day strictly after `date`.
pub fn next_school_day_key(date: NaiveDate) -> DayKey {
    next_school_weekday(date.weekday())
}

fn next_school_weekday(from: Weekday) -> DayKey {
    let mut weekday = from;
    for _ in 0..7 {
        weekday = weekday.succ();
        if let Some(key) = DayKey::from_weekday(weekday) {
            return key;
        }
    }
    // Any seven consecutive days contain a weekday.
    DayKey::Mon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekdays_map_to_keys() {
        // 2026-10-12 is a Monday.
        assert_eq!(current_day_key(date(2026, 10, 12)), Some(DayKey::Mon));
        assert_eq!(current_day_key(date(2026, 10, 16)), Some(DayKey::Fri));
    }

    #[test]
    fn weekend_has_no_key() {
        assert_eq!(current_day_key(date(2026, 10, 17)), None);
        assert_eq!(current_day_key(date(2026, 10, 18)), None);
    }

    #[test]
    fn next_school_day_skips_weekend() {
        assert_eq!(next_school_day_key(date(2026, 10, 12)), DayKey::Tue);
        assert_eq!(next_school_day_key(date(2026, 10, 16)), DayKey::Mon);
        assert_eq!(next_school_day_key(date(2026, 10, 17)), DayKey::Mon);
        assert_eq!(next_school_day_key(date(2026, 10, 18)), DayKey::Mon);
    }

    #[test]
    fn following_matches_date_navigation() {
        let monday = date(2026, 10, 12);
        for offset in 0..5 {
            let day = monday + chrono::Days::new(offset);
            let key = current_day_key(day).unwrap();
            assert_eq!(key.following(), next_school_day_key(day));
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Wed".parse::<DayKey>(), Ok(DayKey::Wed));
        assert!("sat".parse::<DayKey>().is_err());
    }
}
