//! Classification of a moment into exactly one schedule state.
//!
//! ## Evaluation order
//!
//! ```text
//! Holiday -> Lunch -> InClass -> Break -> AfterSchool | BeforeSchool -> Out
//! ```
//!
//! The first match wins. Lunch is checked before the period scan so a lunch
//! window covering a nominal gap is never reported as a break. Every interval
//! is half-open, so a moment equal to a period's end already belongs to
//! whatever follows it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calendar::{current_day_key, DayKey};
use crate::clock::ClockTime;
use crate::timetable::{LunchWindow, Period, Timetable};

/// What is happening at one moment of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedState {
    /// Not a school day.
    Holiday,
    /// Inside the lunch window.
    Lunch {
        window: LunchWindow,
        /// First period starting at or after the end of lunch.
        next: Option<Period>,
    },
    InClass {
        period: Period,
    },
    /// Between two consecutive periods, outside lunch.
    Break {
        next: Period,
    },
    BeforeSchool,
    /// All periods are over for the day.
    AfterSchool {
        next_day: DayKey,
        /// First period of `next_day`, if that day has any.
        first: Option<Period>,
    },
    /// No periods configured, or nothing else matched.
    Out,
}

impl ResolvedState {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Holiday => "holiday",
            Self::Lunch { .. } => "lunch",
            Self::InClass { .. } => "in_class",
            Self::Break { .. } => "break",
            Self::BeforeSchool => "before_school",
            Self::AfterSchool { .. } => "after_school",
            Self::Out => "out",
        }
    }
}

/// One render cycle's worth of resolved data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub day: Option<DayKey>,
    pub time: ClockTime,
    pub state: ResolvedState,
}

impl Timetable {
    /// Classify `now` on `day`. Total and side-effect free.
    pub fn resolve(&self, day: Option<DayKey>, now: ClockTime) -> ResolvedState {
        let Some(day) = day else {
            return ResolvedState::Holiday;
        };
        let periods = self.schedule(day);

        if let Some(window) = self.lunch(day).filter(|w| w.contains(now)) {
            return ResolvedState::Lunch {
                window,
                next: periods.iter().find(|p| p.start >= window.end).cloned(),
            };
        }

        if let Some(period) = periods.iter().find(|p| p.contains(now)) {
            return ResolvedState::InClass {
                period: period.clone(),
            };
        }

        if let Some(pair) = periods
            .windows(2)
            .find(|pair| pair[0].end <= now && now < pair[1].start)
        {
            return ResolvedState::Break {
                next: pair[1].clone(),
            };
        }

        if let (Some(first), Some(last)) = (periods.first(), periods.last()) {
            if now >= last.end {
                let next_day = day.following();
                return ResolvedState::AfterSchool {
                    next_day,
                    first: self.schedule(next_day).first().cloned(),
                };
            }
            if now < first.start {
                return ResolvedState::BeforeSchool;
            }
        }

        ResolvedState::Out
    }

    /// Resolve a local wall-clock moment.
    pub fn status_at(&self, at: NaiveDateTime) -> Status {
        let day = current_day_key(at.date());
        let time = ClockTime::from_time(&at.time());
        let state = self.resolve(day, time);
        tracing::trace!(?day, %time, state = state.kind(), "resolved");
        Status { day, time, state }
    }
}
