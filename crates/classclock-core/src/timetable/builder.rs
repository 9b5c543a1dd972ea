//! Period generation from a day plan.
//!
//! ```text
//! first_start ─┬─ class ─┬─ break ─┬─ class ─ ... ─┬─ class ─┬─ lunch ─┬─ class ...
//!              1         │         2               4         │         5
//! ```
//!
//! The gap after the lunch insertion point is the lunch window's length when
//! the day has a lunch window, and the standard break otherwise.

use super::{DaySchedule, Period};
use crate::calendar::DayKey;
use crate::config::TimetableConfig;
use crate::error::ConfigError;

/// Build the ordered period sequence for `day`.
///
/// A day missing from the configuration, or planned with zero periods,
/// yields an empty schedule.
pub fn build(day: DayKey, config: &TimetableConfig) -> Result<DaySchedule, ConfigError> {
    let Some(plan) = config.days.get(day) else {
        return Ok(DaySchedule::empty(day));
    };

    if let Some(lunch) = plan.lunch {
        if lunch.start >= lunch.end {
            return Err(ConfigError::InvalidValue {
                key: format!("days.{day}.lunch"),
                message: format!("end ({}) must be after start ({})", lunch.end, lunch.start),
            });
        }
    }
    if plan.periods == 0 {
        return Ok(DaySchedule::empty(day));
    }
    if plan.class_minutes == 0 {
        return Err(ConfigError::InvalidValue {
            key: format!("days.{day}.class_minutes"),
            message: "must be at least 1".into(),
        });
    }

    let lunch_after = config.lunch_after_period(day);
    let overflow = |period| ConfigError::ScheduleOverflow { day, period };

    let mut clock = plan.first_start;
    let mut periods = Vec::new();

    for index in 1..=plan.periods {
        let start = clock;
        let end = start
            .checked_add_minutes(plan.class_minutes)
            .ok_or_else(|| overflow(index))?;

        periods.push(Period {
            index,
            label: config.period_label(index),
            subject: plan
                .class(index)
                .map(|c| c.subject.clone())
                .unwrap_or_default(),
            start,
            end,
        });

        if index == plan.periods {
            break;
        }

        let gap = match plan.lunch {
            Some(lunch) if index == lunch_after => lunch.duration_min(),
            _ => config.settings.break_minutes,
        };
        clock = end
            .checked_add_minutes(gap)
            .ok_or_else(|| overflow(index + 1))?;
    }

    tracing::debug!(day = %day, periods = periods.len(), "built day schedule");
    Ok(DaySchedule { day, periods })
}
