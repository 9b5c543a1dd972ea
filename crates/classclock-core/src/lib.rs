//! # classclock Core Library
//!
//! This library answers one question for a student's fixed weekly timetable:
//! "what is happening right now?" It is split the same way the CLI consumes
//! it, with every piece usable on its own.
//!
//! ## Architecture
//!
//! - **Clock**: `HH:MM` time-of-day values with checked arithmetic
//! - **Timetable**: periods built once from the configured weekly plan,
//!   plus room and item lookups
//! - **Resolver**: a total, pure classification of a moment into one state
//! - **Calendar**: school-day keys and next-school-day navigation
//! - **Render**: the five display lines for a resolved state
//! - **Ticker**: a minute-aligned re-render loop
//!
//! ## Key Components
//!
//! - [`Timetable`]: immutable week, built by [`Timetable::from_config`]
//! - [`ResolvedState`]: one variant per schedule state
//! - [`TimetableConfig`]: TOML configuration
//! - [`MinuteTicker`]: drives periodic re-rendering

pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod render;
pub mod resolver;
pub mod ticker;
pub mod timetable;

pub use calendar::{current_day_key, next_school_day_key, DayKey};
pub use clock::{format_time, minutes_until, parse_time, ClockTime};
pub use config::{ClassConfig, DayConfig, Settings, TimetableConfig};
pub use error::{ConfigError, CoreError, TimeFormatError};
pub use render::{render, Locale, Screen};
pub use resolver::{ResolvedState, Status};
pub use ticker::{Clock, FixedClock, MinuteTicker, SystemClock};
pub use timetable::{DaySchedule, LunchWindow, Period, Timetable};
