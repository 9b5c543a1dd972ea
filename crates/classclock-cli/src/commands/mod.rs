pub mod config;
pub mod now;
pub mod timetable;
pub mod watch;
