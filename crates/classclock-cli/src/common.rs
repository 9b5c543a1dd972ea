//! Shared helpers for CLI commands.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use classclock_core::{Locale, Timetable, TimetableConfig};

/// Options accepted by every subcommand.
pub struct GlobalOpts {
    pub config: Option<PathBuf>,
    pub locale: Option<Locale>,
}

impl GlobalOpts {
    /// Path of the timetable file in effect.
    pub fn config_path(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(TimetableConfig::path()?),
        }
    }

    /// Load the configuration. Without `--config`, the default file is created on first use.
    pub fn load_config(&self) -> Result<TimetableConfig, Box<dyn std::error::Error>> {
        let config = match &self.config {
            Some(path) => TimetableConfig::load_from(path)?,
            None => TimetableConfig::load()?,
        };
        Ok(config)
    }

    /// Load the configuration and build the timetable, returning the display locale too.
    pub fn load_timetable(&self) -> Result<(Timetable, Locale), Box<dyn std::error::Error>> {
        let config = self.load_config()?;
        let timetable = Timetable::from_config(&config)?;
        let locale = self.locale.unwrap_or(config.display.locale);
        Ok((timetable, locale))
    }
}

/// Parse `YYYY-MM-DD HH:MM` (a `T` separator is accepted as well).
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| format!("invalid date-time '{s}': expected YYYY-MM-DD HH:MM"))
}
