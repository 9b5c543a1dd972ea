//! TOML-based timetable configuration.
//!
//! Holds the fixed weekly template:
//! - Global settings (standard break, lunch insertion point, period labels)
//! - Display locale
//! - Per-day plans with lunch windows and per-period subject/room/items
//!
//! Configuration is stored at `~/.config/classclock/timetable.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::calendar::DayKey;
use crate::clock::ClockTime;
use crate::error::{ConfigError, Result};
use crate::render::Locale;
use crate::timetable::LunchWindow;

/// Returns `~/.config/classclock[-dev]/` based on CLASSCLOCK_ENV.
///
/// Set CLASSCLOCK_ENV=dev to use a development data directory.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CLASSCLOCK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("classclock-dev")
    } else {
        base_dir.join("classclock")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

/// Settings shared by every day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Standard gap between consecutive periods, in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Period after which the lunch window replaces the standard break.
    #[serde(default = "default_lunch_after_period")]
    pub lunch_after_period: u32,
    /// Label template; `{n}` is replaced by the period index.
    #[serde(default = "default_period_label")]
    pub period_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub locale: Locale,
}

/// Per-period lookup data. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassConfig {
    #[serde(default)]
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

/// Plan for one school day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayConfig {
    pub first_start: ClockTime,
    pub periods: u32,
    pub class_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<LunchWindow>,
    /// Overrides [`Settings::lunch_after_period`] for this day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_after_period: Option<u32>,
    /// One entry per period, in period order.
    #[serde(default)]
    pub classes: Vec<ClassConfig>,
}

impl DayConfig {
    /// Lookup data for a 1-based period index.
    pub fn class(&self, index: u32) -> Option<&ClassConfig> {
        let slot = usize::try_from(index.checked_sub(1)?).ok()?;
        self.classes.get(slot)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mon: Option<DayConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tue: Option<DayConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wed: Option<DayConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thu: Option<DayConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fri: Option<DayConfig>,
}

impl WeekConfig {
    pub fn get(&self, day: DayKey) -> Option<&DayConfig> {
        match day {
            DayKey::Mon => self.mon.as_ref(),
            DayKey::Tue => self.tue.as_ref(),
            DayKey::Wed => self.wed.as_ref(),
            DayKey::Thu => self.thu.as_ref(),
            DayKey::Fri => self.fri.as_ref(),
        }
    }

    pub fn get_mut(&mut self, day: DayKey) -> &mut Option<DayConfig> {
        match day {
            DayKey::Mon => &mut self.mon,
            DayKey::Tue => &mut self.tue,
            DayKey::Wed => &mut self.wed,
            DayKey::Thu => &mut self.thu,
            DayKey::Fri => &mut self.fri,
        }
    }
}

/// Timetable configuration.
///
/// Serialized to/from TOML at `~/.config/classclock/timetable.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub days: WeekConfig,
}

fn default_break_minutes() -> u32 {
    10
}
fn default_lunch_after_period() -> u32 {
    4
}
fn default_period_label() -> String {
    "{n}時間目".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            break_minutes: default_break_minutes(),
            lunch_after_period: default_lunch_after_period(),
            period_label: default_period_label(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
        }
    }
}

impl Default for TimetableConfig {
    /// The built-in weekly template.
    fn default() -> Self {
        let first_start = ClockTime::from_hm(8, 55).unwrap_or(ClockTime::MIDNIGHT);
        let lunch = |start: (u16, u16), end: (u16, u16)| {
            ClockTime::from_hm(start.0, start.1)
                .zip(ClockTime::from_hm(end.0, end.1))
                .map(|(start, end)| LunchWindow { start, end })
        };
        let day = |class_minutes: u32, lunch: Option<LunchWindow>, subjects: &[&str]| DayConfig {
            first_start,
            periods: subjects.len() as u32,
            class_minutes,
            lunch,
            lunch_after_period: None,
            classes: subjects
                .iter()
                .map(|s| ClassConfig {
                    subject: (*s).to_string(),
                    ..ClassConfig::default()
                })
                .collect(),
        };
        let late_lunch = lunch((12, 45), (13, 30));

        Self {
            settings: Settings::default(),
            display: DisplayConfig::default(),
            days: WeekConfig {
                mon: Some(day(
                    45,
                    lunch((12, 25), (13, 10)),
                    &["保健", "英1", "情数", "数学", "家庭", "家庭", "科学"],
                )),
                tue: Some(day(
                    50,
                    late_lunch,
                    &["数学", "体育", "プログラミング技術", "プログラミング技術", "総探", "LH"],
                )),
                wed: Some(day(
                    50,
                    late_lunch,
                    &["科学", "地理", "音美", "音美", "英コ1", "体育"],
                )),
                thu: Some(day(
                    50,
                    late_lunch,
                    &["英コ1", "電回", "言語", "工業技術基礎", "工業技術基礎", "工業技術基礎"],
                )),
                fri: Some(day(
                    50,
                    late_lunch,
                    &["言語", "電回", "地理", "数学", "情数", "情数"],
                )),
            },
        }
    }
}

impl TimetableConfig {
    /// Default location of the configuration file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("timetable.toml"))
    }

    /// Parse timetable TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from the default location, writing the built-in template on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            return Self::load_from(&path);
        }
        let cfg = Self::default();
        cfg.save_to(&path)?;
        tracing::info!(path = %path.display(), "wrote default timetable");
        Ok(cfg)
    }

    /// Load from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cfg = Self::from_toml_str(&content).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "unparsable timetable file");
        })?;
        tracing::info!(path = %path.display(), "loaded timetable configuration");
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Lunch insertion point for `day`, honouring the per-day override.
    pub fn lunch_after_period(&self, day: DayKey) -> u32 {
        self.days
            .get(day)
            .and_then(|d| d.lunch_after_period)
            .unwrap_or(self.settings.lunch_after_period)
    }

    pub fn period_label(&self, index: u32) -> String {
        self.settings.period_label.replace("{n}", &index.to_string())
    }
}
