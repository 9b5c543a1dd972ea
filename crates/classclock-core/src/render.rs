//! Turns a resolved [`Status`] into display lines.
//!
//! The screen has five lines: a header with the day and time, the main
//! status, a detail line (room or next period), an items line and a
//! time-remaining line. Lines that do not apply to a state are left empty.
//! Missing rooms, items and subjects print the locale's "unset" text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::DayKey;
use crate::clock::{minutes_until, ClockTime};
use crate::resolver::{ResolvedState, Status};
use crate::timetable::{Period, Timetable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ja" => Ok(Self::Ja),
            "en" => Ok(Self::En),
            other => Err(format!("unknown locale '{other}': expected ja or en")),
        }
    }
}

impl Locale {
    fn pick<'a>(self, ja: &'a str, en: &'a str) -> &'a str {
        match self {
            Self::Ja => ja,
            Self::En => en,
        }
    }

    pub fn day_name(self, day: DayKey) -> &'static str {
        match (self, day) {
            (Self::Ja, DayKey::Mon) => "月",
            (Self::Ja, DayKey::Tue) => "火",
            (Self::Ja, DayKey::Wed) => "水",
            (Self::Ja, DayKey::Thu) => "木",
            (Self::Ja, DayKey::Fri) => "金",
            (Self::En, DayKey::Mon) => "Mon",
            (Self::En, DayKey::Tue) => "Tue",
            (Self::En, DayKey::Wed) => "Wed",
            (Self::En, DayKey::Thu) => "Thu",
            (Self::En, DayKey::Fri) => "Fri",
        }
    }

    fn item_list(self, items: &[String]) -> String {
        if items.is_empty() {
            return self.pick("特になし", "none").to_string();
        }
        items.join(self.pick("、", ", "))
    }

    fn subject_or_unset(self, subject: &str) -> String {
        if subject.is_empty() {
            self.pick("未設定", "unset").to_string()
        } else {
            subject.to_string()
        }
    }
}

/// The five display lines for one render cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub header: String,
    pub status: String,
    pub detail: String,
    pub items: String,
    pub remaining: String,
}

impl Screen {
    pub fn lines(&self) -> [&str; 5] {
        [&self.header, &self.status, &self.detail, &self.items, &self.remaining]
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines().into_iter().filter(|l| !l.is_empty()) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Render `status` using the timetable's room and item directories.
pub fn render(status: &Status, timetable: &Timetable, locale: Locale) -> Screen {
    let Status { day, time, state } = status;
    let now = *time;

    let header = match day {
        Some(day) => match locale {
            Locale::Ja => format!("{}曜日 {now}", locale.day_name(*day)),
            Locale::En => format!("{} {now}", locale.day_name(*day)),
        },
        None => now.to_string(),
    };

    let room_of = |day: DayKey, period: &Period| {
        timetable
            .rooms()
            .room(day, period.index)
            .unwrap_or(locale.pick("教室未設定", "unset"))
            .to_string()
    };
    let items_of = |day: DayKey, period: &Period| {
        locale.item_list(timetable.items().items(day, period.index))
    };

    match (state, *day) {
        (ResolvedState::InClass { period }, Some(day)) => Screen {
            header,
            status: match locale {
                Locale::Ja => format!("今は {}（{}）", period.label, period.subject),
                Locale::En => format!("Now: {} ({})", period.label, period.subject),
            },
            detail: match locale {
                Locale::Ja => format!("教室：{}", room_of(day, period)),
                Locale::En => format!("Room: {}", room_of(day, period)),
            },
            items: match locale {
                Locale::Ja => format!("持ち物：{}", items_of(day, period)),
                Locale::En => format!("Bring: {}", items_of(day, period)),
            },
            remaining: remaining_line(locale, now, period.end, "終了まであと", "left"),
        },
        (ResolvedState::Lunch { window, next }, Some(day)) => {
            let (detail, items) = match next {
                Some(next) => match locale {
                    Locale::Ja => (
                        format!("次は {}（{}） {}〜", next.label, next.subject, next.start),
                        format!("教室：{} / 持ち物：{}", room_of(day, next), items_of(day, next)),
                    ),
                    Locale::En => (
                        format!("Next: {} ({}) from {}", next.label, next.subject, next.start),
                        format!("Room: {} / Bring: {}", room_of(day, next), items_of(day, next)),
                    ),
                },
                None => (String::new(), String::new()),
            };
            Screen {
                header,
                status: locale.pick("今は昼休み", "Lunch break").into(),
                detail,
                items,
                remaining: remaining_line(locale, now, window.end, "残り", "left"),
            }
        }
        (ResolvedState::Break { next }, Some(_)) => Screen {
            header,
            status: locale.pick("今は休み時間", "Break").into(),
            detail: String::new(),
            items: match locale {
                Locale::Ja => format!("次は {}（{}）", next.label, next.subject),
                Locale::En => format!("Next: {} ({})", next.label, next.subject),
            },
            remaining: remaining_line(locale, now, next.start, "開始まであと", "until start"),
        },
        (ResolvedState::AfterSchool { next_day, first }, _) => {
            let next_day = *next_day;
            let day_name = locale.day_name(next_day);
            let status = locale
                .pick("本日の授業はすべて終了しました", "Classes are over for today")
                .to_string();
            match first {
                Some(first) => Screen {
                    header,
                    status,
                    detail: match locale {
                        Locale::Ja => format!("次回：{day_name}曜 {}（{}〜）", first.label, first.start),
                        Locale::En => format!("Next: {day_name} {} (from {})", first.label, first.start),
                    },
                    items: match locale {
                        Locale::Ja => format!(
                            "科目：{} / 教室：{}",
                            locale.subject_or_unset(&first.subject),
                            room_of(next_day, first)
                        ),
                        Locale::En => format!(
                            "Subject: {} / Room: {}",
                            locale.subject_or_unset(&first.subject),
                            room_of(next_day, first)
                        ),
                    },
                    remaining: match locale {
                        Locale::Ja => format!("持ち物：{}", items_of(next_day, first)),
                        Locale::En => format!("Bring: {}", items_of(next_day, first)),
                    },
                },
                None => Screen {
                    header,
                    status,
                    remaining: match locale {
                        Locale::Ja => format!("次の授業情報（{day_name}）が未設定です。"),
                        Locale::En => format!("No classes configured for {day_name}."),
                    },
                    ..Screen::default()
                },
            }
        }
        (ResolvedState::Holiday, _) => Screen {
            header,
            status: locale.pick("本日は授業がありません", "No classes today").into(),
            ..Screen::default()
        },
        // BeforeSchool, Out, and any school-day state paired with a missing day key.
        _ => Screen {
            header,
            status: locale.pick("現在は授業時間外です", "Outside class hours").into(),
            ..Screen::default()
        },
    }
}

fn remaining_line(locale: Locale, now: ClockTime, target: ClockTime, ja: &str, en: &str) -> String {
    let left = minutes_until(now, target);
    match locale {
        Locale::Ja => format!("{ja} {left} 分"),
        Locale::En => format!("{left} min {en}"),
    }
}
