use super::{error::AppError, hotkey::Hotkey};
use crate::config::Config;
use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Inclusive range of calendar days. `from <= to` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawDateRange")]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Builds a range, swapping the bounds if they arrive reversed.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { from: day, to: day }
    }

    /// First day of the range (`from`).
    pub fn start(&self) -> NaiveDate {
        self.from
    }

    /// Last day of the range (`to`).
    pub fn end(&self) -> NaiveDate {
        self.to
    }

    /// Human readable form used in card descriptions, e.g. `05 Mar, 2024 - 12 Mar, 2024`.
    pub fn display(&self) -> String {
        format!("{} - {}", display_day(self.from), display_day(self.to))
    }

    /// Lower bound as sent to the host: the start of the first day.
    pub fn wire_from(&self) -> String {
        format!("{} {}", self.from.format("%Y-%m-%d"), Config::DAY_START)
    }

    /// Upper bound as sent to the host: the last second of the final day.
    pub fn wire_to(&self) -> String {
        format!("{} {}", self.to.format("%Y-%m-%d"), Config::DAY_END)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

pub fn display_day(day: NaiveDate) -> String {
    day.format("%d %b, %Y").to_string()
}

#[derive(Deserialize)]
struct RawDateRange {
    #[serde(deserialize_with = "host_date")]
    from: NaiveDate,
    #[serde(deserialize_with = "host_date")]
    to: NaiveDate,
}

impl From<RawDateRange> for DateRange {
    fn from(raw: RawDateRange) -> Self {
        Self::new(raw.from, raw.to)
    }
}

fn host_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_host_datetime(&raw)
        .map(|dt| dt.date())
        .map_err(serde::de::Error::custom)
}

/// Parses the timestamp shapes the backend emits: plain dates, `YYYY-MM-DD HH:MM:SS`,
/// naive ISO timestamps and RFC 3339 (converted to local time).
pub fn parse_host_datetime(raw: &str) -> Result<NaiveDateTime, AppError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|day| day.and_time(NaiveTime::MIN))
        .map_err(|_| AppError::InvalidDate(raw.to_string()))
}

/// Named date-range shortcuts offered by the picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatePreset {
    Today,
    Yesterday,
    LastWeek,
    Last30Days,
    Last90Days,
    Last12Months,
    PreviousWeek,
    PreviousMonth,
    PreviousQuarter,
    PreviousYear,
    AllTime,
}

impl DatePreset {
    pub const ALL: [Self; 11] = [
        Self::Today,
        Self::Yesterday,
        Self::LastWeek,
        Self::Last30Days,
        Self::Last90Days,
        Self::Last12Months,
        Self::PreviousWeek,
        Self::PreviousMonth,
        Self::PreviousQuarter,
        Self::PreviousYear,
        Self::AllTime,
    ];

    /// Presets listed in the picker's dropdown, one slice per separated group.
    /// `previous_week` and `previous_year` are reachable by shortcut only.
    pub const MENU_GROUPS: [&'static [Self]; 4] = [
        &[Self::Today, Self::Yesterday, Self::LastWeek],
        &[Self::Last30Days, Self::Last90Days, Self::Last12Months],
        &[Self::PreviousMonth, Self::PreviousQuarter],
        &[Self::AllTime],
    ];

    /// Identifier used by the host and the select element.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::LastWeek => "last_week",
            Self::Last30Days => "last_30_days",
            Self::Last90Days => "last_90_days",
            Self::Last12Months => "last_12_month",
            Self::PreviousWeek => "previous_week",
            Self::PreviousMonth => "previous_month",
            Self::PreviousQuarter => "previous_quarter",
            Self::PreviousYear => "previous_year",
            Self::AllTime => "all_time",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::LastWeek => "Last week",
            Self::Last30Days => "Last 30 days",
            Self::Last90Days => "Last 90 days",
            Self::Last12Months => "Last 12 month",
            Self::PreviousWeek => "Previous week",
            Self::PreviousMonth => "Previous month",
            Self::PreviousQuarter => "Previous quarter",
            Self::PreviousYear => "Previous year",
            Self::AllTime => "All time",
        }
    }

    pub fn hotkey(&self) -> &'static str {
        match self {
            Self::Today => "t",
            Self::Yesterday => "ctrl+t",
            Self::LastWeek => "w",
            Self::Last30Days => "m",
            Self::Last90Days => "q",
            Self::Last12Months => "y",
            Self::PreviousWeek => "ctrl+w",
            Self::PreviousMonth => "ctrl+m",
            Self::PreviousQuarter => "ctrl+q",
            Self::PreviousYear => "ctrl+y",
            Self::AllTime => "a",
        }
    }

    pub fn from_hotkey(hotkey: &Hotkey) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| Hotkey::parse(preset.hotkey()).is_ok_and(|h| h == *hotkey))
    }

    /// Computes the concrete range for this preset relative to `today`.
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            Self::Today => DateRange::single_day(today),
            Self::Yesterday => DateRange::single_day(today - Days::new(1)),
            Self::LastWeek => DateRange::new(today - Days::new(7), today),
            Self::Last30Days => DateRange::new(today - Days::new(30), today),
            Self::Last90Days => DateRange::new(today - Days::new(90), today),
            Self::Last12Months => DateRange::new(today - Days::new(365), today),
            Self::PreviousWeek => DateRange::new(today - Days::new(14), today - Days::new(7)),
            Self::PreviousMonth => {
                let last = first_of_month(today) - Days::new(1);
                DateRange::new(first_of_month(last), last)
            }
            Self::PreviousQuarter => {
                let quarter_start = first_of_month(today) - Months::new(today.month0() % 3);
                DateRange::new(
                    quarter_start - Months::new(3),
                    quarter_start - Days::new(1),
                )
            }
            Self::PreviousYear => {
                let last = first_of_year(today) - Days::new(1);
                DateRange::new(first_of_year(last), last)
            }
            Self::AllTime => DateRange::new(earliest_date(), today),
        }
    }
}

impl fmt::Display for DatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatePreset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s.trim())
            .ok_or_else(|| AppError::UnknownPreset(s.to_string()))
    }
}

/// Resolves a preset by identifier. Unknown identifiers collapse to `today..=today`.
pub fn resolve_preset(name: &str, today: NaiveDate) -> DateRange {
    name.parse::<DatePreset>()
        .map_or_else(|_| DateRange::single_day(today), |preset| preset.resolve(today))
}

/// Lower bound of the `all_time` preset.
pub fn earliest_date() -> NaiveDate {
    DateTime::UNIX_EPOCH.date_naive()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day - Days::new(u64::from(day.day0()))
}

fn first_of_year(day: NaiveDate) -> NaiveDate {
    day - Days::new(u64::from(day.ordinal0()))
}
