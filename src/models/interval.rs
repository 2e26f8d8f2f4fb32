use super::{date_range::parse_host_datetime, error::AppError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time-bucket size the backend aggregates time series by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Hour,
    #[default]
    Day,
    Month,
}

impl Interval {
    pub const ALL: [Self; 3] = [Self::Hour, Self::Day, Self::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hour => "Per hour",
            Self::Day => "Per day",
            Self::Month => "Per month",
        }
    }

    /// Short label for an axis tick: `Mar 5`, or `Mar 2024` for monthly buckets.
    pub fn tick_label(&self, at: &NaiveDateTime) -> String {
        match self {
            Self::Month => at.format("%b %Y").to_string(),
            Self::Hour | Self::Day => at.format("%b %-d").to_string(),
        }
    }

    /// Long label for a tooltip header.
    pub fn tooltip_label(&self, at: &NaiveDateTime) -> String {
        match self {
            Self::Hour => at.format("%b %-d, %Y, %-I %p").to_string(),
            Self::Day => at.format("%b %-d, %Y").to_string(),
            Self::Month => at.format("%b %Y").to_string(),
        }
    }

    /// Tick label for a raw bucket timestamp from the backend, passing unparseable input through.
    pub fn format_bucket(&self, raw: &str) -> String {
        parse_host_datetime(raw).map_or_else(|_| raw.to_string(), |at| self.tick_label(&at))
    }

    /// Tooltip label for a raw bucket timestamp. Unlike ticks, hourly buckets keep the hour.
    pub fn format_bucket_tooltip(&self, raw: &str) -> String {
        parse_host_datetime(raw).map_or_else(|_| raw.to_string(), |at| self.tooltip_label(&at))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            _ => Err(AppError::UnknownInterval(s.to_string())),
        }
    }
}
