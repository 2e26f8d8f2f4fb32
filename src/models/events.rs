use super::{date_range::DateRange, interval::Interval};
use serde_json::{Value, json};

/// A user interaction reported back to the host application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    SetDate(DateRange),
    SetInterval(Interval),
}

impl HostEvent {
    /// Event name the host listens for.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetDate(_) => "set_date",
            Self::SetInterval(_) => "set_interval",
        }
    }

    /// JSON payload, always wrapped in a `value` object.
    pub fn payload(&self) -> Value {
        match self {
            Self::SetDate(range) => json!({
                "value": {
                    "from": range.wire_from(),
                    "to": range.wire_to(),
                }
            }),
            Self::SetInterval(interval) => json!({
                "value": {
                    "interval": interval.as_str(),
                }
            }),
        }
    }
}
