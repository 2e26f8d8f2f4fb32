use super::interval::Interval;
use serde::Deserialize;

/// Visits per time bucket.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VisitPoint {
    pub date: String,
    #[serde(default, alias = "total_visits")]
    pub total: u64,
    #[serde(default, alias = "unique_visits")]
    pub unique: u64,
}

/// Requests per time bucket.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RequestPoint {
    pub date: String,
    #[serde(default, alias = "requests")]
    pub hits: u64,
}

/// Responses per status class per time bucket.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatusPoint {
    pub date: String,
    #[serde(default)]
    pub oks: u64,
    #[serde(default)]
    pub redirs: u64,
    #[serde(default, alias = "erorrs")]
    pub errors: u64,
    #[serde(default)]
    pub fails: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DeviceVisits {
    pub device: String,
    #[serde(default)]
    pub visits: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SourceVisits {
    pub source: String,
    #[serde(default)]
    pub visits: u64,
}

/// Mean request duration for a path, in milliseconds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PathDuration {
    pub path: String,
    #[serde(default)]
    pub duration: f64,
}

/// Sparkline bucket for a single-stat card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HitPoint {
    pub date: String,
    #[serde(default)]
    pub hits: u64,
}

/// Bucket labels plus one value column per named series, ready for a chart.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SeriesTable {
    /// Full label per bucket, shown in tooltips. Distinct for every bucket.
    pub labels: Vec<String>,
    /// Short axis tick per bucket, parallel to `labels`.
    pub ticks: Vec<String>,
    pub columns: Vec<(&'static str, Vec<f64>)>,
}

impl SeriesTable {
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(column, _)| *column == name)
            .map(|(_, values)| values.as_slice())
    }
}

/// Tooltip labels and tick labels for each bucket.
fn bucket_labels<'a>(
    dates: impl Iterator<Item = &'a str>,
    interval: Interval,
) -> (Vec<String>, Vec<String>) {
    dates
        .map(|date| (interval.format_bucket_tooltip(date), interval.format_bucket(date)))
        .unzip()
}

pub fn visits_table(points: &[VisitPoint], interval: Interval) -> SeriesTable {
    let (labels, ticks) = bucket_labels(points.iter().map(|p| p.date.as_str()), interval);
    SeriesTable {
        labels,
        ticks,
        columns: vec![
            ("total", points.iter().map(|p| p.total as f64).collect()),
            ("unique", points.iter().map(|p| p.unique as f64).collect()),
        ],
    }
}

pub fn requests_table(points: &[RequestPoint], interval: Interval) -> SeriesTable {
    let (labels, ticks) = bucket_labels(points.iter().map(|p| p.date.as_str()), interval);
    SeriesTable {
        labels,
        ticks,
        columns: vec![("hits", points.iter().map(|p| p.hits as f64).collect())],
    }
}

pub fn status_table(points: &[StatusPoint], interval: Interval) -> SeriesTable {
    let (labels, ticks) = bucket_labels(points.iter().map(|p| p.date.as_str()), interval);
    SeriesTable {
        labels,
        ticks,
        columns: vec![
            ("oks", points.iter().map(|p| p.oks as f64).collect()),
            ("redirs", points.iter().map(|p| p.redirs as f64).collect()),
            ("errors", points.iter().map(|p| p.errors as f64).collect()),
            ("fails", points.iter().map(|p| p.fails as f64).collect()),
        ],
    }
}

/// Ranked rows for a horizontal bar chart. A category axis draws bottom-up,
/// so rows are reversed to keep the first supplied row on top.
pub fn ranked_rows<'a>(rows: impl DoubleEndedIterator<Item = (&'a str, f64)>) -> (Vec<String>, Vec<f64>) {
    rows.rev().map(|(label, value)| (label.to_string(), value)).unzip()
}

pub fn total_visits(devices: &[DeviceVisits]) -> u64 {
    devices.iter().map(|d| d.visits).sum()
}
