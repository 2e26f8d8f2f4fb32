use super::dom::{css_variable, is_dark_mode};

/// Colors handed to every chart builder.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPalette {
    /// `--chart-1` through `--chart-5`.
    pub series: [String; 5],
    pub text: &'static str,
    pub axis: &'static str,
    pub grid: &'static str,
    pub dark: bool,
}

const LIGHT_SERIES: [&str; 5] = ["#e76e50", "#2a9d90", "#274754", "#e8c468", "#f4a462"];
const DARK_SERIES: [&str; 5] = ["#2662d9", "#2eb88a", "#e88c30", "#af57db", "#e23670"];

impl ChartPalette {
    pub fn fallback(dark: bool) -> Self {
        let series = if dark { DARK_SERIES } else { LIGHT_SERIES };
        let (text, axis, grid) = if dark {
            ("#e4e4e7", "#a1a1aa", "#404040")
        } else {
            ("#1f2937", "#6b7280", "#e5e7eb")
        };

        Self {
            series: series.map(str::to_string),
            text,
            axis,
            grid,
            dark,
        }
    }

    /// Palette from the page's `--chart-N` variables, falling back per slot.
    pub fn from_document() -> Self {
        let mut palette = Self::fallback(is_dark_mode());
        for (index, slot) in palette.series.iter_mut().enumerate() {
            if let Some(color) = css_variable(&format!("--chart-{}", index + 1))
                .as_deref()
                .and_then(css_color)
            {
                *slot = color;
            }
        }
        palette
    }

    /// Color for `--chart-n` (1-based), wrapping past the fifth.
    pub fn chart(&self, n: usize) -> &str {
        &self.series[n.saturating_sub(1) % self.series.len()]
    }
}

/// Converts a custom-property value into a color ECharts understands.
/// Bare HSL triplets (`12 76% 61%`) become `hsl(12, 76%, 61%)`.
pub fn css_color(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with('#') || raw.contains('(') {
        return Some(raw.to_string());
    }

    let parts: Vec<&str> = raw.split_whitespace().collect();
    match parts.as_slice() {
        [h, s, l] if s.ends_with('%') && l.ends_with('%') && h.parse::<f64>().is_ok() => {
            Some(format!("hsl({h}, {s}, {l})"))
        }
        _ => None,
    }
}
