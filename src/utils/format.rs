/// SI suffixes used by [`n_formatter`], smallest first.
const SI_STEPS: [(f64, &str); 7] = [
    (1.0, ""),
    (1e3, "k"),
    (1e6, "M"),
    (1e9, "G"),
    (1e12, "T"),
    (1e15, "P"),
    (1e18, "E"),
];

/// Compact number: `1234` -> `1.23k` with two digits. Trailing zeros after the
/// decimal point are dropped; anything below 1 renders as `0`.
pub fn n_formatter(value: f64, digits: usize) -> String {
    let Some((step, suffix)) = SI_STEPS.iter().rev().find(|(step, _)| value >= *step) else {
        return "0".to_string();
    };

    let scaled = format!("{:.*}", digits, value / step);
    format!("{}{}", trim_fraction(&scaled), suffix)
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Headline value of a single-stat card. `time` stats arrive in milliseconds.
pub fn format_stat(value: f64, unit: &str) -> String {
    if unit == "time" {
        if value < 60_000.0 {
            format!("{:.2}s", value / 1000.0)
        } else {
            format!("{:.2}m", value / 60_000.0)
        }
    } else {
        n_formatter(value, 2)
    }
}

/// Lower-case, dash separated form of a title, for element ids.
pub fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
