use super::{error::AppError, hotkey::Hotkey};

/// An accent palette applied to the page through a CSS class on `<html>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTheme {
    pub name: &'static str,
    pub label: &'static str,
    pub css_class: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

pub const DEFAULT_THEME: &str = "blue";

pub const COLOR_THEMES: [ColorTheme; 12] = [
    ColorTheme {
        name: "zinc",
        label: "Zinc",
        css_class: "theme-zinc",
        primary: "hsl(240 6% 10%)",
        secondary: "hsl(240 5% 96%)",
        accent: "hsl(240 5% 96%)",
    },
    ColorTheme {
        name: "slate",
        label: "Slate",
        css_class: "theme-slate",
        primary: "hsl(215.4 16.3% 46.9%)",
        secondary: "hsl(210 40% 96%)",
        accent: "hsl(210 40% 96%)",
    },
    ColorTheme {
        name: "stone",
        label: "Stone",
        css_class: "theme-stone",
        primary: "hsl(24 10% 10%)",
        secondary: "hsl(60 9% 98%)",
        accent: "hsl(60 9% 98%)",
    },
    ColorTheme {
        name: "gray",
        label: "Gray",
        css_class: "theme-gray",
        primary: "hsl(220.9 39.3% 11%)",
        secondary: "hsl(220 14.3% 95.9%)",
        accent: "hsl(220 14.3% 95.9%)",
    },
    ColorTheme {
        name: "neutral",
        label: "Neutral",
        css_class: "theme-neutral",
        primary: "hsl(0 0% 9%)",
        secondary: "hsl(0 0% 96.1%)",
        accent: "hsl(0 0% 96.1%)",
    },
    ColorTheme {
        name: "red",
        label: "Red",
        css_class: "theme-red",
        primary: "hsl(0 72.2% 50.6%)",
        secondary: "hsl(0 0% 96.1%)",
        accent: "hsl(0 0% 96.1%)",
    },
    ColorTheme {
        name: "rose",
        label: "Rose",
        css_class: "theme-rose",
        primary: "hsl(346.8 77.2% 49.8%)",
        secondary: "hsl(0 0% 96.1%)",
        accent: "hsl(0 0% 96.1%)",
    },
    ColorTheme {
        name: "orange",
        label: "Orange",
        css_class: "theme-orange",
        primary: "hsl(24.6 95% 53.1%)",
        secondary: "hsl(0 0% 96.1%)",
        accent: "hsl(0 0% 96.1%)",
    },
    ColorTheme {
        name: "green",
        label: "Green",
        css_class: "theme-green",
        primary: "hsl(142.1 76.2% 36.3%)",
        secondary: "hsl(0 0% 96.1%)",
        accent: "hsl(0 0% 96.1%)",
    },
    ColorTheme {
        name: "blue",
        label: "Blue",
        css_class: "theme-blue",
        primary: "hsl(221.2 83.2% 53.3%)",
        secondary: "hsl(0 0% 96.1%)",
        accent: "hsl(0 0% 96.1%)",
    },
    ColorTheme {
        name: "yellow",
        label: "Yellow",
        css_class: "theme-yellow",
        primary: "hsl(47.9 95.8% 53.1%)",
        secondary: "hsl(0 0% 96.1%)",
        accent: "hsl(0 0% 96.1%)",
    },
    ColorTheme {
        name: "violet",
        label: "Violet",
        css_class: "theme-violet",
        primary: "hsl(262.1 83.3% 57.8%)",
        secondary: "hsl(0 0% 96.1%)",
        accent: "hsl(0 0% 96.1%)",
    },
];

/// Shortcut keys in table order: digits first, then `-` and `=`.
const SHORTCUT_KEYS: [&str; 12] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "="];

impl ColorTheme {
    pub fn find(name: &str) -> Option<&'static Self> {
        COLOR_THEMES.iter().find(|theme| theme.name == name)
    }

    /// Strict lookup for callers that need to report a bad name.
    pub fn parse(name: &str) -> Result<&'static Self, AppError> {
        Self::find(name.trim()).ok_or_else(|| AppError::UnknownTheme(name.to_string()))
    }

    /// Theme named by a raw `localStorage` value. Tolerates the JSON-quoted
    /// form (`"zinc"`) written by older builds.
    pub fn from_stored(raw: &str) -> Option<&'static Self> {
        Self::find(raw.trim().trim_matches('"'))
    }

    pub fn default_theme() -> &'static Self {
        // Table always carries the default entry.
        Self::find(DEFAULT_THEME).unwrap_or(&COLOR_THEMES[9])
    }

    /// Keyboard shortcut shown in the swatch corner, empty past the twelfth entry.
    pub fn shortcut(&self) -> &'static str {
        COLOR_THEMES
            .iter()
            .position(|theme| theme.name == self.name)
            .and_then(|index| SHORTCUT_KEYS.get(index).copied())
            .unwrap_or("")
    }

    pub fn from_hotkey(hotkey: &Hotkey) -> Option<&'static Self> {
        if !hotkey.is_plain() {
            return None;
        }
        SHORTCUT_KEYS
            .iter()
            .position(|key| *key == hotkey.key)
            .and_then(|index| COLOR_THEMES.get(index))
    }

    /// Every theme class, so a caller can clear them all before applying one.
    pub fn all_css_classes() -> impl Iterator<Item = &'static str> {
        COLOR_THEMES.iter().map(|theme| theme.css_class)
    }
}
