use super::error::AppError;
use std::fmt;

/// A keyboard shortcut such as `t`, `ctrl+m` or `minus`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    /// Lower-cased `KeyboardEvent.key` value.
    pub key: String,
}

impl Hotkey {
    /// Parses `modifier+...+key`. Key names `minus`, `equal` and `space` map to their characters.
    pub fn parse(chord: &str) -> Result<Self, AppError> {
        let mut hotkey = Self {
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
            key: String::new(),
        };

        let parts: Vec<&str> = chord.split('+').map(str::trim).collect();
        let Some((key, modifiers)) = parts.split_last() else {
            return Err(AppError::InvalidHotkey(chord.to_string()));
        };

        for modifier in modifiers {
            match modifier.to_lowercase().as_str() {
                "ctrl" | "control" => hotkey.ctrl = true,
                "alt" | "option" => hotkey.alt = true,
                "shift" => hotkey.shift = true,
                "meta" | "cmd" => hotkey.meta = true,
                _ => return Err(AppError::InvalidHotkey(chord.to_string())),
            }
        }

        hotkey.key = match key.to_lowercase().as_str() {
            "" => return Err(AppError::InvalidHotkey(chord.to_string())),
            "minus" => "-".to_string(),
            "equal" => "=".to_string(),
            "space" => " ".to_string(),
            other => other.to_string(),
        };

        Ok(hotkey)
    }

    /// Builds the chord a key event represents.
    pub fn from_event_parts(key: &str, ctrl: bool, alt: bool, shift: bool, meta: bool) -> Self {
        Self {
            ctrl,
            alt,
            shift,
            meta,
            key: key.to_lowercase(),
        }
    }

    /// True for a bare key press with no modifiers held.
    pub fn is_plain(&self) -> bool {
        !(self.ctrl || self.alt || self.shift || self.meta)
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (held, name) in [
            (self.ctrl, "ctrl+"),
            (self.alt, "alt+"),
            (self.shift, "shift+"),
            (self.meta, "meta+"),
        ] {
            if held {
                f.write_str(name)?;
            }
        }
        f.write_str(&self.key)
    }
}
