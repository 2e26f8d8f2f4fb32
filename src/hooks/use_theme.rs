use gloo::events::EventListener;
use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use web_sys::wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::dom::{document_element, notify_theme_change};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Light/dark preference
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    System, // Follow system preference
}

impl ThemeMode {
    /// Resolves `System` against the browser's preference.
    pub fn resolve(self, system_prefers_dark: bool) -> Self {
        match self {
            Self::System if system_prefers_dark => Self::Dark,
            Self::System => Self::Light,
            other => other,
        }
    }

    /// The explicit mode a toggle press switches to.
    pub fn toggled(self, system_prefers_dark: bool) -> Self {
        match self.resolve(system_prefers_dark) {
            Self::Dark => Self::Light,
            _ => Self::Dark,
        }
    }
}

/// Handle returned by use_theme_mode hook
#[derive(Clone, PartialEq)]
pub struct ThemeModeHandle {
    pub effective: ThemeMode, // Resolved mode, never System
    pub toggle: Callback<()>,
}

/// Custom hook for light/dark mode
#[hook]
pub fn use_theme_mode() -> ThemeModeHandle {
    let mode = use_state(|| load_mode().unwrap_or(ThemeMode::System));
    let system_dark = use_state(system_prefers_dark);

    let effective = mode.resolve(*system_dark);

    // Effect: Apply mode to DOM
    use_effect_with(effective, move |effective| {
        apply_mode(*effective);
        || ()
    });

    // Effect: Listen to system preference changes
    {
        let setter = system_dark.setter();
        use_effect_with((), move |_| {
            let listener = media_query_listener(setter);
            move || drop(listener)
        });
    }

    // Effect: Persist preference
    use_effect_with(*mode, move |mode| {
        save_mode(*mode);
        || ()
    });

    let toggle = {
        let system_dark = *system_dark;
        Callback::from(move |_| mode.set(mode.toggled(system_dark)))
    };

    ThemeModeHandle { effective, toggle }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Toggle the `dark` class on `<html>` and tell charts to redraw
fn apply_mode(mode: ThemeMode) {
    if let Some(html) = document_element() {
        let dark = mode == ThemeMode::Dark;
        if let Err(e) = html.class_list().toggle_with_force("dark", dark) {
            web_sys::console::warn_1(&format!("Failed to apply theme mode: {e:?}").into());
        }
    }
    notify_theme_change();
}

fn load_mode() -> Option<ThemeMode> {
    gloo_storage::LocalStorage::get(Config::THEME_MODE_KEY).ok()
}

fn save_mode(mode: ThemeMode) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::THEME_MODE_KEY, mode) {
        web_sys::console::warn_1(&format!("Failed to save theme mode: {e:?}").into());
    }
}

/// Setup MediaQueryList event listener for system preference changes
fn media_query_listener(setter: UseStateSetter<bool>) -> Option<EventListener> {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .and_then(|mq| mq.dyn_into::<web_sys::EventTarget>().ok())
        .map(|target| {
            EventListener::new(&target, "change", move |_event| {
                setter.set(system_prefers_dark());
            })
        })
}
