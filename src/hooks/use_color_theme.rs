use gloo_storage::{LocalStorage, Storage};
use yew::prelude::*;

use crate::config::Config;
use crate::models::color_theme::{ColorTheme, DEFAULT_THEME};
use crate::utils::dom::{document_element, notify_theme_change};

/// Handle returned by `use_color_theme` hook
#[derive(Clone, PartialEq)]
pub struct ColorThemeHandle {
    /// Name of the active theme
    pub selected: AttrValue,
    /// Selects a theme by name; unknown names are ignored
    pub select: Callback<AttrValue>,
}

/// Custom hook for the page accent palette with localStorage persistence
#[hook]
pub fn use_color_theme() -> ColorThemeHandle {
    let selected = use_state(|| AttrValue::from(DEFAULT_THEME));

    // Effect: Restore the saved theme once mounted
    {
        let selected = selected.clone();
        use_effect_with((), move |_| {
            let theme = load_color_theme()
                .as_deref()
                .and_then(ColorTheme::from_stored)
                .unwrap_or_else(ColorTheme::default_theme);
            apply_color_theme(theme);
            selected.set(AttrValue::from(theme.name));
            || ()
        });
    }

    let select = {
        let selected = selected.clone();
        Callback::from(move |name: AttrValue| {
            let Some(theme) = ColorTheme::find(&name) else {
                return;
            };
            selected.set(AttrValue::from(theme.name));
            apply_color_theme(theme);
        })
    };

    ColorThemeHandle {
        selected: (*selected).clone(),
        select,
    }
}

/// Swap the theme class on `<html>`, persist the choice and tell charts to redraw
fn apply_color_theme(theme: &ColorTheme) {
    if let Some(html) = document_element() {
        let classes = html.class_list();
        for class in ColorTheme::all_css_classes() {
            if let Err(e) = classes.remove_1(class) {
                web_sys::console::warn_1(&format!("Failed to clear color theme: {e:?}").into());
            }
        }
        if let Err(e) = classes.add_1(theme.css_class) {
            web_sys::console::warn_1(&format!("Failed to apply color theme: {e:?}").into());
        }
    }

    save_color_theme(theme.name);
    notify_theme_change();
}

/// Load the raw theme name from localStorage
fn load_color_theme() -> Option<String> {
    match LocalStorage::raw().get_item(Config::COLOR_THEME_KEY) {
        Ok(value) => value,
        Err(e) => {
            web_sys::console::warn_1(&format!("Failed to load color theme: {e:?}").into());
            None
        }
    }
}

/// Save the bare theme name to localStorage, unquoted
fn save_color_theme(name: &str) {
    if let Err(e) = LocalStorage::raw().set_item(Config::COLOR_THEME_KEY, name) {
        web_sys::console::warn_1(&format!("Failed to save color theme: {e:?}").into());
    }
}
