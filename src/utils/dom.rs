use crate::config::Config;
use web_sys::{Element, Event};

/// The page's `<html>` element, where theme classes live.
pub fn document_element() -> Option<Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

pub fn html_has_class(class: &str) -> bool {
    document_element().is_some_and(|html| html.class_list().contains(class))
}

/// Whether the page is currently in dark mode.
pub fn is_dark_mode() -> bool {
    html_has_class("dark")
}

/// Tells mounted charts that colors changed so they redraw.
pub fn notify_theme_change() {
    let Some(window) = web_sys::window() else {
        return;
    };
    match Event::new(Config::THEME_CHANGE_EVENT) {
        Ok(event) => {
            if let Err(e) = window.dispatch_event(&event) {
                gloo::console::warn!(format!("Failed to broadcast theme change: {e:?}"));
            }
        }
        Err(e) => gloo::console::warn!(format!("Failed to create theme change event: {e:?}")),
    }
}

/// Reads a custom property from the computed style of `<html>`.
pub fn css_variable(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let html = document_element()?;
    let style = window.get_computed_style(&html).ok().flatten()?;
    let value = style.get_property_value(name).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
