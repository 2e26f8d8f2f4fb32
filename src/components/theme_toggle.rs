use yew::prelude::*;

use crate::hooks::use_theme::{ThemeMode, use_theme_mode};

/// Light/dark toggle button
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme_mode();

    let (icon, label) = match theme.effective {
        ThemeMode::Dark => ("☀️", "Switch to light mode"),
        ThemeMode::Light | ThemeMode::System => ("🌙", "Switch to dark mode"),
    };

    let onclick = {
        let toggle = theme.toggle;
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <button
            class="icon-button theme-toggle"
            {onclick}
            aria-label={label}
            title={label}
        >
            {icon}
        </button>
    }
}
