use yew::prelude::*;

use crate::hooks::{use_color_theme::use_color_theme, use_hotkeys::use_hotkeys};
use crate::models::{
    color_theme::{COLOR_THEMES, ColorTheme},
    hotkey::Hotkey,
};

fn theme_for_hotkey(hotkey: &Hotkey) -> Option<&'static str> {
    ColorTheme::from_hotkey(hotkey).map(|theme| theme.name)
}

/// Accent palette picker; shortcuts 1-9, 0, - and = select themes in order
#[function_component(ColorSelector)]
pub fn color_selector() -> Html {
    let theme = use_color_theme();
    let open = use_state(|| false);

    {
        let select = theme.select.clone();
        use_hotkeys(
            theme_for_hotkey,
            Callback::from(move |name: &'static str| select.emit(AttrValue::from(name))),
        );
    }

    let toggle_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="color-selector">
            <button
                class="icon-button"
                onclick={toggle_open}
                aria-label="Select color theme"
                aria-expanded={open.to_string()}
                title="Select color theme"
            >
                {"🎨"}
            </button>
            if *open {
                <div class="dropdown-menu">
                    <div class="dropdown-heading">{"Color Theme"}</div>
                    <div class="swatch-grid">
                        { for COLOR_THEMES.iter().map(|t| swatch(t, &theme.selected, &theme.select)) }
                    </div>
                </div>
            }
        </div>
    }
}

fn swatch(theme: &'static ColorTheme, selected: &AttrValue, select: &Callback<AttrValue>) -> Html {
    let is_selected = selected.as_str() == theme.name;
    let onclick = {
        let select = select.clone();
        Callback::from(move |_: MouseEvent| select.emit(AttrValue::from(theme.name)))
    };
    let shortcut = theme.shortcut();

    html! {
        <button
            key={theme.name}
            class={classes!("swatch", is_selected.then_some("selected"))}
            {onclick}
            title={format!("{} ({})", theme.label, shortcut)}
        >
            <span class="swatch-dots">
                { for [theme.primary, theme.secondary, theme.accent].into_iter().map(|color| html! {
                    <span class="swatch-dot" style={format!("background-color: {color}")} />
                }) }
            </span>
            if is_selected {
                <span class="swatch-check">{"✓"}</span>
            }
            <span class="swatch-shortcut">{shortcut}</span>
            <span class="sr-only">{theme.label}</span>
        </button>
    }
}
