use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_hotkeys::use_hotkeys;
use crate::models::{
    date_range::{DatePreset, DateRange, resolve_preset, today},
    events::HostEvent,
};

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    /// Range the host is currently showing
    pub date_range: DateRange,
    #[prop_or_default]
    pub push_event: Callback<HostEvent>,
}

/// Range picker with named presets, keyboard shortcuts and a custom from/to pair
#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let range = use_state(|| props.date_range);
    let open = use_state(|| false);

    {
        let range = range.clone();
        use_effect_with(props.date_range, move |host_range| {
            range.set(*host_range);
        });
    }

    // Picking a range updates the button label and reports it to the host
    let choose = {
        let range = range.clone();
        let push_event = props.push_event.clone();
        Callback::from(move |chosen: DateRange| {
            range.set(chosen);
            push_event.emit(HostEvent::SetDate(chosen));
        })
    };

    let select_preset = {
        let choose = choose.clone();
        Callback::from(move |name: String| choose.emit(resolve_preset(&name, today())))
    };

    {
        let choose = choose.clone();
        use_hotkeys(
            DatePreset::from_hotkey,
            Callback::from(move |preset: DatePreset| choose.emit(preset.resolve(today()))),
        );
    }

    let toggle_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let on_preset = {
        let select_preset = select_preset.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let value = target.value();
            if !value.is_empty() {
                select_preset.emit(value);
            }
        })
    };

    // Editing one bound keeps the other; reversed bounds are swapped by `DateRange::new`
    let on_custom = |is_from: bool| {
        let current = *range;
        let choose = choose.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Ok(day) = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d") else {
                return;
            };
            let chosen = if is_from {
                DateRange::new(day, current.end())
            } else {
                DateRange::new(current.start(), day)
            };
            choose.emit(chosen);
        })
    };

    html! {
        <div class="date-range-picker">
            <button
                id="date"
                class="outline-button date-button"
                onclick={toggle_open}
                aria-expanded={open.to_string()}
            >
                <span class="calendar-icon">{"📅"}</span>
                {range.display()}
            </button>
            if *open {
                <div class="popover">
                    <select class="preset-select" onchange={on_preset} aria-label="Select a preset">
                        <option value="" selected=true disabled=true>{"Select"}</option>
                        {
                            DatePreset::MENU_GROUPS.iter().enumerate().map(|(i, group)| html! {
                                <>
                                    if i > 0 {
                                        <hr class="select-separator" />
                                    }
                                    { for group.iter().map(|preset| html! {
                                        <option value={preset.as_str()} title={preset.hotkey()}>
                                            {preset.label()}
                                        </option>
                                    }) }
                                </>
                            }).collect::<Html>()
                        }
                    </select>
                    <div class="custom-range">
                        <label>
                            {"From"}
                            <input
                                type="date"
                                value={range.start().format("%Y-%m-%d").to_string()}
                                onchange={on_custom(true)}
                            />
                        </label>
                        <label>
                            {"To"}
                            <input
                                type="date"
                                value={range.end().format("%Y-%m-%d").to_string()}
                                onchange={on_custom(false)}
                            />
                        </label>
                    </div>
                </div>
            }
        </div>
    }
}
