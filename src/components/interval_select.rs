use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::interval::Interval;

#[derive(Properties, PartialEq)]
pub struct IntervalSelectProps {
    pub interval: Interval,
    pub on_change: Callback<Interval>,
}

/// Interval dropdown shown in the header of time-series charts
#[function_component(IntervalSelect)]
pub fn interval_select(props: &IntervalSelectProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(interval) = target.value().parse::<Interval>() {
                callback.emit(interval);
            }
        })
    };

    html! {
        <select
            class="interval-select"
            onchange={on_change}
            aria-label="Select a value"
            title="Interval"
        >
            {
                Interval::ALL.iter().map(|i| {
                    let selected = *i == props.interval;
                    html! {
                        <option value={i.as_str()} {selected}>{i.label()}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
