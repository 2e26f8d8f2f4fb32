use yew::prelude::*;

use crate::models::{events::HostEvent, interval::Interval};
use crate::utils::shared::SharedStore;

thread_local! {
    static INTERVAL: SharedStore<Interval> = SharedStore::new(Interval::default());
}

/// The page-wide interval store. Every chart mounted on the page sees the same one.
pub fn interval_store() -> SharedStore<Interval> {
    INTERVAL.with(SharedStore::clone)
}

/// Handle returned by `use_shared_interval` hook
#[derive(Clone, PartialEq)]
pub struct IntervalHandle {
    pub interval: Interval,
    pub set_interval: Callback<Interval>,
}

/// Interval shared by every time-series chart, even across separately mounted roots
#[hook]
pub fn use_shared_interval() -> IntervalHandle {
    let interval = use_state(|| interval_store().get());

    // Effect: Follow writes made by sibling widgets
    {
        let setter = interval.setter();
        use_effect_with((), move |_| {
            let subscription =
                interval_store().subscribe(Callback::from(move |value| setter.set(value)));
            move || drop(subscription)
        });
    }

    let set_interval = Callback::from(|value| interval_store().set(value));

    IntervalHandle {
        interval: *interval,
        set_interval,
    }
}

/// Shared interval plus a change callback that also reports `set_interval` to the host.
///
/// The event goes out on every selection, including re-selecting the current value.
#[hook]
pub fn use_interval_dispatch(push_event: Callback<HostEvent>) -> (Interval, Callback<Interval>) {
    let handle = use_shared_interval();
    let on_change = interval_change(handle.set_interval, push_event);

    (handle.interval, on_change)
}

/// Writes the chosen interval through `set_interval`, then reports it to the host.
/// Nothing is deduplicated: every call emits `set_interval`.
pub fn interval_change(
    set_interval: Callback<Interval>,
    push_event: Callback<HostEvent>,
) -> Callback<Interval> {
    Callback::from(move |value: Interval| {
        set_interval.emit(value);
        push_event.emit(HostEvent::SetInterval(value));
    })
}
