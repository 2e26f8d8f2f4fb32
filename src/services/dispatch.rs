use wasm_bindgen::JsValue;
use web_sys::js_sys::{Function, JSON};
use yew::Callback;

use crate::models::{error::AppError, events::HostEvent};

/// Wraps the host's `pushEvent(name, payload)` function as a widget callback.
///
/// Failures are logged; the widget keeps its local state either way.
pub fn js_dispatcher(push_event: Function) -> Callback<HostEvent> {
    Callback::from(move |event: HostEvent| {
        if let Err(e) = dispatch(&push_event, &event) {
            web_sys::console::error_1(&e.to_string().into());
        }
    })
}

/// Callback used when the host did not supply a dispatch function: events are logged only.
pub fn console_dispatcher() -> Callback<HostEvent> {
    Callback::from(|event: HostEvent| {
        gloo::console::debug!(format!("{} {}", event.name(), event.payload()));
    })
}

fn dispatch(push_event: &Function, event: &HostEvent) -> Result<(), AppError> {
    let payload = JSON::parse(&event.payload().to_string())
        .map_err(|e| AppError::DispatchError(format!("{}: {e:?}", event.name())))?;

    push_event
        .call2(&JsValue::NULL, &JsValue::from_str(event.name()), &payload)
        .map(|_| ())
        .map_err(|e| AppError::DispatchError(format!("{}: {e:?}", event.name())))
}
