use gloo::events::EventListener;
use web_sys::wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use crate::models::hotkey::Hotkey;

/// Tags whose key presses belong to the user's typing, not to shortcuts
const EDITABLE_TAGS: [&str; 3] = ["INPUT", "TEXTAREA", "SELECT"];

/// Listens for key chords on the document.
///
/// `resolve` maps a pressed chord to a value; when it returns `Some`, the
/// browser default is suppressed and `on_hotkey` receives the value. Key
/// presses inside form fields and auto-repeats are ignored.
#[hook]
pub fn use_hotkeys<T>(resolve: fn(&Hotkey) -> Option<T>, on_hotkey: Callback<T>)
where
    T: 'static,
{
    // Keep the newest callback without re-registering the listener every render
    let latest = use_mut_ref(|| on_hotkey.clone());
    *latest.borrow_mut() = on_hotkey;

    use_effect_with((), move |_| {
        let listener = web_sys::window()
            .and_then(|w| w.document())
            .map(|document| {
                EventListener::new(&document, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if event.repeat() || typed_into_field(event) {
                        return;
                    }

                    let hotkey = Hotkey::from_event_parts(
                        &event.key(),
                        event.ctrl_key(),
                        event.alt_key(),
                        event.shift_key(),
                        event.meta_key(),
                    );
                    if let Some(value) = resolve(&hotkey) {
                        event.prevent_default();
                        latest.borrow().emit(value);
                    }
                })
            });

        move || drop(listener)
    });
}

fn typed_into_field(event: &KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .is_some_and(|element| {
            let tag = element.tag_name().to_uppercase();
            EDITABLE_TAGS.contains(&tag.as_str()) || element.has_attribute("contenteditable")
        })
}
