use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::EventTarget;

/// Listens for `event_type` on `target` and runs `callback` once the events
/// stop arriving for `delay_ms`.
///
/// Every new event cancels the pending timeout and schedules a fresh one.
///
/// The returned `EventListener` must be kept alive for as long as the
/// callback should fire. Dropping it removes the listener.
///
/// # Example
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = window().map(|window| {
///         debounced_listener(&window, "resize", 150, move || redraw())
///     });
///     move || drop(listener)
/// });
/// ```
pub fn debounced_listener<F>(
    target: &EventTarget,
    event_type: &'static str,
    delay_ms: u32,
    callback: F,
) -> EventListener
where
    F: Fn() + 'static,
{
    let timeout_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    EventListener::new(target, event_type, move |_| {
        // Cancel pending timeout
        if let Some(handle) = timeout_handle.borrow_mut().take() {
            drop(handle);
        }

        let cb = callback.clone();
        let handle = Timeout::new(delay_ms, move || cb());
        *timeout_handle.borrow_mut() = Some(handle);
    })
}
