use std::cell::RefCell;
use std::rc::Rc;
use storefront_core::{wheel_scroll_delta, Storefront, WHEEL_SCROLL_SCALE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive the catalog carousel from the mouse wheel / trackpad.
///
/// Registered as a non-passive listener so the page itself does not scroll.
pub fn wire_wheel(storefront: Rc<RefCell<Storefront>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let raw = wheel_scroll_delta(ev.delta_x() as f32, ev.delta_y() as f32);
        storefront.borrow_mut().scroll(raw * WHEEL_SCROLL_SCALE);
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}
