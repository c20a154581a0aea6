use crate::constants::{CATALOG_BUTTON_ID, NEXT_BUTTON_ID, PREVIOUS_BUTTON_ID};
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use storefront_core::{ClickOutcome, Storefront};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas clicks open a product from the catalog, or pick a color in the
/// product view.
pub fn wire_canvas_click(canvas: web::HtmlCanvasElement, storefront: Rc<RefCell<Storefront>>) {
    let canvas_for_listener = canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas);
        let outcome = storefront.borrow_mut().click(pos.x, pos.y);
        match outcome {
            ClickOutcome::OpenedProduct(i) => log::info!("[click] open product {}", i),
            ClickOutcome::Recolored(c) => {
                log::info!("[click] color ({:.2},{:.2},{:.2})", c[0], c[1], c[2])
            }
            ClickOutcome::Missed => {}
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_chrome_buttons(document: &web::Document, storefront: &Rc<RefCell<Storefront>>) {
    let sf = storefront.clone();
    dom::add_click_listener(document, CATALOG_BUTTON_ID, move || {
        if let Err(e) = sf.borrow_mut().open_catalog() {
            log::error!("[chrome] cannot open catalog: {}", e);
        }
    });

    let sf = storefront.clone();
    dom::add_click_listener(document, PREVIOUS_BUTTON_ID, move || {
        sf.borrow_mut().previous_product();
    });

    let sf = storefront.clone();
    dom::add_click_listener(document, NEXT_BUTTON_ID, move || {
        sf.borrow_mut().next_product();
    });
}
