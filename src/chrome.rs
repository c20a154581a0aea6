use crate::constants::{CATALOG_BUTTON_ID, ITEM_TITLE_ID, NEXT_BUTTON_ID, PREVIOUS_BUTTON_ID};
use crate::dom;
use storefront_core::ChromeState;
use web_sys as web;

/// Reflect the active view's chrome onto the page controls.
pub fn apply(document: &web::Document, chrome: &ChromeState) {
    dom::set_visible(document, CATALOG_BUTTON_ID, chrome.catalog_button);
    dom::set_visible(document, PREVIOUS_BUTTON_ID, chrome.previous_button);
    dom::set_visible(document, NEXT_BUTTON_ID, chrome.next_button);
    match chrome.item_title {
        Some(title) => {
            dom::set_text(document, ITEM_TITLE_ID, title);
            dom::set_visible(document, ITEM_TITLE_ID, true);
        }
        None => dom::set_visible(document, ITEM_TITLE_ID, false),
    }
}
