use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::APP_ROOT_ID;

/// The global `window`, when running in a browsing context.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Mount point the prerendered markup was written into.
#[must_use]
pub fn app_root() -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(APP_ROOT_ID))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.name()) + ": " + &String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
