#![forbid(unsafe_code)]
//! Yew front end for the Cowboy Safari fan hub.
//!
//! The same component tree is rendered to HTML by the site builder (via [`ssr`])
//! and hydrated in the browser by [`start`].

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod browser;
pub mod components;
pub mod context;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod pages;
pub mod paths;
pub mod router;
pub mod ssr;

/// Id of the element the prerendered markup is written into and hydrated from.
pub const APP_ROOT_ID: &str = "app";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    match dom::app_root() {
        Some(root) => yew::Renderer::<app::App>::with_root(root).hydrate(),
        None => {
            log::warn!("#app root missing; rendering into body");
            yew::Renderer::<app::App>::new().render()
        }
    };
}
