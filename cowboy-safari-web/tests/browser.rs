#![cfg(target_arch = "wasm32")]

use cowboy_safari_web::app::App;
use cowboy_safari_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id(cowboy_safari_web::APP_ROOT_ID) {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id(cowboy_safari_web::APP_ROOT_ID);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn next_tick() {
    let promise = js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL);
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[wasm_bindgen_test]
async fn skip_link_points_to_main_landmark() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    next_tick().await;
    let doc = dom::document().expect("document");
    let skip = doc
        .query_selector("a.skip-link")
        .expect("query skip link")
        .expect("skip link exists");
    assert_eq!(skip.get_attribute("href").as_deref(), Some("#main"));
    assert!(doc.get_element_by_id("main").is_some());
}

#[wasm_bindgen_test]
async fn controls_toggle_opens_the_panel() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    next_tick().await;
    let doc = dom::document().expect("document");
    let toggle: HtmlElement = doc
        .query_selector("button[aria-controls='controls-panel']")
        .expect("query toggle")
        .expect("toggle exists")
        .dyn_into()
        .expect("toggle is an element");
    toggle.click();
    next_tick().await;
    assert!(doc.get_element_by_id("controls-panel").is_some());
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
fn data_layer_receives_events() {
    use cowboy_safari_core::AnalyticsEvent;
    let sink = cowboy_safari_web::browser::analytics_sink();
    AnalyticsEvent::iframe_view("Cowboy Safari").record_to(sink.as_ref());
    let window = dom::window().expect("window");
    let layer = js_sys::Reflect::get(&window, &"dataLayer".into()).expect("dataLayer");
    let layer: js_sys::Array = layer.dyn_into().expect("dataLayer is an array");
    assert!(layer.length() >= 1);
}
