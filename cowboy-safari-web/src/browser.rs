//! Browser glue for the hero panel: fullscreen, share, timers, visibility and
//! the `dataLayer` analytics sink.
//!
//! Outside wasm every capability reports itself unavailable and timers or
//! observers are never created, so server rendering and native tests exercise
//! the same component code without touching `web-sys`.

use cowboy_safari_core::{AnalyticsSink, FullscreenTarget, ShareCapabilities};
use std::rc::Rc;
use std::time::Duration;
use yew::NodeRef;

pub use imp::{Timeout, VisibilityObserver};

/// Sink that feeds the page's tag manager, or a no-op outside the browser.
#[must_use]
pub fn analytics_sink() -> Rc<dyn AnalyticsSink> {
    imp::analytics_sink()
}

/// Fullscreen target for the element behind `node`.
#[must_use]
pub fn fullscreen_target(node: &NodeRef) -> Box<dyn FullscreenTarget> {
    imp::fullscreen_target(node)
}

#[must_use]
pub fn share_capabilities() -> Box<dyn ShareCapabilities> {
    imp::share_capabilities()
}

/// Run `callback` once after `delay`. Dropping the handle cancels it.
#[must_use]
pub fn schedule_timeout(delay: Duration, callback: impl FnOnce() + 'static) -> Option<Timeout> {
    imp::schedule_timeout(delay, callback)
}

/// Report the visible fraction of the element behind `node` whenever it crosses
/// `threshold`. Dropping the handle disconnects the observer.
#[must_use]
pub fn observe_visibility(
    node: &NodeRef,
    threshold: f64,
    on_change: impl FnMut(f64) + 'static,
) -> Option<VisibilityObserver> {
    imp::observe_visibility(node, threshold, on_change)
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use crate::dom;
    use async_trait::async_trait;
    use cowboy_safari_core::{
        AnalyticsEvent, AnalyticsSink, CapabilityError, FullscreenApi, FullscreenTarget,
        ShareCapabilities, SharePayload,
    };
    use js_sys::{Array, Function, Object, Promise, Reflect};
    use serde::Serialize;
    use serde_json::{Map, Value};
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, Navigator};
    use yew::NodeRef;

    fn property(target: &JsValue, name: &str) -> Option<JsValue> {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    fn method(target: &JsValue, name: &str) -> Option<Function> {
        property(target, name).and_then(|value| value.dyn_into::<Function>().ok())
    }

    fn rejected(err: &JsValue) -> CapabilityError {
        CapabilityError::Rejected(dom::js_error_message(err))
    }

    async fn settle(value: JsValue) -> Result<(), CapabilityError> {
        JsFuture::from(Promise::resolve(&value))
            .await
            .map(|_| ())
            .map_err(|err| rejected(&err))
    }

    pub struct DataLayerSink;

    impl DataLayerSink {
        fn layer() -> Option<Array> {
            let window: JsValue = dom::window()?.into();
            let existing =
                property(&window, "dataLayer").and_then(|v| v.dyn_into::<Array>().ok());
            if existing.is_some() {
                return existing;
            }
            let layer = Array::new();
            Reflect::set(&window, &JsValue::from_str("dataLayer"), &layer).ok()?;
            Some(layer)
        }
    }

    impl AnalyticsSink for DataLayerSink {
        fn record(&self, event: &str, properties: &Map<String, Value>) {
            let entry = AnalyticsEvent {
                name: event.to_string(),
                properties: properties.clone(),
            }
            .to_data_layer_entry();
            let Some(layer) = Self::layer() else {
                log::warn!("dataLayer unavailable; dropped {event}");
                return;
            };
            match entry.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
                Ok(value) => {
                    layer.push(&value);
                }
                Err(err) => log::warn!("could not serialize {event}: {err}"),
            }
        }
    }

    pub fn analytics_sink() -> Rc<dyn AnalyticsSink> {
        Rc::new(DataLayerSink)
    }

    pub struct ElementFullscreen {
        element: Option<Element>,
    }

    impl FullscreenTarget for ElementFullscreen {
        fn supports(&self, api: FullscreenApi) -> bool {
            self.element
                .as_ref()
                .and_then(|el| method(el.as_ref(), api.method()))
                .is_some()
        }

        fn request(&self, api: FullscreenApi) -> Result<(), CapabilityError> {
            let element = self
                .element
                .as_ref()
                .ok_or(CapabilityError::Unavailable("iframe"))?;
            let target: &JsValue = element.as_ref();
            let request =
                method(target, api.method()).ok_or(CapabilityError::Unavailable(api.method()))?;
            request.call0(target).map(|_| ()).map_err(|err| rejected(&err))
        }
    }

    pub fn fullscreen_target(node: &NodeRef) -> Box<dyn FullscreenTarget> {
        Box::new(ElementFullscreen {
            element: node.cast::<Element>(),
        })
    }

    pub struct NavigatorShare {
        navigator: Option<Navigator>,
    }

    impl NavigatorShare {
        fn target(&self) -> Result<&JsValue, CapabilityError> {
            let navigator = self
                .navigator
                .as_ref()
                .ok_or(CapabilityError::Unavailable("navigator"))?;
            Ok(navigator.as_ref())
        }

        fn clipboard(&self) -> Option<JsValue> {
            self.target().ok().and_then(|nav| property(nav, "clipboard"))
        }
    }

    #[async_trait(?Send)]
    impl ShareCapabilities for NavigatorShare {
        fn has_native_share(&self) -> bool {
            self.target()
                .ok()
                .and_then(|nav| method(nav, "share"))
                .is_some()
        }

        async fn native_share(&self, payload: &SharePayload) -> Result<(), CapabilityError> {
            let navigator = self.target()?;
            let share = method(navigator, "share").ok_or(CapabilityError::Unavailable("share"))?;
            let data = payload
                .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
                .map_err(|err| CapabilityError::Rejected(err.to_string()))?;
            let pending = share.call1(navigator, &data).map_err(|err| rejected(&err))?;
            settle(pending).await
        }

        fn has_clipboard(&self) -> bool {
            self.clipboard().is_some()
        }

        async fn write_clipboard(&self, text: &str) -> Result<(), CapabilityError> {
            let clipboard = self
                .clipboard()
                .ok_or(CapabilityError::Unavailable("clipboard"))?;
            let write =
                method(&clipboard, "writeText").ok_or(CapabilityError::Unavailable("clipboard"))?;
            let pending = write
                .call1(&clipboard, &JsValue::from_str(text))
                .map_err(|err| rejected(&err))?;
            settle(pending).await
        }
    }

    pub fn share_capabilities() -> Box<dyn ShareCapabilities> {
        Box::new(NavigatorShare {
            navigator: dom::window().map(|w| w.navigator()),
        })
    }

    pub struct Timeout {
        handle: i32,
        _callback: Closure<dyn FnMut()>,
    }

    impl Drop for Timeout {
        fn drop(&mut self) {
            if let Some(window) = dom::window() {
                window.clear_timeout_with_handle(self.handle);
            }
        }
    }

    pub fn schedule_timeout(delay: Duration, callback: impl FnOnce() + 'static) -> Option<Timeout> {
        let window = dom::window()?;
        let mut pending = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = pending.take() {
                callback();
            }
        });
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|err| log::warn!("setTimeout failed: {}", dom::js_error_message(&err)))
            .ok()?;
        Some(Timeout {
            handle,
            _callback: closure,
        })
    }

    pub struct VisibilityObserver {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    }

    impl Drop for VisibilityObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    pub fn observe_visibility(
        node: &NodeRef,
        threshold: f64,
        mut on_change: impl FnMut(f64) + 'static,
    ) -> Option<VisibilityObserver> {
        let element = node.cast::<Element>()?;
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.intersection_ratio());
                }
            },
        );
        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("threshold"),
            &JsValue::from_f64(threshold),
        )
        .ok()?;
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            options.unchecked_ref(),
        )
        .map_err(|err| {
            log::warn!(
                "IntersectionObserver unavailable: {}",
                dom::js_error_message(&err)
            );
        })
        .ok()?;
        observer.observe(&element);
        Some(VisibilityObserver {
            observer,
            _callback: callback,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use async_trait::async_trait;
    use cowboy_safari_core::{
        AnalyticsSink, CapabilityError, FullscreenApi, FullscreenTarget, NoopSink,
        ShareCapabilities, SharePayload,
    };
    use std::rc::Rc;
    use std::time::Duration;
    use yew::NodeRef;

    /// Stand-in for every browser capability when there is no browser.
    pub struct Headless;

    impl FullscreenTarget for Headless {
        fn supports(&self, _api: FullscreenApi) -> bool {
            false
        }

        fn request(&self, _api: FullscreenApi) -> Result<(), CapabilityError> {
            Err(CapabilityError::Unavailable("fullscreen"))
        }
    }

    #[async_trait(?Send)]
    impl ShareCapabilities for Headless {
        fn has_native_share(&self) -> bool {
            false
        }

        async fn native_share(&self, _payload: &SharePayload) -> Result<(), CapabilityError> {
            Err(CapabilityError::Unavailable("share"))
        }

        fn has_clipboard(&self) -> bool {
            false
        }

        async fn write_clipboard(&self, _text: &str) -> Result<(), CapabilityError> {
            Err(CapabilityError::Unavailable("clipboard"))
        }
    }

    pub struct Timeout;
    pub struct VisibilityObserver;

    pub fn analytics_sink() -> Rc<dyn AnalyticsSink> {
        Rc::new(NoopSink)
    }

    pub fn fullscreen_target(_node: &NodeRef) -> Box<dyn FullscreenTarget> {
        Box::new(Headless)
    }

    pub fn share_capabilities() -> Box<dyn ShareCapabilities> {
        Box::new(Headless)
    }

    pub fn schedule_timeout(_delay: Duration, _callback: impl FnOnce() + 'static) -> Option<Timeout> {
        None
    }

    pub fn observe_visibility(
        _node: &NodeRef,
        _threshold: f64,
        _on_change: impl FnMut(f64) + 'static,
    ) -> Option<VisibilityObserver> {
        None
    }
}
