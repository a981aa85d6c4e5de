//! Analytics as an injected capability.
//!
//! Components never touch a global data layer directly; they are handed an
//! [`AnalyticsSink`] and record named events with a property bag. Recording is
//! best-effort: sinks must not fail and callers never observe errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cell::RefCell;

pub const IFRAME_VIEW: &str = "iframe_view";
pub const CTA_CLICK: &str = "cta_click";

/// Which call-to-action produced a `cta_click` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cta {
    Fullscreen,
    Share,
}

impl Cta {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fullscreen => "fullscreen",
            Self::Share => "share",
        }
    }
}

/// A named analytics event and its properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub properties: Map<String, Value>,
}

impl AnalyticsEvent {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            properties: Map::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// The embedded game scrolled into view.
    #[must_use]
    pub fn iframe_view(game: &str) -> Self {
        Self::new(IFRAME_VIEW).with("game", game)
    }

    #[must_use]
    pub fn cta_click(cta: Cta) -> Self {
        Self::new(CTA_CLICK).with("cta", cta.as_str())
    }

    /// Flattened `{event, ...properties}` record, the shape tag-manager data layers expect.
    #[must_use]
    pub fn to_data_layer_entry(&self) -> Map<String, Value> {
        let mut entry = Map::new();
        entry.insert("event".to_string(), Value::String(self.name.clone()));
        for (key, value) in &self.properties {
            entry.insert(key.clone(), value.clone());
        }
        entry
    }

    /// Hand this event to a sink.
    pub fn record_to(&self, sink: &dyn AnalyticsSink) {
        log::debug!("analytics: {}", self.name);
        sink.record(&self.name, &self.properties);
    }
}

/// Destination for analytics events.
pub trait AnalyticsSink {
    fn record(&self, event: &str, properties: &Map<String, Value>);
}

/// Sink for environments without analytics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn record(&self, _event: &str, _properties: &Map<String, Value>) {}
}

/// Sink that keeps every event in memory, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: RefCell<Vec<AnalyticsEvent>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Number of recorded events with the given name.
    #[must_use]
    pub fn count(&self, event: &str) -> usize {
        self.events.borrow().iter().filter(|e| e.name == event).count()
    }
}

impl AnalyticsSink for MemorySink {
    fn record(&self, event: &str, properties: &Map<String, Value>) {
        self.events.borrow_mut().push(AnalyticsEvent {
            name: event.to_string(),
            properties: properties.clone(),
        });
    }
}
