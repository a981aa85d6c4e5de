//! Context handles shared by every page: the content catalog and the analytics sink.

use cowboy_safari_core::{AnalyticsSink, Catalog, NoopSink, catalog};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct CatalogHandle(pub Rc<Catalog>);

impl CatalogHandle {
    #[must_use]
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self(catalog)
    }
}

impl Default for CatalogHandle {
    fn default() -> Self {
        Self(Rc::new(catalog().clone()))
    }
}

impl std::ops::Deref for CatalogHandle {
    type Target = Catalog;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Shared analytics sink. Two handles are equal when they point at the same sink.
#[derive(Clone)]
pub struct AnalyticsHandle(Rc<dyn AnalyticsSink>);

impl AnalyticsHandle {
    #[must_use]
    pub fn new(sink: impl AnalyticsSink + 'static) -> Self {
        Self(Rc::new(sink))
    }

    #[must_use]
    pub fn from_rc(sink: Rc<dyn AnalyticsSink>) -> Self {
        Self(sink)
    }

    #[must_use]
    pub fn noop() -> Self {
        Self::new(NoopSink)
    }

    #[must_use]
    pub fn sink(&self) -> &dyn AnalyticsSink {
        self.0.as_ref()
    }
}

impl Default for AnalyticsHandle {
    fn default() -> Self {
        Self::noop()
    }
}

impl PartialEq for AnalyticsHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl std::fmt::Debug for AnalyticsHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AnalyticsHandle")
    }
}

/// Catalog from the nearest provider, or the process-wide one.
#[hook]
pub fn use_catalog() -> CatalogHandle {
    use_context::<CatalogHandle>().unwrap_or_default()
}

#[hook]
pub fn use_analytics() -> AnalyticsHandle {
    use_context::<AnalyticsHandle>().unwrap_or_default()
}
