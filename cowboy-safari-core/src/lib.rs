//! Cowboy Safari Fan Hub core
//!
//! Platform-agnostic content, configuration and interaction logic for the fan hub.
//! This crate has no UI or browser dependencies; the web crate renders what lives here
//! and plugs browser capabilities into the traits defined in [`capability`].

pub mod analytics;
pub mod capability;
pub mod catalog;
pub mod config;
pub mod content;
pub mod fallback;
pub mod hero;
pub mod page;
pub mod recommendations;
pub mod schema;
pub mod seo;
pub mod sitemap;
pub mod words;

// Re-export commonly used types
pub use analytics::{AnalyticsEvent, AnalyticsSink, Cta, MemorySink, NoopSink};
pub use capability::{CapabilityError, FullscreenApi, FullscreenTarget, ShareCapabilities};
pub use catalog::{Catalog, ContentError, ContentLoader, EmbeddedContent, catalog};
pub use config::{AnalyticsIds, Downloads, NavLink, SiteConfig};
pub use content::{
    Commitment, ControlMapping, DownloadCard, EditorialSection, FaqItem, FoldKind, FoldSection,
    FooterContent, FooterLink, Guide, HeroContent, HomeContent, InfoPill, StatusItem,
    SupportContent, TimelineEvent,
};
pub use fallback::{FallbackChain, FallbackOutcome};
pub use hero::{
    ActionReport, HeroPanelState, SharePayload, ShareMode, TOAST_TTL, ToastTicket,
    VIEW_THRESHOLD, ViewTracker, request_fullscreen, share_site,
};
pub use page::SitePage;
pub use recommendations::{Difficulty, RelatedGame};
pub use seo::{OgType, PageMetadata, PageMetadataOptions, build_page_metadata};
pub use sitemap::{ChangeFrequency, SitemapEntry, sitemap_entries};
pub use words::count_words;
