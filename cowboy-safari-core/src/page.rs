use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::schema;
use crate::seo::{PageMetadata, PageMetadataOptions, build_page_metadata};
use serde_json::Value;

pub const HOME_DESCRIPTION: &str = "Independent Cowboy Safari fan hub offering zero-ad instant play, telemetry-backed uptime alerts, spoiler-safe mastery guides, and parent-ready support.";
pub const GUIDES_DESCRIPTION: &str = "Cowboy Safari guides for animal capture, resource loops, and score pushes with printable frameworks plus parent-friendly safety insights updated weekly.";
pub const SUPPORT_DESCRIPTION: &str = "Cowboy Safari support desk covering parent FAQs, privacy promises, uptime alerts, and direct escalation paths with same-day email replies.";

/// The indexable pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SitePage {
    Home,
    Guides,
    Support,
}

impl SitePage {
    pub const ALL: [Self; 3] = [Self::Home, Self::Guides, Self::Support];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Guides => "/guides",
            Self::Support => "/support",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Instant Cowboy Safari Play · Telemetry Tested",
            Self::Guides => "Cowboy Safari Strategy Playbook – Guides Hub",
            Self::Support => "Cowboy Safari Support Desk – Parent Center",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Home => HOME_DESCRIPTION,
            Self::Guides => GUIDES_DESCRIPTION,
            Self::Support => SUPPORT_DESCRIPTION,
        }
    }

    /// Id of the inline JSON-LD script element.
    #[must_use]
    pub const fn schema_script_id(self) -> &'static str {
        match self {
            Self::Home => "home-structured-data",
            Self::Guides => "guides-schema",
            Self::Support => "support-faq-schema",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|page| page.path().trim_end_matches('/') == trimmed)
    }

    #[must_use]
    pub fn metadata(self, config: &SiteConfig) -> PageMetadata {
        build_page_metadata(
            config,
            &PageMetadataOptions {
                title: self.title(),
                description: self.description(),
                path: Some(self.path()),
                ..PageMetadataOptions::default()
            },
        )
    }

    #[must_use]
    pub fn structured_data(self, catalog: &Catalog) -> Value {
        match self {
            Self::Home => schema::home_schema(catalog),
            Self::Guides => schema::guides_schema(catalog),
            Self::Support => schema::support_schema(catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for page in SitePage::ALL {
            assert_eq!(SitePage::from_path(page.path()), Some(page));
        }
        assert_eq!(SitePage::from_path("/guides/"), Some(SitePage::Guides));
        assert_eq!(SitePage::from_path(""), Some(SitePage::Home));
        assert_eq!(SitePage::from_path("/press"), None);
    }

    #[test]
    fn metadata_uses_page_copy() {
        let config = crate::catalog().site.clone();
        let meta = SitePage::Support.metadata(&config);
        assert_eq!(meta.title, "Cowboy Safari Support Desk – Parent Center");
        assert_eq!(meta.canonical, format!("{}/support", config.base_url));
        assert_eq!(meta.description, SUPPORT_DESCRIPTION);
    }
}
