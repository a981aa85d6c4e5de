use cowboy_safari_core::seo::{PageMetadata, PageMetadataOptions, build_page_metadata};
use cowboy_safari_core::{SiteConfig, SitePage};
use yew_router::prelude::*;

pub const NOT_FOUND_TITLE: &str = "Trail Not Found";
pub const NOT_FOUND_DESCRIPTION: &str =
    "This Cowboy Safari page wandered off the map. Head back to instant play, guides, or support.";

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq, Hash)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/guides")]
    Guides,
    #[at("/support")]
    Support,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    pub const ALL: [Self; 4] = [Self::Home, Self::Guides, Self::Support, Self::NotFound];

    #[must_use]
    pub const fn page(self) -> Option<SitePage> {
        match self {
            Self::Home => Some(SitePage::Home),
            Self::Guides => Some(SitePage::Guides),
            Self::Support => Some(SitePage::Support),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub const fn from_page(page: SitePage) -> Self {
        match page {
            SitePage::Home => Self::Home,
            SitePage::Guides => Self::Guides,
            SitePage::Support => Self::Support,
        }
    }

    /// Short name used on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Guides => "guides",
            Self::Support => "support",
            Self::NotFound => "not-found",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|route| route.slug().eq_ignore_ascii_case(slug.trim()))
    }

    /// Where the prerendered document lands, relative to the output directory.
    #[must_use]
    pub const fn output_file(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Guides => "guides/index.html",
            Self::Support => "support/index.html",
            Self::NotFound => "404.html",
        }
    }

    #[must_use]
    pub fn metadata(self, config: &SiteConfig) -> PageMetadata {
        match self.page() {
            Some(page) => page.metadata(config),
            None => build_page_metadata(
                config,
                &PageMetadataOptions {
                    title: NOT_FOUND_TITLE,
                    description: NOT_FOUND_DESCRIPTION,
                    path: Some("/404"),
                    ..PageMetadataOptions::default()
                },
            ),
        }
    }

    /// Whether crawlers should index this route.
    #[must_use]
    pub const fn indexable(self) -> bool {
        self.page().is_some()
    }
}
