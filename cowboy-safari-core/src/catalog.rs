use crate::config::SiteConfig;
use crate::content::{FooterContent, Guide, HeroContent, HomeContent, SupportContent};
use crate::recommendations::RelatedGame;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../assets/data/site.json");
const RECOMMENDATIONS_JSON: &str = include_str!("../assets/data/recommendations.json");
const HOME_JSON: &str = include_str!("../assets/data/home.json");
const GUIDES_JSON: &str = include_str!("../assets/data/guides.json");
const SUPPORT_JSON: &str = include_str!("../assets/data/support.json");
const HERO_JSON: &str = include_str!("../assets/data/hero.json");
const FOOTER_JSON: &str = include_str!("../assets/data/footer.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Unknown content: {0}")]
    Unknown(String),
    #[error("JSON parsing error in {name}: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Trait for abstracting where site content comes from.
/// The shipped implementation reads JSON embedded at compile time.
pub trait ContentLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the site configuration record.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_site_config(&self) -> Result<SiteConfig, Self::Error>;

    /// Load a named content document (`recommendations`, `home`, `guides`, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is unknown or the document cannot be parsed.
    fn load_content<T>(&self, name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned;

    /// Load everything the pages render.
    ///
    /// # Errors
    ///
    /// Returns the first load failure.
    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog {
            site: self.load_site_config()?,
            related_games: self.load_content("recommendations")?,
            home: self.load_content("home")?,
            guides: self.load_content("guides")?,
            support: self.load_content("support")?,
            hero: self.load_content("hero")?,
            footer: self.load_content("footer")?,
        })
    }
}

/// Content compiled into the binary from `assets/data`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedContent;

impl EmbeddedContent {
    fn raw(name: &str) -> Option<&'static str> {
        match name {
            "site" => Some(SITE_JSON),
            "recommendations" => Some(RECOMMENDATIONS_JSON),
            "home" => Some(HOME_JSON),
            "guides" => Some(GUIDES_JSON),
            "support" => Some(SUPPORT_JSON),
            "hero" => Some(HERO_JSON),
            "footer" => Some(FOOTER_JSON),
            _ => None,
        }
    }
}

impl ContentLoader for EmbeddedContent {
    type Error = ContentError;

    fn load_site_config(&self) -> Result<SiteConfig, Self::Error> {
        self.load_content("site")
    }

    fn load_content<T>(&self, name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let json = Self::raw(name).ok_or_else(|| ContentError::Unknown(name.to_string()))?;
        serde_json::from_str(json).map_err(|source| ContentError::Json {
            name: name.to_string(),
            source,
        })
    }
}

/// Everything a page needs to render, loaded once per process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    pub site: SiteConfig,
    pub related_games: Vec<RelatedGame>,
    pub home: HomeContent,
    pub guides: Vec<Guide>,
    pub support: SupportContent,
    pub hero: HeroContent,
    pub footer: FooterContent,
}

impl Catalog {
    /// Copy of the catalog with the site configuration pointed at another origin.
    #[must_use]
    pub fn with_base_url(&self, base_url: &str) -> Self {
        Self {
            site: self.site.with_base_url(base_url),
            ..self.clone()
        }
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    EmbeddedContent.load_catalog().unwrap_or_else(|err| {
        log::error!("Failed to load embedded content: {err}");
        Catalog::default()
    })
});

/// The process-wide content catalog.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
