//! Page metadata: canonical URL, Open Graph and Twitter card fields.

use crate::config::SiteConfig;
use serde::Serialize;

pub const DEFAULT_OG_IMAGE_PATH: &str = "/og-image.png";
pub const OG_IMAGE_ALT: &str = "Cowboy Safari Fan Hub hero collage";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const OG_LOCALE: &str = "en_US";
pub const TWITTER_CARD: &str = "summary_large_image";
pub const ROBOTS: &str = "index, follow, max-snippet:220, max-image-preview:large, max-video-preview:-1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Inputs to [`build_page_metadata`]. Absent fields fall back to fixed defaults.
#[derive(Debug, Clone, Default)]
pub struct PageMetadataOptions<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// Path from the site root, e.g. `/` or `/support`. Defaults to `/`.
    pub path: Option<&'a str>,
    /// Open Graph image, absolute or site-relative. Defaults to `/og-image.png`.
    pub image_path: Option<&'a str>,
    pub og_type: Option<OgType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OgImage {
    pub url: String,
    pub secure_url: String,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub og_type: OgType,
    pub site_name: String,
    pub locale: &'static str,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub site: String,
    pub creator: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Structured metadata for a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

impl PageMetadata {
    /// The image URL shared by Open Graph and the Twitter card.
    #[must_use]
    pub fn image_url(&self) -> &str {
        self.twitter.images.first().map_or("", String::as_str)
    }

    /// Document title with the site-wide template applied.
    #[must_use]
    pub fn document_title(&self, config: &SiteConfig) -> String {
        if self.title == config.default_title {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, config.name)
        }
    }
}

/// Normalize a site path: `None` and `/` collapse to `/`, others gain a leading slash.
#[must_use]
pub fn normalize_path(path: Option<&str>) -> String {
    match path {
        None | Some("" | "/") => "/".to_string(),
        Some(p) if p.starts_with('/') => p.to_string(),
        Some(p) => format!("/{p}"),
    }
}

/// Canonical URL for a site path. The root maps to the base URL with one trailing slash.
#[must_use]
pub fn canonical_url(config: &SiteConfig, path: Option<&str>) -> String {
    let base = config.base_url.trim_end_matches('/');
    let normalized = normalize_path(path);
    if normalized == "/" {
        format!("{base}/")
    } else {
        format!("{base}{normalized}")
    }
}

/// Absolute image URL; anything already starting with `http` passes through unchanged.
#[must_use]
pub fn absolute_image_url(config: &SiteConfig, image_path: &str) -> String {
    if image_path.starts_with("http") {
        image_path.to_string()
    } else {
        config.absolute_url(image_path)
    }
}

fn non_blank(value: &str, fallback: &str) -> String {
    let chosen = if value.trim().is_empty() { fallback } else { value };
    chosen.to_string()
}

/// Build page metadata. Pure; never fails. A blank title or description
/// falls back to the site defaults.
#[must_use]
pub fn build_page_metadata(config: &SiteConfig, options: &PageMetadataOptions<'_>) -> PageMetadata {
    let url = canonical_url(config, options.path);
    let image = absolute_image_url(
        config,
        options.image_path.unwrap_or(DEFAULT_OG_IMAGE_PATH),
    );
    let title = non_blank(options.title, &config.default_title);
    let description = non_blank(options.description, &config.default_description);

    PageMetadata {
        canonical: url.clone(),
        open_graph: OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url,
            og_type: options.og_type.unwrap_or_default(),
            site_name: config.name.clone(),
            locale: OG_LOCALE,
            images: vec![OgImage {
                url: image.clone(),
                secure_url: image.clone(),
                mime_type: "image/png",
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: OG_IMAGE_ALT,
            }],
        },
        twitter: TwitterCard {
            card: TWITTER_CARD,
            site: config.twitter_handle.clone(),
            creator: config.twitter_handle.clone(),
            title: title.clone(),
            description: description.clone(),
            images: vec![image],
        },
        title,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            name: "Cowboy Safari Fan Hub".into(),
            base_url: "https://cowboysafari.online".into(),
            twitter_handle: "@cowboysafari".into(),
            default_title: "Play Cowboy Safari Now – Zero Ad Fan Hub".into(),
            default_description: "Zero-ad Cowboy Safari instant play.".into(),
            ..SiteConfig::default()
        }
    }

    fn build(path: Option<&str>, image: Option<&str>) -> PageMetadata {
        build_page_metadata(
            &config(),
            &PageMetadataOptions {
                title: "Guides",
                description: "All the guides",
                path,
                image_path: image,
                og_type: None,
            },
        )
    }

    #[test]
    fn blank_copy_falls_back_to_site_defaults() {
        let cfg = config();
        let meta = build_page_metadata(&cfg, &PageMetadataOptions::default());
        assert_eq!(meta.title, cfg.default_title);
        assert_eq!(meta.description, "Zero-ad Cowboy Safari instant play.");
        assert_eq!(meta.open_graph.description, meta.description);
        assert_eq!(meta.twitter.title, cfg.default_title);
        assert_eq!(meta.document_title(&cfg), cfg.default_title);
    }

    #[test]
    fn root_and_missing_paths_keep_one_trailing_slash() {
        assert_eq!(build(None, None).canonical, "https://cowboysafari.online/");
        assert_eq!(build(Some("/"), None).canonical, "https://cowboysafari.online/");
    }

    #[test]
    fn relative_paths_gain_a_leading_slash() {
        assert_eq!(
            build(Some("support"), None).canonical,
            "https://cowboysafari.online/support"
        );
        assert_eq!(
            build(Some("/support"), None).canonical,
            "https://cowboysafari.online/support"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_not_doubled() {
        let cfg = SiteConfig {
            base_url: "https://cowboysafari.online/".into(),
            ..config()
        };
        assert_eq!(canonical_url(&cfg, None), "https://cowboysafari.online/");
        assert_eq!(
            canonical_url(&cfg, Some("guides")),
            "https://cowboysafari.online/guides"
        );
    }

    #[test]
    fn images_are_made_absolute_once() {
        assert_eq!(
            build(None, None).image_url(),
            "https://cowboysafari.online/og-image.png"
        );
        assert_eq!(
            build(None, Some("share/card.png")).image_url(),
            "https://cowboysafari.online/share/card.png"
        );
        assert_eq!(
            build(None, Some("https://cdn.example.com/card.png")).image_url(),
            "https://cdn.example.com/card.png"
        );
    }

    #[test]
    fn open_graph_and_twitter_mirror_inputs() {
        let meta = build(Some("/guides"), None);
        assert_eq!(meta.open_graph.url, meta.canonical);
        assert_eq!(meta.open_graph.title, "Guides");
        assert_eq!(meta.open_graph.og_type, OgType::Website);
        assert_eq!(meta.open_graph.site_name, "Cowboy Safari Fan Hub");
        assert_eq!(meta.open_graph.locale, "en_US");
        assert_eq!(meta.open_graph.images[0].secure_url, meta.image_url());
        assert_eq!(meta.twitter.card, "summary_large_image");
        assert_eq!(meta.twitter.description, "All the guides");
        assert_eq!(meta.twitter.creator, "@cowboysafari");
    }

    #[test]
    fn document_title_applies_template_except_for_default() {
        let cfg = config();
        assert_eq!(
            build(None, None).document_title(&cfg),
            "Guides | Cowboy Safari Fan Hub"
        );
        let home = build_page_metadata(
            &cfg,
            &PageMetadataOptions {
                title: &cfg.default_title,
                description: "d",
                ..PageMetadataOptions::default()
            },
        );
        assert_eq!(home.document_title(&cfg), cfg.default_title);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(build(None, None)).unwrap();
        assert_eq!(value["openGraph"]["type"], "website");
        assert_eq!(value["openGraph"]["images"][0]["secureUrl"], value["twitter"]["images"][0]);
        assert_eq!(value["openGraph"]["siteName"], "Cowboy Safari Fan Hub");
    }
}
