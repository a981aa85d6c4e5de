use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the primary navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// App store pages for the native builds of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Downloads {
    pub ios: String,
    pub android: String,
}

/// Tag identifiers for the third-party analytics scripts loaded by the document shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AnalyticsIds {
    #[serde(default)]
    pub gtag_id: Option<String>,
    #[serde(default)]
    pub clarity_id: Option<String>,
}

/// Process-wide site configuration.
///
/// Loaded once from the embedded `site.json` asset and never mutated afterwards.
/// Builds may swap the base URL through [`SiteConfig::with_base_url`] before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    pub name: String,
    pub short_name: String,
    pub domain: String,
    pub base_url: String,
    pub hero_tagline: String,
    pub description: String,
    pub contact_email: String,
    pub iframe_src: String,
    pub version: String,
    /// ISO-8601 timestamp of the last content refresh.
    pub last_updated: String,
    #[serde(default)]
    pub downloads: Downloads,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub analytics: AnalyticsIds,
    pub default_title: String,
    pub default_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub twitter_handle: String,
}

impl SiteConfig {
    /// Copy of this configuration pointed at a different deployment origin.
    #[must_use]
    pub fn with_base_url(&self, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        }
    }

    /// `mailto:` link for the support inbox.
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    /// Absolute URL for a site-relative path, with exactly one slash at the seam.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let rel = path.trim_start_matches('/');
        format!("{base}/{rel}")
    }

    /// Host of the embedded game, used for the preconnect hint and the transparency pill.
    #[must_use]
    pub fn iframe_host(&self) -> &str {
        let without_scheme = self
            .iframe_src
            .split_once("://")
            .map_or(self.iframe_src.as_str(), |(_, rest)| rest);
        without_scheme
            .split(['/', '?', '#'])
            .next()
            .unwrap_or(without_scheme)
    }

    /// Origin (scheme + host) of the embedded game.
    #[must_use]
    pub fn iframe_origin(&self) -> String {
        let scheme = self
            .iframe_src
            .split_once("://")
            .map_or("https", |(scheme, _)| scheme);
        format!("{scheme}://{}", self.iframe_host())
    }

    /// Parsed last-updated timestamp, if the configured value is valid RFC 3339.
    #[must_use]
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_updated)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }

    /// Last-updated timestamp as an HTTP date, e.g. `Sat, 08 Nov 2025 00:00:00 GMT`.
    ///
    /// Falls back to the raw configured string when it cannot be parsed.
    #[must_use]
    pub fn last_updated_utc_display(&self) -> String {
        self.last_updated_at().map_or_else(
            || self.last_updated.clone(),
            |ts| ts.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        )
    }

    /// Short calendar date, e.g. `Nov 8, 2025`.
    #[must_use]
    pub fn last_updated_short(&self) -> String {
        self.last_updated_at().map_or_else(
            || self.last_updated.clone(),
            |ts| ts.format("%b %-d, %Y").to_string(),
        )
    }

    /// Store page for the given platform key (`ios` or `android`).
    #[must_use]
    pub fn download_url(&self, store: &str) -> Option<&str> {
        match store {
            "ios" => Some(self.downloads.ios.as_str()),
            "android" => Some(self.downloads.android.as_str()),
            _ => None,
        }
    }
}
