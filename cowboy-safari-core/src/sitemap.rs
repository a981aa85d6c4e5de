use crate::config::SiteConfig;
use crate::page::SitePage;
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// One entry per indexable page. The root gets priority 1.0, everything else 0.7.
#[must_use]
pub fn sitemap_entries(config: &SiteConfig) -> Vec<SitemapEntry> {
    let base = config.base_url.trim_end_matches('/');
    SitePage::ALL
        .into_iter()
        .map(|page| {
            let path = page.path();
            let is_root = path == "/";
            SitemapEntry {
                url: if is_root {
                    base.to_string()
                } else {
                    format!("{base}{path}")
                },
                last_modified: config.last_updated.clone(),
                change_frequency: ChangeFrequency::Weekly,
                priority: if is_root { 1.0 } else { 0.7 },
            }
        })
        .collect()
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render entries as a sitemaps.org `urlset` document.
#[must_use]
pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            xml_escape(&entry.url),
            xml_escape(&entry.last_modified),
            entry.change_frequency.as_str(),
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

/// `robots.txt` allowing every crawler and pointing at the sitemap.
#[must_use]
pub fn robots_txt(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        config.absolute_url("sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            base_url: "https://cowboysafari.online".into(),
            last_updated: "2025-11-08T00:00:00.000Z".into(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn lists_three_routes_with_fixed_priorities() {
        let entries = sitemap_entries(&config());
        let urls: Vec<_> = entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://cowboysafari.online",
                "https://cowboysafari.online/guides",
                "https://cowboysafari.online/support",
            ]
        );
        assert!((entries[0].priority - 1.0).abs() < f32::EPSILON);
        for entry in &entries[1..] {
            assert!((entry.priority - 0.7).abs() < f32::EPSILON);
        }
        for entry in &entries {
            assert_eq!(entry.last_modified, "2025-11-08T00:00:00.000Z");
            assert_eq!(entry.change_frequency, ChangeFrequency::Weekly);
        }
    }

    #[test]
    fn xml_contains_every_location() {
        let xml = to_xml(&sitemap_entries(&config()));
        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), 3);
        assert!(xml.contains("<loc>https://cowboysafari.online/guides</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let robots = robots_txt(&config());
        assert!(robots.contains("Sitemap: https://cowboysafari.online/sitemap.xml"));
    }
}
