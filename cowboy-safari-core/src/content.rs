//! Editorial records embedded in the page templates.
//!
//! Everything here is plain data with no lifecycle beyond load; pages map over the
//! lists to render cards and to assemble structured data.

use serde::{Deserialize, Serialize};

/// Question/answer pair rendered in FAQ panels and `FAQPage` structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Patch-note entry for the home page freshness log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub version: String,
    pub date: String,
    pub notes: String,
}

/// Long-form editorial card on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorialSection {
    pub eyebrow: String,
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// What a fold-out panel on the home page expands into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldKind {
    Paragraphs,
    Faq,
    Timeline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldSection {
    pub title: String,
    pub kicker: String,
    pub kind: FoldKind,
    #[serde(default)]
    pub content: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HomeContent {
    pub editorial_sections: Vec<EditorialSection>,
    pub fold_sections: Vec<FoldSection>,
    pub faq: Vec<FaqItem>,
    pub timeline: Vec<TimelineEvent>,
}

impl HomeContent {
    /// Badge text for a fold-out panel: item counts for list panels, `Updated` otherwise.
    #[must_use]
    pub fn fold_badge(&self, section: &FoldSection) -> String {
        match section.kind {
            FoldKind::Faq => self.faq.len().to_string(),
            FoldKind::Timeline => self.timeline.len().to_string(),
            FoldKind::Paragraphs => "Updated".to_string(),
        }
    }
}

/// A guide article on `/guides`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    /// Anchor id on the guides page; also the `ItemList` fragment.
    pub slug: String,
    pub title: String,
    pub focus: String,
    pub reading_time: String,
    pub difficulty: String,
    pub summary: String,
    pub key_takeaways: Vec<String>,
    pub body: Vec<String>,
}

/// Titled block of support-desk commitments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// Tile on the support status board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusItem {
    pub label: String,
    pub value: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SupportContent {
    pub commitments: Vec<Commitment>,
    pub faq: Vec<FaqItem>,
    pub status_board: Vec<StatusItem>,
}

/// Row in the hero panel's controls table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlMapping {
    pub action: String,
    pub input: String,
    pub note: String,
}

/// Native-store card in the hero panel; `store` keys into [`crate::Downloads`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadCard {
    pub platform: String,
    pub name: String,
    pub store: String,
    pub summary: String,
    pub meta: String,
    pub gradient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HeroContent {
    pub control_mappings: Vec<ControlMapping>,
    pub download_cards: Vec<DownloadCard>,
}

/// Transparency pill in the hero panel. Derived from [`crate::SiteConfig`], not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPill {
    pub label: String,
    pub value: String,
    pub href: Option<String>,
}

impl InfoPill {
    /// Build, last-updated, iframe source and contact pills for the given configuration.
    #[must_use]
    pub fn for_site(config: &crate::SiteConfig) -> Vec<Self> {
        vec![
            Self {
                label: "Build".into(),
                value: config.version.clone(),
                href: None,
            },
            Self {
                label: "Last Updated (UTC)".into(),
                value: config.last_updated_utc_display(),
                href: None,
            },
            Self {
                label: "Iframe Source".into(),
                value: config.iframe_host().to_string(),
                href: None,
            },
            Self {
                label: "Contact".into(),
                value: config.contact_email.clone(),
                href: Some(config.mailto()),
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FooterContent {
    pub site_links: Vec<FooterLink>,
    pub friend_links: Vec<FooterLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_badges_count_list_panels() {
        let home = HomeContent {
            editorial_sections: Vec::new(),
            fold_sections: Vec::new(),
            faq: vec![FaqItem {
                question: "q".into(),
                answer: "a".into(),
            }],
            timeline: Vec::new(),
        };
        let faq = FoldSection {
            title: "FAQ".into(),
            kicker: "Quick answers".into(),
            kind: FoldKind::Faq,
            content: Vec::new(),
        };
        let notes = FoldSection {
            kind: FoldKind::Paragraphs,
            ..faq.clone()
        };
        let timeline = FoldSection {
            kind: FoldKind::Timeline,
            ..faq.clone()
        };
        assert_eq!(home.fold_badge(&faq), "1");
        assert_eq!(home.fold_badge(&timeline), "0");
        assert_eq!(home.fold_badge(&notes), "Updated");
    }

    #[test]
    fn info_pills_link_only_contact() {
        let cfg = crate::SiteConfig {
            version: "1.12.0".into(),
            contact_email: "support@cowboysafari.online".into(),
            iframe_src: "https://azgames.io/cowboy-safari.embed".into(),
            last_updated: "2025-11-08T00:00:00.000Z".into(),
            ..crate::SiteConfig::default()
        };
        let pills = InfoPill::for_site(&cfg);
        assert_eq!(pills.len(), 4);
        assert_eq!(pills[0].value, "1.12.0");
        assert_eq!(pills[2].value, "azgames.io");
        let linked: Vec<_> = pills.iter().filter(|p| p.href.is_some()).collect();
        assert_eq!(linked.len(), 1);
        assert_eq!(
            linked[0].href.as_deref(),
            Some("mailto:support@cowboysafari.online")
        );
    }
}
