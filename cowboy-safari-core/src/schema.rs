//! JSON-LD structured data for each page, computed from the static content.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::content::{FaqItem, Guide};
use crate::page::GUIDES_DESCRIPTION;
use crate::words::count_words;
use serde_json::{Value, json};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const GUIDES_DATE_PUBLISHED: &str = "2025-11-08";
/// Fixed allowance for the guides page chrome on top of the guide copy itself.
pub const GUIDES_WORD_OFFSET: usize = 250;

fn graph(nodes: Vec<Value>) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@graph": nodes,
    })
}

fn organization(name: &str) -> Value {
    json!({ "@type": "Organization", "name": name })
}

/// `FAQPage` node for a list of questions.
#[must_use]
pub fn faq_page(items: &[FaqItem]) -> Value {
    let entities: Vec<Value> = items
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();
    json!({ "@type": "FAQPage", "mainEntity": entities })
}

/// `BreadcrumbList` node; positions are 1-based in the given order.
#[must_use]
pub fn breadcrumbs(crumbs: &[(&str, String)]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(index, (name, item))| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": item,
            })
        })
        .collect();
    json!({ "@type": "BreadcrumbList", "itemListElement": items })
}

fn item_list<'a>(entries: impl Iterator<Item = (String, &'a str, &'a str)>) -> Value {
    let items: Vec<Value> = entries
        .enumerate()
        .map(|(index, (url, name, description))| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "url": url,
                "name": name,
                "description": description,
            })
        })
        .collect();
    json!({ "@type": "ItemList", "itemListElement": items })
}

fn page_url(config: &SiteConfig, path: &str) -> String {
    format!("{}{path}", config.base_url)
}

/// Word count advertised by the guides `Article`: every summary and body paragraph,
/// plus [`GUIDES_WORD_OFFSET`].
#[must_use]
pub fn guides_word_count(guides: &[Guide]) -> usize {
    let copy: usize = guides
        .iter()
        .map(|guide| {
            count_words(&guide.summary)
                + guide
                    .body
                    .iter()
                    .map(|paragraph| count_words(paragraph))
                    .sum::<usize>()
        })
        .sum();
    copy + GUIDES_WORD_OFFSET
}

#[must_use]
pub fn home_schema(catalog: &Catalog) -> Value {
    let site = &catalog.site;
    let description = crate::page::HOME_DESCRIPTION;
    graph(vec![
        json!({
            "@type": "VideoGame",
            "name": site.short_name,
            "url": site.base_url,
            "description": description,
            "publisher": organization("Azgames"),
            "developer": organization("Azgames"),
            "applicationCategory": "Game",
            "operatingSystem": "Web",
        }),
        json!({
            "@type": "WebSite",
            "name": site.name,
            "url": site.base_url,
            "inLanguage": "en-US",
            "description": description,
            "publisher": organization(&site.name),
        }),
        json!({
            "@type": "SoftwareApplication",
            "name": format!("{} Web App", site.short_name),
            "operatingSystem": "Web",
            "applicationCategory": "Game",
            "offers": {
                "@type": "Offer",
                "price": "0",
                "priceCurrency": "USD",
            },
            "url": site.base_url,
        }),
        faq_page(&catalog.home.faq),
        item_list(
            catalog
                .related_games
                .iter()
                .map(|game| (game.play_url.clone(), game.name.as_str(), game.summary.as_str())),
        ),
        breadcrumbs(&[(
            format!("Play {}", site.short_name).as_str(),
            site.base_url.clone(),
        )]),
    ])
}

#[must_use]
pub fn guides_schema(catalog: &Catalog) -> Value {
    let site = &catalog.site;
    let guides_url = page_url(site, "/guides");
    graph(vec![
        json!({
            "@type": "Article",
            "headline": format!("{} Guide Compendium", site.short_name),
            "description": GUIDES_DESCRIPTION,
            "author": organization(&site.name),
            "datePublished": GUIDES_DATE_PUBLISHED,
            "dateModified": site.last_updated,
            "wordCount": guides_word_count(&catalog.guides),
            "mainEntityOfPage": guides_url,
        }),
        item_list(catalog.guides.iter().map(|guide| {
            (
                format!("{guides_url}#{}", guide.slug),
                guide.title.as_str(),
                guide.summary.as_str(),
            )
        })),
        breadcrumbs(&[
            ("Home", site.base_url.clone()),
            ("Guides", guides_url.clone()),
        ]),
    ])
}

#[must_use]
pub fn support_schema(catalog: &Catalog) -> Value {
    let site = &catalog.site;
    graph(vec![
        faq_page(&catalog.support.faq),
        breadcrumbs(&[
            ("Home", site.base_url.clone()),
            ("Support", page_url(site, "/support")),
        ]),
    ])
}

/// Serialize structured data for inlining in a `<script type="application/ld+json">`.
///
/// `</` is escaped so copy containing a closing tag cannot end the script element.
#[must_use]
pub fn to_script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}
