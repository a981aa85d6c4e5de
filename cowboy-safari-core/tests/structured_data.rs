use cowboy_safari_core::schema::{self, GUIDES_WORD_OFFSET};
use cowboy_safari_core::sitemap::{robots_txt, to_xml};
use cowboy_safari_core::{
    ContentError, ContentLoader, EmbeddedContent, FoldKind, OgType, PageMetadataOptions,
    SitePage, build_page_metadata, catalog, count_words, sitemap_entries,
};
use serde_json::Value;

#[test]
fn embedded_content_loads() {
    let loaded = EmbeddedContent.load_catalog().unwrap();
    assert_eq!(loaded.site.name, "Cowboy Safari Fan Hub");
    assert_eq!(loaded.related_games.len(), 4);
    assert_eq!(loaded.guides.len(), 4);
    assert_eq!(loaded.home.faq.len(), 4);
    assert_eq!(loaded.support.faq.len(), 4);
    assert_eq!(loaded.hero.control_mappings.len(), 4);
    assert_eq!(loaded.hero.download_cards.len(), 2);
    assert_eq!(&loaded, catalog());
}

#[test]
fn unknown_content_is_an_error() {
    let err = EmbeddedContent
        .load_content::<Value>("leaderboard")
        .unwrap_err();
    assert!(matches!(err, ContentError::Unknown(ref name) if name == "leaderboard"));
}

#[test]
fn every_page_carries_graph_json_ld() {
    let catalog = catalog();
    for page in SitePage::ALL {
        let data = page.structured_data(catalog);
        let script = schema::to_script_json(&data);
        let parsed: Value = serde_json::from_str(&script).unwrap();
        assert_eq!(parsed["@context"], "https://schema.org", "{page:?}");
        assert!(parsed["@graph"].is_array(), "{page:?}");
    }
}

#[test]
fn home_graph_lists_related_games_in_order() {
    let catalog = catalog();
    let data = SitePage::Home.structured_data(catalog);
    let graph = data["@graph"].as_array().unwrap();
    let types: Vec<&str> = graph.iter().filter_map(|n| n["@type"].as_str()).collect();
    assert_eq!(
        types,
        [
            "VideoGame",
            "WebSite",
            "SoftwareApplication",
            "FAQPage",
            "ItemList",
            "BreadcrumbList"
        ]
    );
    let list = graph[4]["itemListElement"].as_array().unwrap();
    assert_eq!(list.len(), catalog.related_games.len());
    for (index, (item, game)) in list.iter().zip(&catalog.related_games).enumerate() {
        assert_eq!(item["position"], index + 1);
        assert_eq!(item["url"], game.play_url.as_str());
    }
    assert_eq!(graph[2]["offers"]["priceCurrency"], "USD");
    assert_eq!(graph[5]["itemListElement"][0]["name"], "Play Cowboy Safari");
}

#[test]
fn guides_article_word_count_matches_copy() {
    let catalog = catalog();
    let expected: usize = catalog
        .guides
        .iter()
        .map(|guide| {
            count_words(&guide.summary) + guide.body.iter().map(|p| count_words(p)).sum::<usize>()
        })
        .sum::<usize>()
        + GUIDES_WORD_OFFSET;
    assert_eq!(expected, 1071);

    let data = SitePage::Guides.structured_data(catalog);
    let article = &data["@graph"][0];
    assert_eq!(article["@type"], "Article");
    assert_eq!(article["headline"], "Cowboy Safari Guide Compendium");
    assert_eq!(article["wordCount"], expected);
    assert_eq!(article["datePublished"], "2025-11-08");
    assert_eq!(article["dateModified"], catalog.site.last_updated.as_str());

    let first_guide = &data["@graph"][1]["itemListElement"][0];
    assert_eq!(
        first_guide["url"],
        format!("{}/guides#{}", catalog.site.base_url, catalog.guides[0].slug)
    );
}

#[test]
fn support_graph_breadcrumbs_home_then_support() {
    let catalog = catalog();
    let data = SitePage::Support.structured_data(catalog);
    let crumbs = data["@graph"][1]["itemListElement"].as_array().unwrap();
    assert_eq!(crumbs.len(), 2);
    assert_eq!(crumbs[0]["name"], "Home");
    assert_eq!(crumbs[1]["item"], format!("{}/support", catalog.site.base_url));
}

#[test]
fn metadata_canonicals_follow_paths() {
    let site = &catalog().site;
    let root = build_page_metadata(
        site,
        &PageMetadataOptions {
            title: "Root",
            description: "d",
            ..PageMetadataOptions::default()
        },
    );
    assert_eq!(root.canonical, "https://cowboysafari.online/");

    let relative = build_page_metadata(
        site,
        &PageMetadataOptions {
            title: "Guides",
            description: "d",
            path: Some("guides"),
            image_path: Some("https://cdn.example.com/card.png"),
            og_type: Some(OgType::Article),
        },
    );
    assert_eq!(relative.canonical, "https://cowboysafari.online/guides");
    assert_eq!(relative.open_graph.images[0].url, "https://cdn.example.com/card.png");
    assert_eq!(relative.twitter.images, ["https://cdn.example.com/card.png"]);
}

#[test]
fn sitemap_covers_indexable_pages() {
    let site = &catalog().site;
    let entries = sitemap_entries(site);
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.last_modified == site.last_updated));
    let xml = to_xml(&entries);
    assert!(!xml.contains("/404"));
    assert!(robots_txt(site).ends_with("sitemap.xml\n"));
}

#[test]
fn fold_sections_cover_every_kind() {
    let home = &catalog().home;
    let kinds: Vec<FoldKind> = home.fold_sections.iter().map(|s| s.kind).collect();
    assert!(kinds.contains(&FoldKind::Faq));
    assert!(kinds.contains(&FoldKind::Timeline));
    assert!(kinds.contains(&FoldKind::Paragraphs));
}
