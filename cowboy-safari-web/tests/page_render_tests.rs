use cowboy_safari_core::{Catalog, SitePage, catalog};
use cowboy_safari_web::router::{NOT_FOUND_TITLE, Route};
use cowboy_safari_web::ssr::{self, RenderedPage};
use futures::executor::block_on;
use serde_json::Value;
use std::rc::Rc;

fn embedded() -> Rc<Catalog> {
    Rc::new(catalog().clone())
}

fn render(route: Route) -> RenderedPage {
    block_on(ssr::render_route(route, embedded()))
}

fn json_ld_blocks(html: &str) -> Vec<Value> {
    const OPEN: &str = "type=\"application/ld+json\">";
    html.split(OPEN)
        .skip(1)
        .filter_map(|rest| rest.split("</script>").next())
        .map(|raw| serde_json::from_str(raw).expect("valid JSON-LD"))
        .collect()
}

#[test]
fn every_route_has_landmarks() {
    for route in Route::ALL {
        let page = render(route);
        assert!(page.body.contains("class=\"skip-link\""), "{route:?}");
        assert!(page.body.contains("<main id=\"main\""), "{route:?}");
        assert!(page.body.contains("role=\"banner\""), "{route:?}");
        assert!(page.body.contains("role=\"contentinfo\""), "{route:?}");
    }
}

#[test]
fn indexable_routes_point_canonicals_at_themselves() {
    let base = &catalog().site.base_url;
    for page in SitePage::ALL {
        let rendered = render(Route::from_page(page));
        let expected = if page == SitePage::Home {
            format!("{base}/")
        } else {
            format!("{base}{}", page.path())
        };
        assert!(
            rendered.head.contains(&format!("href=\"{expected}\"")),
            "{page:?} canonical missing"
        );
        assert!(rendered.head.contains("index, follow"));
        assert!(!rendered.head.contains("noindex"));
    }
}

#[test]
fn home_embeds_the_game_and_schema() {
    let page = render(Route::Home);
    assert!(page.body.contains(&format!("src=\"{}\"", catalog().site.iframe_src)));
    assert!(page.body.contains("id=\"play\""));

    let blocks = json_ld_blocks(&page.body);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0], SitePage::Home.structured_data(catalog()));
}

#[test]
fn guides_render_each_article_once() {
    let page = render(Route::Guides);
    for guide in &catalog().guides {
        assert_eq!(
            page.body.matches(&format!("id=\"{}\"", guide.slug)).count(),
            1,
            "{}",
            guide.slug
        );
    }
    let blocks = json_ld_blocks(&page.body);
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0]["@graph"].is_array());
}

#[test]
fn support_lists_faq_and_privacy_anchor() {
    let page = render(Route::Support);
    assert!(page.body.contains("id=\"privacy\""));
    assert!(page.body.contains("Compose Email"));
    assert_eq!(
        page.body.matches("class=\"faq-item\"").count(),
        catalog().support.faq.len()
    );
    assert_eq!(json_ld_blocks(&page.body).len(), 1);
}

#[test]
fn not_found_is_kept_out_of_search() {
    let page = render(Route::NotFound);
    assert!(page.body.contains(NOT_FOUND_TITLE));
    assert!(page.head.contains("noindex, follow"));
    assert!(json_ld_blocks(&page.body).is_empty());
}

#[test]
fn documents_wrap_head_body_and_bundle() {
    let catalog = embedded();
    let html = block_on(ssr::render_document(Route::Guides, Rc::clone(&catalog)));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<div id=\"app\">"));
    assert!(html.contains("cowboy_safari_web.js"));
    assert!(html.contains("site.css"));
    if let Some(id) = &catalog.site.analytics.gtag_id {
        assert!(html.contains(&format!("gtag/js?id={id}")));
    }
    let head_end = html.find("</head>").expect("head closes");
    let title = html.find("<title>").expect("title present");
    assert!(title < head_end);
}

#[test]
fn base_url_override_reaches_canonicals() {
    let catalog = Rc::new(catalog().with_base_url("https://preview.example.test/"));
    let page = block_on(ssr::render_route(Route::Support, catalog));
    assert!(page.head.contains("href=\"https://preview.example.test/support\""));
}
