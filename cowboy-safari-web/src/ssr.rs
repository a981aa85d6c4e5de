//! Server-side rendering of complete HTML documents.
//!
//! The body is rendered hydratable so the wasm bundle can attach to it; the head
//! is plain markup since nothing on the client re-renders it.

use crate::app::{App, AppProps};
use crate::components::head_tags::{HeadTags, Props as HeadProps};
use crate::APP_ROOT_ID;
use crate::paths::asset_path;
use crate::router::Route;
use cowboy_safari_core::{AnalyticsIds, Catalog};
use std::fmt::Write as _;
use std::rc::Rc;
use yew::LocalServerRenderer;
use yew_router::Routable;

pub const STYLESHEET: &str = "static/site.css";
pub const BUNDLE: &str = "pkg/cowboy_safari_web.js";

/// Stylesheet served at [`STYLESHEET`].
pub const STYLESHEET_CSS: &str = include_str!("../static/site.css");

/// One route rendered to markup, before it is wrapped in the document shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub route: Route,
    pub head: String,
    pub body: String,
}

/// Render the head tags and the hydratable body for `route`.
pub async fn render_route(route: Route, catalog: Rc<Catalog>) -> RenderedPage {
    let head_props = HeadProps {
        metadata: route.metadata(&catalog.site),
        site: catalog.site.clone(),
        noindex: !route.indexable(),
    };
    let head = LocalServerRenderer::<HeadTags>::with_props(head_props)
        .hydratable(false)
        .render()
        .await;

    let app_props = AppProps {
        path: Some(route.to_path().into()),
        catalog: Some(catalog),
        analytics: None,
    };
    let body = LocalServerRenderer::<App>::with_props(app_props)
        .hydratable(true)
        .render()
        .await;

    log::debug!("rendered {} ({} bytes)", route.slug(), head.len() + body.len());
    RenderedPage { route, head, body }
}

/// JSON string literal safe to embed in an inline script.
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

fn analytics_snippets(ids: &AnalyticsIds) -> String {
    let mut out = String::new();
    if let Some(id) = ids.gtag_id.as_deref().filter(|id| !id.is_empty()) {
        let _ = write!(
            out,
            "<script async src=\"https://www.googletagmanager.com/gtag/js?id={id}\"></script>\
             <script>window.dataLayer=window.dataLayer||[];function gtag(){{dataLayer.push(arguments);}}\
             gtag('js',new Date());gtag('config',{});</script>",
            js_string(id)
        );
    }
    if let Some(id) = ids.clarity_id.as_deref().filter(|id| !id.is_empty()) {
        let _ = write!(
            out,
            "<script>(function(c,l,a,r,i,t,y){{c[a]=c[a]||function(){{(c[a].q=c[a].q||[]).push(arguments)}};\
             t=l.createElement(r);t.async=1;t.src=\"https://www.clarity.ms/tag/\"+i;\
             y=l.getElementsByTagName(r)[0];y.parentNode.insertBefore(t,y);}})(window,document,\"clarity\",\"script\",{});</script>",
            js_string(id)
        );
    }
    out
}

/// Wrap a rendered page in the full HTML document.
#[must_use]
pub fn document(page: &RenderedPage, catalog: &Catalog) -> String {
    let bundle = js_string(&asset_path(BUNDLE));
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         {head}\
         <link rel=\"stylesheet\" href=\"{css}\">\
         <link rel=\"icon\" href=\"{icon}\">\
         {analytics}\
         <script type=\"module\">import init from {bundle};init();</script>\
         </head>\
         <body><div id=\"{root}\">{body}</div></body>\
         </html>\n",
        head = page.head,
        css = asset_path(STYLESHEET),
        icon = asset_path("favicon.ico"),
        analytics = analytics_snippets(&catalog.site.analytics),
        root = APP_ROOT_ID,
        body = page.body,
    )
}

/// Render `route` all the way to a document string.
pub async fn render_document(route: Route, catalog: Rc<Catalog>) -> String {
    let page = render_route(route, Rc::clone(&catalog)).await;
    document(&page, &catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_strings_cannot_close_the_tag() {
        assert_eq!(js_string("G-123"), "\"G-123\"");
        assert_eq!(js_string("</script>"), "\"<\\/script>\"");
    }

    #[test]
    fn analytics_snippets_only_for_configured_ids() {
        let none = AnalyticsIds::default();
        assert!(analytics_snippets(&none).is_empty());

        let ids = AnalyticsIds {
            gtag_id: Some("G-TEST".into()),
            clarity_id: Some(String::new()),
        };
        let out = analytics_snippets(&ids);
        assert!(out.contains("gtag/js?id=G-TEST"));
        assert!(out.contains("gtag('config',\"G-TEST\")"));
        assert!(!out.contains("clarity"));
    }
}
