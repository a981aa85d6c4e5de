use cowboy_safari_core::seo::{PageMetadata, ROBOTS};
use cowboy_safari_core::SiteConfig;
use yew::prelude::*;

const NOINDEX: &str = "noindex, follow";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metadata: PageMetadata,
    pub site: SiteConfig,
    /// Keep the page out of search results (used for the 404 document).
    #[prop_or_default]
    pub noindex: bool,
}

fn meta_property(property: &'static str, content: impl Into<AttrValue>) -> Html {
    html! { <meta property={property} content={content.into()} /> }
}

fn meta_name(name: &'static str, content: impl Into<AttrValue>) -> Html {
    html! { <meta name={name} content={content.into()} /> }
}

/// Everything a page contributes to `<head>`.
#[function_component(HeadTags)]
pub fn head_tags(p: &Props) -> Html {
    let meta = &p.metadata;
    let og = &meta.open_graph;
    let twitter = &meta.twitter;
    let robots = if p.noindex { NOINDEX } else { ROBOTS };

    html! {
        <>
            <title>{ meta.document_title(&p.site) }</title>
            { meta_name("description", meta.description.clone()) }
            { meta_name("keywords", p.site.keywords.join(", ")) }
            { meta_name("robots", robots) }
            <link rel="canonical" href={meta.canonical.clone()} />
            <link rel="preconnect" href={p.site.iframe_origin()} />

            { meta_property("og:title", og.title.clone()) }
            { meta_property("og:description", og.description.clone()) }
            { meta_property("og:url", og.url.clone()) }
            { meta_property("og:type", og.og_type.as_str()) }
            { meta_property("og:site_name", og.site_name.clone()) }
            { meta_property("og:locale", og.locale) }
            { for og.images.iter().map(|image| html! {
                <>
                    { meta_property("og:image", image.url.clone()) }
                    { meta_property("og:image:secure_url", image.secure_url.clone()) }
                    { meta_property("og:image:type", image.mime_type) }
                    { meta_property("og:image:width", image.width.to_string()) }
                    { meta_property("og:image:height", image.height.to_string()) }
                    { meta_property("og:image:alt", image.alt) }
                </>
            }) }

            { meta_name("twitter:card", twitter.card) }
            { meta_name("twitter:site", twitter.site.clone()) }
            { meta_name("twitter:creator", twitter.creator.clone()) }
            { meta_name("twitter:title", twitter.title.clone()) }
            { meta_name("twitter:description", twitter.description.clone()) }
            { for twitter.images.iter().map(|image| meta_name("twitter:image", image.clone())) }
        </>
    }
}
