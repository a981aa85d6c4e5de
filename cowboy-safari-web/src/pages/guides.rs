use super::section_intro;
use crate::components::{RecommendationGrid, StructuredData};
use crate::context::use_catalog;
use cowboy_safari_core::{Guide, SitePage};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuideArticleProps {
    pub guide: Guide,
}

/// One guide, anchored by its slug so `/guides#slug` links land on it.
#[function_component(GuideArticle)]
pub fn guide_article(p: &GuideArticleProps) -> Html {
    let guide = &p.guide;
    html! {
        <article id={guide.slug.clone()} class="guide">
            <p class="eyebrow">{ &guide.focus }</p>
            <h2>{ &guide.title }</h2>
            <p class="muted">{ format!("{} · {}", guide.reading_time, guide.difficulty) }</p>
            <p class="lede">{ &guide.summary }</p>
            <ul class="takeaways">
                { for guide.key_takeaways.iter().map(|tip| html! {
                    <li key={tip.clone()}>{ tip }</li>
                }) }
            </ul>
            <div class="guide-body">
                { for guide.body.iter().map(|paragraph| html! {
                    <p key={paragraph.clone()}>{ paragraph }</p>
                }) }
            </div>
        </article>
    }
}

#[function_component(GuidesPage)]
pub fn guides_page() -> Html {
    let catalog = use_catalog();
    let site = &catalog.site;

    html! {
        <>
            <section class="page-hero">
                <p class="eyebrow">{ "Guides & Playbook" }</p>
                <h1>{ "Cowboy Safari guides curated by real riders, refreshed every Thursday." }</h1>
                <p class="lede">
                    { "Each guide blends hands-on testing, leaderboard replay analysis, and parent-mode notes. Bookmark this hub whenever you need actionable Cowboy Safari advice without wading through cluttered aggregator feeds." }
                </p>
                <div class="pill-row">
                    <span class="pill">{ format!("Updated {}", site.last_updated_short()) }</span>
                    <span class="pill">{ format!("{} evergreen routes", catalog.guides.len()) }</span>
                    <span class="pill">{ "Zero ads policy" }</span>
                </div>
            </section>

            <section class="guides">
                <div class="guide-grid">
                    { for catalog.guides.iter().map(|guide| html! {
                        <GuideArticle key={guide.slug.clone()} guide={guide.clone()} />
                    }) }
                </div>
            </section>

            <section class="related">
                <div class="related-intro">
                    { section_intro(
                        "More to explore",
                        "Rotate through fresh experiences before your next Cowboy Safari push.",
                        "These cards mirror the homepage list, but we append notes about which Cowboy Safari skill each title reinforces.",
                    ) }
                    <p class="callout">
                        { "Feedback welcome. If you want a specific Cowboy Safari mechanic covered, email " }
                        <a href={site.mailto()}>{ &site.contact_email }</a>
                        { ", and we will prioritize it in the next editorial sprint." }
                    </p>
                </div>
                <RecommendationGrid games={catalog.related_games.clone()} />
            </section>

            <StructuredData
                id={SitePage::Guides.schema_script_id()}
                data={SitePage::Guides.structured_data(&catalog)}
            />
        </>
    }
}
