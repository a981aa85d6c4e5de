use super::section_intro;
use crate::components::{HeroPlayPanel, RecommendationGrid, StructuredData};
use crate::context::use_catalog;
use cowboy_safari_core::{FoldKind, FoldSection, HomeContent, SitePage};
use yew::prelude::*;

fn fold_body(home: &HomeContent, section: &FoldSection) -> Html {
    match section.kind {
        FoldKind::Faq => html! {
            <div class="fold-faq">
                { for home.faq.iter().map(|faq| html! {
                    <div key={faq.question.clone()} class="faq-item">
                        <p class="faq-question">{ &faq.question }</p>
                        <p>{ &faq.answer }</p>
                    </div>
                }) }
            </div>
        },
        FoldKind::Timeline => html! {
            <ol class="fold-timeline">
                { for home.timeline.iter().map(|event| html! {
                    <li key={event.version.clone()}>
                        <p class="eyebrow">{ &event.date }</p>
                        <p class="timeline-version">{ &event.version }</p>
                        <p>{ &event.notes }</p>
                    </li>
                }) }
            </ol>
        },
        FoldKind::Paragraphs => html! {
            <div class="fold-copy">
                { for section.content.iter().map(|paragraph| html! {
                    <p key={paragraph.clone()}>{ paragraph }</p>
                }) }
            </div>
        },
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let catalog = use_catalog();
    let home = &catalog.home;

    html! {
        <>
            <HeroPlayPanel />
            <section class="editorial">
                <div class="editorial-grid">
                    { for home.editorial_sections.iter().map(|section| html! {
                        <article key={section.title.clone()} class="editorial-card">
                            <p class="eyebrow">{ &section.eyebrow }</p>
                            <h2>{ &section.title }</h2>
                            { for section.paragraphs.iter().map(|paragraph| html! {
                                <p key={paragraph.clone()}>{ paragraph }</p>
                            }) }
                        </article>
                    }) }
                </div>
            </section>

            <section class="compendium">
                { section_intro(
                    "Strategy Compendium",
                    "Everything you need before, during, and after a Cowboy Safari run.",
                    "Use the fold-out cards to dive into mechanics, troubleshoot tricky bugs, or scan the latest patch notes. Each panel is updated weekly so your Cowboy Safari prep never goes stale.",
                ) }
                <div class="fold-list">
                    { for home.fold_sections.iter().map(|section| html! {
                        <details key={section.title.clone()} class="fold">
                            <summary>
                                <div>
                                    <p class="eyebrow">{ &section.kicker }</p>
                                    <h3>{ &section.title }</h3>
                                </div>
                                <span class="badge">{ home.fold_badge(section) }</span>
                            </summary>
                            { fold_body(home, section) }
                        </details>
                    }) }
                </div>
            </section>

            <section class="related">
                <div class="related-intro">
                    { section_intro(
                        "Curated Alternatives",
                        "Related games that sharpen Cowboy Safari instincts.",
                        "We keep the list short, annotate why each experience matters, and revisit the lineup monthly so your Cowboy Safari skillset keeps evolving. Every write-up clarifies which Cowboy Safari mechanic benefits most, whether it is stamina weaving, multi-target lasso play, or positioning discipline.",
                    ) }
                    <div class="callout">
                        <p class="callout-title">{ "Update pledge" }</p>
                        <p>{ "Every recommendation stays in rotation only if the link works, the gameplay stays legal, and the skill transfer to Cowboy Safari is obvious. Tap any card to open it in a clean new tab and watch for the Cowboy Safari compatibility tag we include in each tooltip." }</p>
                    </div>
                </div>
                <RecommendationGrid games={catalog.related_games.clone()} />
            </section>

            <StructuredData
                id={SitePage::Home.schema_script_id()}
                data={SitePage::Home.structured_data(&catalog)}
            />
        </>
    }
}
