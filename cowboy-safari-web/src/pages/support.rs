use super::section_intro;
use crate::components::{RecommendationGrid, StructuredData};
use crate::context::use_catalog;
use cowboy_safari_core::{SiteConfig, SitePage};
use yew::prelude::*;

pub const PRIVACY_ANCHOR: &str = "privacy";

fn mail_link(site: &SiteConfig) -> Html {
    html! { <a href={site.mailto()}>{ &site.contact_email }</a> }
}

fn privacy_section(site: &SiteConfig) -> Html {
    html! {
        <section id={PRIVACY_ANCHOR} class="privacy">
            <div class="privacy-main">
                <p class="eyebrow">{ "Email-first support" }</p>
                <h2>{ "Tell us what Cowboy Safari help you need." }</h2>
                <p class="lede">
                    { "Skip forms and just email " }
                    { mail_link(site) }
                    { " with your name, device, time of issue, and (optional) session ID. That inbox routes directly to the same volunteers who monitor uptime and community safety." }
                </p>
                <div class="privacy-template">
                    <p class="callout-title">{ "Suggested email template" }</p>
                    <ul>
                        <li>{ "Subject: “Cowboy Safari support – topic”" }</li>
                        <li>{ "Body: Who is writing, platform, timestamp, short description" }</li>
                        <li>{ "Attach screenshots or clips if available (HUD visible)" }</li>
                    </ul>
                </div>
                <div class="privacy-pledge">
                    <p class="callout-title">{ "Response pledge" }</p>
                    <p>{ "Cowboy Safari outages and safety flags receive replies in ≤2 hours. All other notes receive a thoughtful response within 12 hours." }</p>
                </div>
                <a href={site.mailto()} class="btn-primary">{ "Compose Email" }</a>
            </div>
            <aside class="privacy-aside">
                <div class="callout">
                    <h3>{ "Need live help?" }</h3>
                    <p>
                        { "Call the hotline listed above or message " }
                        { mail_link(site) }
                        { ". Mention “Cowboy Safari” in the subject so our filters prioritize it." }
                    </p>
                    <ul>
                        <li>{ "Weekdays: 9:00 a.m.–7:00 p.m. Central" }</li>
                        <li>{ "Weekends: Email only, monitored hourly" }</li>
                        <li>{ "Languages: English + Spanish relay" }</li>
                    </ul>
                </div>
                <div class="callout">
                    <h3>{ "Document checklist" }</h3>
                    <p>{ "Attach these when possible to speed up Cowboy Safari investigations:" }</p>
                    <ul>
                        <li>{ "Screenshot or clip with visible HUD" }</li>
                        <li>{ "Browser, device, and connection info" }</li>
                        <li>{ "Time zone plus local time of the incident" }</li>
                        <li>{ "Names of involved Cowboy Safari players" }</li>
                    </ul>
                </div>
            </aside>
        </section>
    }
}

#[function_component(SupportPage)]
pub fn support_page() -> Html {
    let catalog = use_catalog();
    let site = &catalog.site;
    let support = &catalog.support;

    html! {
        <>
            <section class="page-hero">
                <p class="eyebrow">{ "Support & Trust Center" }</p>
                <h1>{ "Cowboy Safari help for parents, players, and partner teams." }</h1>
                <p class="lede">
                    { "This independent desk handles Cowboy Safari uptime alerts, moderation escalations, privacy exports, and school deployment requests. Reach out anytime; we monitor the inbox and hotline so you can focus on enjoying the game." }
                </p>
                <div class="status-board">
                    { for support.status_board.iter().map(|item| html! {
                        <div key={item.label.clone()} class="status-item">
                            <p class="eyebrow">{ &item.label }</p>
                            <p class="status-value">{ &item.value }</p>
                            <p class="muted">{ &item.detail }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="commitments">
                { for support.commitments.iter().map(|section| html! {
                    <article key={section.title.clone()} class="commitment">
                        <h2>{ &section.title }</h2>
                        { for section.paragraphs.iter().map(|paragraph| html! {
                            <p key={paragraph.clone()}>{ paragraph }</p>
                        }) }
                    </article>
                }) }
            </section>

            { privacy_section(site) }

            <section class="support-faq">
                { section_intro(
                    "Parent & player FAQ",
                    "Cowboy Safari help articles answered in plain language.",
                    "Use these fast answers before waiting for a reply. We keep the Cowboy Safari knowledge base public so everyone shares the same expectations.",
                ) }
                <div class="faq-list">
                    { for support.faq.iter().map(|faq| html! {
                        <details key={faq.question.clone()} class="faq-item">
                            <summary>{ &faq.question }</summary>
                            <p>{ &faq.answer }</p>
                        </details>
                    }) }
                </div>
            </section>

            <section class="related">
                <div class="related-intro">
                    { section_intro(
                        "Guided downtime",
                        "Rotate to curated titles while Cowboy Safari patches deploy.",
                        "Keeping riders busy elsewhere prevents burnout. These recommendations echo the homepage but add notes that focus on patience, communication, and healthy play sessions before the next Cowboy Safari marathon.",
                    ) }
                    <p class="callout">
                        { "Share your own Cowboy Safari downtime rituals with " }
                        { mail_link(site) }
                        { ". We rotate the advice monthly and credit contributors (first name + city) when permission is granted." }
                    </p>
                </div>
                <RecommendationGrid games={catalog.related_games.clone()} />
            </section>

            <StructuredData
                id={SitePage::Support.schema_script_id()}
                data={SitePage::Support.structured_data(&catalog)}
            />
        </>
    }
}
