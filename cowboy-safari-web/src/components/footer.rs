use crate::context::use_catalog;
use crate::paths::is_external;
use cowboy_safari_core::FooterLink;
use yew::prelude::*;

/// Current calendar year in UTC.
#[must_use]
pub fn current_utc_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        i32::try_from(js_sys::Date::new_0().get_utc_full_year()).unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use chrono::Datelike;
        chrono::Utc::now().year()
    }
}

fn link_list(heading: &str, links: &[FooterLink]) -> Html {
    html! {
        <div class="footer-links">
            <p class="footer-heading">{ heading }</p>
            { for links.iter().map(|link| {
                let rel = is_external(&link.href).then_some("noopener");
                html! {
                    <a key={link.href.clone()} href={link.href.clone()} rel={rel}>{ &link.label }</a>
                }
            }) }
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let catalog = use_catalog();
    let site = &catalog.site;
    html! {
        <footer role="contentinfo" class="site-footer">
            <div class="footer-grid">
                <div>
                    <p class="footer-heading">{ &site.short_name }</p>
                    <p class="footer-title">{ "Independent Cowboy Safari." }</p>
                    <p class="muted">
                        { "Fan-built, non-commercial and transparent about the azgames.io iframe source. Reach us at " }
                        <a href={site.mailto()}>{ &site.contact_email }</a>
                        { "." }
                    </p>
                </div>
                { link_list("Site", &catalog.footer.site_links) }
                { link_list("Recommended Sites", &catalog.footer.friend_links) }
            </div>
            <div class="footer-legal">
                <p>{ format!("© {} {}. All rights reserved.", current_utc_year(), site.domain) }</p>
                <p>{ "Not affiliated with Azgames or the Cowboy Safari dev team." }</p>
            </div>
        </footer>
    }
}
