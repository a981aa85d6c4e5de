use crate::context::use_catalog;
use crate::paths::asset_path;
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    let catalog = use_catalog();
    let site = &catalog.site;
    html! {
        <header role="banner" class="site-header">
            <div class="header-content">
                <a href="/" class="brand" aria-label={format!("{} home", site.name)}>
                    <img
                        src={asset_path("logo.png")}
                        alt="Cowboy Safari badge"
                        width="56"
                        height="56"
                        class="brand-logo"
                    />
                    <div>
                        <p class="brand-name">{ &site.short_name }</p>
                        <p class="brand-tagline">{ &site.hero_tagline }</p>
                    </div>
                </a>
                <nav aria-label="Primary" class="header-nav">
                    { for site.nav.iter().map(|item| html! {
                        <a key={item.href.clone()} href={item.href.clone()}>{ &item.label }</a>
                    }) }
                </nav>
                <div class="header-actions">
                    <a class="btn-outline" href={site.mailto()}>{ "Contact" }</a>
                    <a class="btn-primary" href="/#play">{ "Launch Game" }</a>
                </div>
            </div>
        </header>
    }
}
