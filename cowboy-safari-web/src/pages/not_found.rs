use crate::router::{NOT_FOUND_DESCRIPTION, NOT_FOUND_TITLE};
use yew::prelude::*;

/// Shown for any path the router does not know.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ NOT_FOUND_TITLE }</h1>
            <p>{ NOT_FOUND_DESCRIPTION }</p>
            <div class="quick-links">
                <a href="/#play" class="btn-primary">{ "Launch Game" }</a>
                <a href="/guides">{ "Browse Guides" }</a>
                <a href="/support">{ "Visit Support" }</a>
            </div>
        </section>
    }
}
