pub mod guides;
pub mod home;
pub mod not_found;
pub mod support;

pub use guides::GuidesPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use support::SupportPage;

use yew::prelude::*;

/// Eyebrow, heading and lede shared by the section intros on every page.
pub(crate) fn section_intro(eyebrow: &str, title: &str, lede: &str) -> Html {
    html! {
        <div class="section-intro">
            <p class="eyebrow">{ eyebrow.to_string() }</p>
            <h2>{ title.to_string() }</h2>
            <p class="lede">{ lede.to_string() }</p>
        </div>
    }
}
