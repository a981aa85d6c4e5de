use super::{Footer, Header};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

/// Skip link, header, the `main` landmark and footer around every page.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="page-shell">
            <a href="#main" class="skip-link">{ "Skip to content" }</a>
            <Header />
            <main id="main" role="main" class="page-main">
                { props.children.clone() }
            </main>
            <Footer />
        </div>
    }
}
