use crate::context::{AnalyticsHandle, CatalogHandle};
use crate::components::Layout;
use crate::pages::{GuidesPage, HomePage, NotFound, SupportPage};
use crate::paths;
use crate::router::Route;
use cowboy_safari_core::Catalog;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

/// Root component. The site builder passes `path` and `catalog`; the browser
/// hydrates with no props and picks up the current location.
#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    /// Route path to render at (server side). `None` follows the browser location.
    #[prop_or_default]
    pub path: Option<AttrValue>,
    #[prop_or_default]
    pub catalog: Option<Rc<Catalog>>,
    #[prop_or_default]
    pub analytics: Option<AnalyticsHandle>,
}

fn history_for(path: Option<&str>) -> AnyHistory {
    match path {
        Some(path) => {
            let history = MemoryHistory::new();
            history.push(paths::location_of(path));
            history.into()
        }
        None => default_history(),
    }
}

#[cfg(target_arch = "wasm32")]
fn default_history() -> AnyHistory {
    yew_router::history::BrowserHistory::new().into()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_history() -> AnyHistory {
    history_for(Some("/"))
}

#[cfg(target_arch = "wasm32")]
fn default_analytics() -> AnalyticsHandle {
    AnalyticsHandle::from_rc(crate::browser::analytics_sink())
}

#[cfg(not(target_arch = "wasm32"))]
fn default_analytics() -> AnalyticsHandle {
    AnalyticsHandle::noop()
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let history = {
        let path = props.path.clone();
        use_memo(path, |path| history_for(path.as_deref()))
    };
    let catalog = {
        let catalog = props.catalog.clone();
        use_memo(catalog, |catalog| {
            catalog.clone().map_or_else(CatalogHandle::default, CatalogHandle::new)
        })
    };
    let analytics = {
        let analytics = props.analytics.clone();
        use_memo(analytics, |analytics| analytics.clone().unwrap_or_else(default_analytics))
    };
    let basename = paths::router_base().map(AttrValue::from);

    html! {
        <Router history={(*history).clone()} basename={basename}>
            <ContextProvider<CatalogHandle> context={(*catalog).clone()}>
                <ContextProvider<AnalyticsHandle> context={(*analytics).clone()}>
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                </ContextProvider<AnalyticsHandle>>
            </ContextProvider<CatalogHandle>>
        </Router>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Guides => html! { <GuidesPage /> },
        Route::Support => html! { <SupportPage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
