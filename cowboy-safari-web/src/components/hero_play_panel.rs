use super::Toast;
use crate::browser;
use crate::context::{use_analytics, use_catalog};
use cowboy_safari_core::{
    HeroPanelState, InfoPill, TOAST_TTL, ToastTicket, VIEW_THRESHOLD, ViewTracker,
    request_fullscreen, share_site,
};
use std::ops::Deref;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

pub const IFRAME_ID: &str = "cowboy-safari-iframe";

pub enum PanelAction {
    ToggleControls,
    CloseControls,
    ShowToast(String),
    ExpireToast(ToastTicket),
    /// Visible fraction of the iframe reported by the observer.
    Visibility(f64),
}

/// Reducer wrapper around [`HeroPanelState`].
#[derive(Default, PartialEq)]
pub struct PanelState(HeroPanelState);

impl Deref for PanelState {
    type Target = HeroPanelState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            PanelAction::ToggleControls => next.toggle_controls(),
            PanelAction::CloseControls => next.close_controls(),
            PanelAction::ShowToast(message) => {
                next.show_toast(message);
            }
            PanelAction::ExpireToast(ticket) => {
                if !next.expire_toast(ticket) {
                    return self;
                }
            }
            PanelAction::Visibility(ratio) => {
                if !next.observe_view(ratio) {
                    return self;
                }
            }
        }
        Rc::new(Self(next))
    }
}

#[function_component(HeroPlayPanel)]
pub fn hero_play_panel() -> Html {
    let catalog = use_catalog();
    let analytics = use_analytics();
    let state = use_reducer(PanelState::default);
    let iframe_ref = use_node_ref();
    let tracker = {
        let game = catalog.site.short_name.clone();
        use_memo(game, |game| ViewTracker::new(game.clone()))
    };

    // Observe the iframe until the state latches the first view, then record it once.
    {
        let iframe_ref = iframe_ref.clone();
        let analytics = analytics.clone();
        let dispatcher = state.dispatcher();
        use_effect_with(state.should_observe(), move |&should_observe| {
            let observer = if should_observe {
                browser::observe_visibility(&iframe_ref, VIEW_THRESHOLD, move |ratio| {
                    // Re-rendering disconnects this observer; leave the callback first.
                    let dispatcher = dispatcher.clone();
                    spawn_local(async move {
                        dispatcher.dispatch(PanelAction::Visibility(ratio));
                    });
                })
            } else {
                tracker.emit(analytics.sink());
                None
            };
            move || drop(observer)
        });
    }

    // One timer per toast; a newer toast replaces the ticket and cancels the old timer.
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.current_ticket(), move |ticket| {
            let timer = (*ticket).and_then(|ticket| {
                browser::schedule_timeout(TOAST_TTL, move || {
                    spawn_local(async move {
                        dispatcher.dispatch(PanelAction::ExpireToast(ticket));
                    });
                })
            });
            move || drop(timer)
        });
    }

    let on_fullscreen = {
        let iframe_ref = iframe_ref.clone();
        let analytics = analytics.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let target = browser::fullscreen_target(&iframe_ref);
            let report = request_fullscreen(target.as_ref(), analytics.sink());
            if let Some(message) = report.toast {
                dispatcher.dispatch(PanelAction::ShowToast(message));
            }
        })
    };

    let on_share = {
        let analytics = analytics.clone();
        let dispatcher = state.dispatcher();
        let catalog = catalog.clone();
        Callback::from(move |_: MouseEvent| {
            let analytics = analytics.clone();
            let dispatcher = dispatcher.clone();
            let catalog = catalog.clone();
            spawn_local(async move {
                let caps = browser::share_capabilities();
                let report = share_site(caps.as_ref(), analytics.sink(), &catalog.site).await;
                if let Some(message) = report.toast {
                    dispatcher.dispatch(PanelAction::ShowToast(message));
                }
            });
        })
    };

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PanelAction::ToggleControls))
    };
    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PanelAction::CloseControls))
    };

    let site = &catalog.site;
    let hero = &catalog.hero;

    let controls = if state.controls_open {
        html! {
            <div class="controls-panel" id="controls-panel">
                <div class="controls-header">
                    <p class="controls-title">{ "Controller & keyboard layout" }</p>
                    <button type="button" class="link-button" onclick={on_close}>{ "Close" }</button>
                </div>
                <ul class="controls-list">
                    { for hero.control_mappings.iter().map(|mapping| html! {
                        <li key={mapping.action.clone()}>
                            <div class="control-action">{ &mapping.action }</div>
                            <p>{ &mapping.input }</p>
                            <p class="control-note">{ &mapping.note }</p>
                        </li>
                    }) }
                </ul>
            </div>
        }
    } else {
        Html::default()
    };

    let download_cards = hero.download_cards.iter().map(|card| {
        let href = site.download_url(&card.store).unwrap_or("#").to_string();
        html! {
            <a key={card.platform.clone()} class="download-card" href={href} target="_blank" rel="noopener noreferrer">
                <div class="download-art" style={format!("background-image: {}", card.gradient)} aria-hidden="true" />
                <p class="eyebrow">{ &card.platform }</p>
                <p class="download-name">{ &card.name }</p>
                <p>{ &card.summary }</p>
                <p class="muted">{ &card.meta }</p>
                <span class="download-cta">{ "Open store page" }</span>
            </a>
        }
    });

    let info_pills = InfoPill::for_site(site).into_iter().map(|pill| {
        let value = match &pill.href {
            Some(href) => html! { <a href={href.clone()}>{ &pill.value }</a> },
            None => html! { <p>{ &pill.value }</p> },
        };
        html! {
            <div key={pill.label.clone()} class="info-pill">
                <p class="eyebrow">{ &pill.label }</p>
                { value }
            </div>
        }
    });

    html! {
        <section id="play" class="hero-play">
            <div class="hero-grid">
                <div class="hero-stage" aria-live="polite">
                    <iframe
                        ref={iframe_ref}
                        id={IFRAME_ID}
                        title="Play Cowboy Safari online"
                        src={site.iframe_src.clone()}
                        loading="lazy"
                        allowfullscreen="true"
                    />
                    <div class="hero-stage-actions">
                        <button type="button" class="round-button share" aria-label="Share Cowboy Safari session" onclick={on_share}>
                            { "Share" }
                        </button>
                        <button type="button" class="round-button fullscreen" aria-label="Fullscreen the Cowboy Safari iframe" onclick={on_fullscreen}>
                            { "Fullscreen" }
                        </button>
                    </div>
                    <p class="muted">
                        { format!("The Cowboy Safari desktop build streams directly from {} via secure HTTPS. No overlays, no intrusive ads, just the pure game feed.", site.iframe_host()) }
                    </p>
                </div>
                <div class="hero-sidebar">
                    <div>
                        <p class="eyebrow">{ "Zero-Delay Lobby" }</p>
                        <h1>{ "Cowboy Safari instant play with fullscreen, control tips, and trustworthy uptime data." }</h1>
                    </div>
                    <div class="quick-links">
                        <button type="button" aria-expanded={state.controls_open.to_string()} aria-controls="controls-panel" onclick={on_toggle}>
                            { "Toggle Controls Panel" }
                        </button>
                        <a href="/guides" class="btn-primary">{ "Browse Guides" }</a>
                        <a href={site.mailto()}>{ "Email Support" }</a>
                        <a href="/support">{ "Check Uptime Feed" }</a>
                    </div>
                    { controls }
                    <div class="download-cards">{ for download_cards }</div>
                    <div class="info-pills">{ for info_pills }</div>
                    <p class="transparency">
                        { format!("{} is operated by players, not the official studio. The iframe stays untouched so you can rely on the same inputs, saves, and achievements you expect on {}. Contact ", site.name, site.iframe_host()) }
                        <a href={site.mailto()}>{ &site.contact_email }</a>
                        { " for takedowns or latency reports." }
                    </p>
                </div>
            </div>
            <Toast message={state.toast.clone().map(AttrValue::from)} />
        </section>
    }
}
