//! Hero play panel interaction lifecycle.
//!
//! The panel's only client-side state is `controls_open`, a transient toast and
//! the one-shot view-tracking latch. Fullscreen and share are resolved through
//! [`FallbackChain`]s against injected capabilities, and every user-visible
//! failure collapses into a toast.

use crate::analytics::{AnalyticsEvent, AnalyticsSink, Cta};
use crate::capability::{CapabilityError, FullscreenApi, FullscreenTarget, ShareCapabilities};
use crate::config::SiteConfig;
use crate::fallback::{FallbackChain, FallbackOutcome};
use serde::Serialize;
use std::time::Duration;

/// How long a toast stays up.
pub const TOAST_TTL: Duration = Duration::from_millis(3200);
/// Fraction of the iframe that must be visible before it counts as viewed.
pub const VIEW_THRESHOLD: f64 = 0.4;

pub const FULLSCREEN_BLOCKED: &str = "Your browser blocked fullscreen. Try manual controls (F11).";
pub const LINK_COPIED: &str = "Link copied for you.";
pub const SHARE_CANCELED: &str = "Sharing was canceled.";
pub const SHARE_TEXT: &str = "Jump into Cowboy Safari instantly with me.";

/// Identifies one toast; an expiry only clears the toast it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastTicket {
    pub generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroPanelState {
    pub controls_open: bool,
    pub toast: Option<String>,
    pub toast_generation: u64,
    pub has_tracked_view: bool,
}

impl HeroPanelState {
    pub fn toggle_controls(&mut self) {
        self.controls_open = !self.controls_open;
    }

    pub fn close_controls(&mut self) {
        self.controls_open = false;
    }

    /// Replace the current toast. Any ticket issued before this one goes stale.
    pub fn show_toast(&mut self, message: impl Into<String>) -> ToastTicket {
        self.toast_generation = self.toast_generation.wrapping_add(1);
        self.toast = Some(message.into());
        ToastTicket {
            generation: self.toast_generation,
        }
    }

    /// Clear the toast if `ticket` is still the live one. Returns whether it cleared.
    pub fn expire_toast(&mut self, ticket: ToastTicket) -> bool {
        if self.toast.is_some() && ticket.generation == self.toast_generation {
            self.toast = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn current_ticket(&self) -> Option<ToastTicket> {
        self.toast.as_ref().map(|_| ToastTicket {
            generation: self.toast_generation,
        })
    }

    /// An observer is only needed until the first view is recorded.
    #[must_use]
    pub const fn should_observe(&self) -> bool {
        !self.has_tracked_view
    }

    /// Feed one visibility sample (the visible fraction of the iframe).
    /// Latches the view flag and returns true only the first time the ratio
    /// reaches [`VIEW_THRESHOLD`].
    pub fn observe_view(&mut self, visible_ratio: f64) -> bool {
        if self.has_tracked_view || visible_ratio < VIEW_THRESHOLD {
            return false;
        }
        self.has_tracked_view = true;
        true
    }
}

/// Emits `iframe_view` for one game. The latch deciding when lives in
/// [`HeroPanelState::observe_view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTracker {
    game: String,
}

impl ViewTracker {
    #[must_use]
    pub fn new(game: impl Into<String>) -> Self {
        Self { game: game.into() }
    }

    pub fn emit(&self, sink: &dyn AnalyticsSink) {
        AnalyticsEvent::iframe_view(&self.game).record_to(sink);
    }
}

/// Data handed to the native share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    #[must_use]
    pub fn for_site(config: &SiteConfig) -> Self {
        Self {
            title: config.name.clone(),
            text: SHARE_TEXT.to_string(),
            url: config.base_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareMode {
    Native,
    Clipboard,
    Manual,
}

impl ShareMode {
    pub const ORDER: [Self; 3] = [Self::Native, Self::Clipboard, Self::Manual];
}

/// What an action did and which toast, if any, the panel should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport<M> {
    pub outcome: Result<FallbackOutcome<M>, CapabilityError>,
    pub toast: Option<String>,
}

/// Request fullscreen on `target`, trying the standard API then vendor prefixes.
pub fn request_fullscreen(
    target: &dyn FullscreenTarget,
    sink: &dyn AnalyticsSink,
) -> ActionReport<FullscreenApi> {
    let chain = FallbackChain::new(FullscreenApi::ORDER);
    let outcome = chain.resolve(|api| target.supports(api), |api| target.request(api));
    let toast = match &outcome {
        Ok(FallbackOutcome::Succeeded(_) | FallbackOutcome::FellBackTo(_)) => {
            AnalyticsEvent::cta_click(Cta::Fullscreen).record_to(sink);
            None
        }
        Ok(FallbackOutcome::Unavailable) => Some(FULLSCREEN_BLOCKED.to_string()),
        Err(err) => {
            log::warn!("fullscreen request failed: {err}");
            Some(FULLSCREEN_BLOCKED.to_string())
        }
    };
    ActionReport { outcome, toast }
}

/// Share the site: native share sheet, then clipboard, then manual instructions.
pub async fn share_site(
    caps: &dyn ShareCapabilities,
    sink: &dyn AnalyticsSink,
    config: &SiteConfig,
) -> ActionReport<ShareMode> {
    let payload = SharePayload::for_site(config);
    let payload = &payload;
    let url = config.base_url.as_str();
    let chain = FallbackChain::new(ShareMode::ORDER);
    let outcome = chain
        .resolve_async(
            |mode| match mode {
                ShareMode::Native => caps.has_native_share(),
                ShareMode::Clipboard => caps.has_clipboard(),
                ShareMode::Manual => true,
            },
            |mode| async move {
                match mode {
                    ShareMode::Native => caps.native_share(payload).await,
                    ShareMode::Clipboard => caps.write_clipboard(url).await,
                    ShareMode::Manual => Ok(()),
                }
            },
        )
        .await;

    let toast = match &outcome {
        Ok(handled) => {
            AnalyticsEvent::cta_click(Cta::Share).record_to(sink);
            match handled.mode() {
                Some(ShareMode::Clipboard) => Some(LINK_COPIED.to_string()),
                Some(ShareMode::Manual) => Some(format!("Copy this link manually: {url}")),
                Some(ShareMode::Native) | None => None,
            }
        }
        Err(err) => {
            log::warn!("share failed: {err}");
            Some(SHARE_CANCELED.to_string())
        }
    };
    ActionReport { outcome, toast }
}
