//! Browser capabilities the hero panel depends on, abstracted so the fallback
//! logic can run against real browser APIs and against test doubles alike.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Fullscreen entry points, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenApi {
    Standard,
    Webkit,
    Moz,
}

impl FullscreenApi {
    pub const ORDER: [Self; 3] = [Self::Standard, Self::Webkit, Self::Moz];

    /// Method name on the element.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::Standard => "requestFullscreen",
            Self::Webkit => "webkitRequestFullscreen",
            Self::Moz => "mozRequestFullScreen",
        }
    }
}

/// An element that may be asked to go fullscreen.
pub trait FullscreenTarget {
    fn supports(&self, api: FullscreenApi) -> bool;

    /// Issue the request through the given entry point.
    ///
    /// # Errors
    ///
    /// Returns an error if the call itself throws.
    fn request(&self, api: FullscreenApi) -> Result<(), CapabilityError>;
}

/// Native share sheet and clipboard access.
#[async_trait(?Send)]
pub trait ShareCapabilities {
    fn has_native_share(&self) -> bool;

    /// Open the platform share sheet; resolves when the user completes or cancels.
    ///
    /// # Errors
    ///
    /// Returns an error on cancellation or when the platform refuses.
    async fn native_share(&self, payload: &crate::hero::SharePayload)
    -> Result<(), CapabilityError>;

    fn has_clipboard(&self) -> bool;

    /// Write text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error when permission is denied.
    async fn write_clipboard(&self, text: &str) -> Result<(), CapabilityError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullscreen_order_prefers_standard() {
        let methods: Vec<_> = FullscreenApi::ORDER.iter().map(|api| api.method()).collect();
        assert_eq!(
            methods,
            ["requestFullscreen", "webkitRequestFullscreen", "mozRequestFullScreen"]
        );
    }

    #[test]
    fn errors_render_readably() {
        assert_eq!(
            CapabilityError::Unavailable("clipboard").to_string(),
            "clipboard is not available"
        );
        assert!(
            CapabilityError::Rejected("AbortError".into())
                .to_string()
                .contains("AbortError")
        );
    }
}
