//! Ordered capability fallback.
//!
//! A chain is a list of modes tried in order. Each mode has a probe (is this
//! capability present?) and an attempt. The first mode whose probe passes is
//! attempted; later modes are never tried once an attempt has been made, so an
//! attempt error is reported as-is rather than falling through.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackOutcome<M> {
    /// The preferred (first) mode was available and succeeded.
    Succeeded(M),
    /// A later mode was used.
    FellBackTo(M),
    /// No mode was available.
    Unavailable,
}

impl<M: Copy> FallbackOutcome<M> {
    /// Mode that handled the request, if any.
    #[must_use]
    pub const fn mode(&self) -> Option<M> {
        match self {
            Self::Succeeded(mode) | Self::FellBackTo(mode) => Some(*mode),
            Self::Unavailable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain<M> {
    modes: Vec<M>,
}

impl<M: Copy + std::fmt::Debug> FallbackChain<M> {
    #[must_use]
    pub fn new(modes: impl IntoIterator<Item = M>) -> Self {
        Self {
            modes: modes.into_iter().collect(),
        }
    }

    fn first_available(&self, probe: impl Fn(M) -> bool) -> Option<(usize, M)> {
        self.modes
            .iter()
            .copied()
            .enumerate()
            .find(|(_, mode)| probe(*mode))
    }

    fn outcome(index: usize, mode: M) -> FallbackOutcome<M> {
        if index == 0 {
            FallbackOutcome::Succeeded(mode)
        } else {
            FallbackOutcome::FellBackTo(mode)
        }
    }

    /// Attempt the first available mode.
    ///
    /// # Errors
    ///
    /// Returns the attempt's error; no further modes are tried after it.
    pub fn resolve<E>(
        &self,
        probe: impl Fn(M) -> bool,
        mut attempt: impl FnMut(M) -> Result<(), E>,
    ) -> Result<FallbackOutcome<M>, E> {
        let Some((index, mode)) = self.first_available(probe) else {
            log::debug!("fallback: none of {:?} available", self.modes);
            return Ok(FallbackOutcome::Unavailable);
        };
        log::debug!("fallback: attempting {mode:?}");
        attempt(mode)?;
        Ok(Self::outcome(index, mode))
    }

    /// Async form of [`FallbackChain::resolve`].
    ///
    /// # Errors
    ///
    /// Returns the attempt's error; no further modes are tried after it.
    pub async fn resolve_async<E, F, Fut>(
        &self,
        probe: impl Fn(M) -> bool,
        mut attempt: F,
    ) -> Result<FallbackOutcome<M>, E>
    where
        F: FnMut(M) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let Some((index, mode)) = self.first_available(probe) else {
            log::debug!("fallback: none of {:?} available", self.modes);
            return Ok(FallbackOutcome::Unavailable);
        };
        log::debug!("fallback: attempting {mode:?}");
        attempt(mode).await?;
        Ok(Self::outcome(index, mode))
    }
}
