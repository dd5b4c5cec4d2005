//! One-shot loading flag: `Idle → Loading → Resolved`.
//!
//! Loading starts when the dashboard is shown and resolves once. There is no
//! transition back: after [`LoadingState::finish`] the flag never sets again.

use core::time::Duration;

/// Default time between showing the dashboard and resolving the shimmer.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_secs(10);

/// Lifecycle phase of the loading flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    /// The dashboard has not been shown yet.
    #[default]
    Idle,
    /// Shown; cards render as shimmer placeholders.
    Loading,
    /// Loading finished; cards render with their content.
    Resolved,
}

/// One-shot loading state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingState {
    phase: LoadingPhase,
}

impl LoadingState {
    /// Create a state in [`LoadingPhase::Idle`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: LoadingPhase::Idle,
        }
    }

    /// Enter `Loading`. Returns `true` if the phase changed; only valid from `Idle`.
    pub fn start(&mut self) -> bool {
        if self.phase == LoadingPhase::Idle {
            self.phase = LoadingPhase::Loading;
            true
        } else {
            false
        }
    }

    /// Enter `Resolved`. Returns `true` if the phase changed; only valid from `Loading`.
    pub fn finish(&mut self) -> bool {
        if self.phase == LoadingPhase::Loading {
            self.phase = LoadingPhase::Resolved;
            true
        } else {
            false
        }
    }

    /// `true` only while in [`LoadingPhase::Loading`].
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, LoadingPhase::Loading)
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> LoadingPhase {
        self.phase
    }
}

/// The loading flag as a pure function of time since the dashboard was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingSchedule {
    /// Delay after which loading resolves.
    pub delay: Duration,
}

impl LoadingSchedule {
    /// Create a schedule resolving after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Whether the dashboard is still loading `elapsed` after being shown.
    #[must_use]
    pub fn is_loading_at(&self, elapsed: Duration) -> bool {
        elapsed < self.delay
    }
}

impl Default for LoadingSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_LOADING_DELAY)
    }
}
