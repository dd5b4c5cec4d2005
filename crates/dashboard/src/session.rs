//! Dashboard session: state container + loading timer, tied to one lifecycle.
//!
//! [`DashboardSession::enter`] shows the dashboard and schedules the one-shot
//! loading timer on the current tokio runtime. The timer task only holds a
//! [`Weak`] reference to the session's shared state and is aborted when the
//! session exits or is dropped, so it can never write to a dashboard that is
//! gone.
//!
//! Every observable change is published on a `watch` channel carrying the
//! state's revision counter.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use embedded_graphics::prelude::Size;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use ui::{CardPresentation, DashboardList, DashboardState, LoadingPhase, WidgetItem, MAX_ITEMS};

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::render::Frame;

/// State container used by desktop sessions.
pub type SessionState = DashboardState<MAX_ITEMS>;

struct Shared {
    state: Mutex<SessionState>,
    revisions: watch::Sender<u64>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `f` under the lock, then publish the new revision if it moved.
    fn update<T>(&self, f: impl FnOnce(&mut SessionState) -> T) -> T {
        let (result, before, after) = {
            let mut state = self.lock();
            let before = state.revision();
            let result = f(&mut state);
            (result, before, state.revision())
        };
        if after != before {
            self.revisions.send_replace(after);
        }
        result
    }
}

/// One visit to the dashboard screen.
pub struct DashboardSession {
    shared: Arc<Shared>,
    timer: Option<JoinHandle<()>>,
    config: DashboardConfig,
}

impl DashboardSession {
    /// Enter the dashboard with the demo item list.
    pub fn enter(config: DashboardConfig) -> Result<Self, DashboardError> {
        Self::enter_with(config, DashboardList::seeded()?)
    }

    /// Enter the dashboard with `items`.
    ///
    /// Must be called from within a tokio runtime; the loading timer is
    /// spawned on it.
    pub fn enter_with(config: DashboardConfig, items: DashboardList) -> Result<Self, DashboardError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| DashboardError::NoRuntime)?;

        let mut state = DashboardState::new(items);
        state.show();
        let (revisions, _) = watch::channel(state.revision());
        let shared = Arc::new(Shared {
            state: Mutex::new(state),
            revisions,
        });

        let timer = runtime.spawn(loading_timer(Arc::downgrade(&shared), config.loading_delay));

        tracing::info!(
            columns = config.columns.get(),
            delay_ms = u64::try_from(config.loading_delay.as_millis()).unwrap_or(u64::MAX),
            "dashboard session entered"
        );
        Ok(Self {
            shared,
            timer: Some(timer),
            config,
        })
    }

    /// Leave the dashboard. Cancels the loading timer if it has not fired.
    pub fn exit(self) {
        drop(self);
    }

    /// Configuration this session was entered with.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Receive the revision counter on every observable change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revisions.subscribe()
    }

    /// Current revision.
    pub fn revision(&self) -> u64 {
        self.shared.lock().revision()
    }

    /// Whether cards currently render as shimmer.
    pub fn is_loading(&self) -> bool {
        self.shared.lock().is_loading()
    }

    /// Current loading phase.
    pub fn loading_phase(&self) -> LoadingPhase {
        self.shared.lock().loading_phase()
    }

    /// Shared remove-icon flag.
    pub fn remove_icon_visible(&self) -> bool {
        self.shared.lock().remove_icon_visible()
    }

    /// Number of items on the dashboard.
    pub fn len(&self) -> usize {
        self.shared.lock().items().len()
    }

    /// `true` when every item has been removed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the loading timer is still waiting to fire.
    pub fn timer_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Long-press on the card at `index`; see [`DashboardState::long_press`].
    pub fn long_press(&self, index: usize) -> Result<bool, DashboardError> {
        Ok(self.shared.update(|state| state.long_press(index))?)
    }

    /// Remove the card at `index`.
    pub fn remove_item(&self, index: usize) -> Result<WidgetItem, DashboardError> {
        Ok(self.shared.update(|state| state.remove_item(index))?)
    }

    /// Per-card presentations for the current frame.
    pub fn presentations(&self) -> Vec<CardPresentation> {
        self.shared.lock().presentations().collect()
    }

    /// Resolve when loading has finished.
    pub async fn wait_until_loaded(&self) -> Result<(), DashboardError> {
        // Subscribe before checking so a resolve in between is not missed.
        let mut revisions = self.subscribe();
        while self.is_loading() {
            revisions
                .changed()
                .await
                .map_err(|_| DashboardError::SessionClosed)?;
        }
        Ok(())
    }

    /// Lay out the current cards for `viewport`.
    pub fn compose(&self, viewport: Size) -> Result<Frame, DashboardError> {
        let presentations = self.presentations();
        Ok(Frame::compose(presentations, self.config.columns, viewport)?)
    }
}

impl Drop for DashboardSession {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            if !timer.is_finished() {
                timer.abort();
                tracing::debug!("loading timer aborted");
            }
        }
        tracing::info!(revision = self.revision(), "dashboard session exited");
    }
}

async fn loading_timer(shared: Weak<Shared>, delay: Duration) {
    tokio::time::sleep(delay).await;

    let Some(shared) = shared.upgrade() else {
        tracing::debug!("loading timer fired after session ended; skipped");
        return;
    };
    if shared.update(SessionState::finish_loading) {
        tracing::info!("loading resolved");
    }
}
