//! View inference synchronizer
//!
//! Keeps a [`ViewMode`] eventually consistent with the embedded panel's
//! internal sub-view by sampling its rendered output: once synchronously at
//! start, on a fixed cadence afterwards, and shortly after every pointer
//! press (the panel re-renders itself on interaction, so sampling waits for
//! it to settle). One worker task owns both the interval timer and the
//! pointer-bus subscription; stopping aborts the task, which tears both down
//! atomically.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::domains::auth::probe;
use crate::domains::auth::types::ViewMode;
use crate::widget::rendered::RenderedOutput;

/// Single-writer store for the inferred view mode.
///
/// Observers wake only when the mode actually changes; an unchanged probe
/// result never forces a re-render.
#[derive(Clone, Debug)]
pub struct ViewModeStore {
    sender: Arc<watch::Sender<ViewMode>>,
    receiver: watch::Receiver<ViewMode>,
}

impl ViewModeStore {
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(ViewMode::default());
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    /// Get the current inferred mode.
    pub fn current(&self) -> ViewMode {
        *self.receiver.borrow()
    }

    /// Subscribe to mode changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewMode> {
        self.receiver.clone()
    }

    /// Fold one probe result into the mode.
    pub fn apply_probe(&self, reset_affordance_visible: bool) {
        let next = if reset_affordance_visible {
            ViewMode::ForgotPassword
        } else {
            ViewMode::SignIn
        };
        self.sender.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

impl Default for ViewModeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-wide pointer-press bus.
///
/// The UI runtime forwards every pointer press here; the synchronizer
/// subscribes for the lifetime of one auth screen. Sends to a bus with no
/// live subscription are dropped.
#[derive(Clone, Debug)]
pub struct PointerEvents {
    sender: broadcast::Sender<()>,
}

impl PointerEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(32);
        Self { sender }
    }

    /// Record one pointer press.
    pub fn notify(&self) {
        // Ignore send errors (no subscribers)
        let _ = self.sender.send(());
    }

    /// Subscribe to subsequent pointer presses.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.sender.subscribe()
    }
}

impl Default for PointerEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// The synchronizer. Owns the inferred [`ViewMode`] from `start` to `stop`.
#[derive(Debug)]
pub struct ViewSync {
    store: ViewModeStore,
    worker: Option<JoinHandle<()>>,
}

impl ViewSync {
    /// Cadence of the periodic re-probe.
    pub const POLL_INTERVAL: Duration = Duration::from_millis(300);

    /// How long a pointer press is given to let the panel finish its own
    /// re-render before sampling.
    pub const CLICK_SETTLE_DELAY: Duration = Duration::from_millis(100);

    /// Start synchronizing against the given rendered output.
    ///
    /// Probes once synchronously before the first scheduled tick, so the
    /// first paint never sits on a stale default. Must be called within a
    /// tokio runtime.
    pub fn start(root: Arc<dyn RenderedOutput>, clicks: broadcast::Receiver<()>) -> Self {
        let store = ViewModeStore::new();
        store.apply_probe(probe::reset_affordance_present(&root.snapshot()));

        let worker = tokio::spawn(sample_loop(root, clicks, store.clone()));
        Self {
            store,
            worker: Some(worker),
        }
    }

    /// Current inferred mode.
    pub fn current(&self) -> ViewMode {
        self.store.current()
    }

    /// Subscribe to mode changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewMode> {
        self.store.subscribe()
    }

    /// Whether the worker task is still alive.
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|worker| !worker.is_finished())
    }

    /// Stop sampling. Aborting the worker cancels the interval timer and the
    /// pointer subscription together; no trigger can fire afterwards.
    pub fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.abort();
        }
    }
}

impl Drop for ViewSync {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn sample_loop(
    root: Arc<dyn RenderedOutput>,
    mut clicks: broadcast::Receiver<()>,
    store: ViewModeStore,
) {
    let mut ticker =
        time::interval_at(time::Instant::now() + ViewSync::POLL_INTERVAL, ViewSync::POLL_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // When the pointer bus closes the synchronizer degrades to poll-only;
    // polling alone still converges, the bus only accelerates it.
    let mut listening = true;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                store.apply_probe(probe::reset_affordance_present(&root.snapshot()));
            }
            outcome = clicks.recv(), if listening => match outcome {
                Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                    time::sleep(ViewSync::CLICK_SETTLE_DELAY).await;
                    store.apply_probe(probe::reset_affordance_present(&root.snapshot()));
                }
                Err(broadcast::error::RecvError::Closed) => {
                    log::debug!("[ViewSync] Pointer bus closed, continuing poll-only");
                    listening = false;
                }
            },
        }
    }
}
