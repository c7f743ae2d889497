//! Authentication domain
//!
//! Owns the sign-in screen: the embedded auth panel, the view-inference
//! synchronizer that tracks which sub-view the panel is showing, and the
//! hand-built OAuth shortcut.

pub mod messages;
pub mod probe;
pub mod sync;
pub mod types;
pub mod update;

pub use sync::{PointerEvents, ViewModeStore, ViewSync};
pub use types::ViewMode;

use crate::widget::AuthPanel;
use std::sync::Arc;

/// Fixed provider id behind the hand-built OAuth shortcut.
pub const OAUTH_SHORTCUT_PROVIDER: &str = "slack_oidc";

/// Authentication domain state.
///
/// The panel and the synchronizer exist only while the auth screen is
/// mounted; both are torn down together on unmount.
pub struct AuthDomainState {
    pub panel: Option<Box<dyn AuthPanel>>,
    pub sync: Option<ViewSync>,
    /// Cached copy of the synchronizer's inferred mode, refreshed by
    /// `ViewModeInferred` messages.
    pub view_mode: ViewMode,
    /// Failure line for the OAuth shortcut, surfaced on the auth screen.
    pub oauth_error: Option<String>,
}

impl AuthDomainState {
    pub fn new() -> Self {
        Self {
            panel: None,
            sync: None,
            view_mode: ViewMode::default(),
            oauth_error: None,
        }
    }

    /// Mount the auth screen: adopt the panel and start synchronizing
    /// against its rendered output.
    pub fn mount(&mut self, panel: Box<dyn AuthPanel>, pointer_events: &PointerEvents) {
        let surface = panel.surface();
        self.sync = Some(ViewSync::start(
            Arc::new(surface),
            pointer_events.subscribe(),
        ));
        self.view_mode = self
            .sync
            .as_ref()
            .map(ViewSync::current)
            .unwrap_or_default();
        self.panel = Some(panel);
        self.oauth_error = None;
    }

    /// Unmount the auth screen: stop the synchronizer and drop the panel.
    /// Idempotent; safe to call when nothing is mounted.
    pub fn unmount(&mut self) {
        if let Some(mut sync) = self.sync.take() {
            sync.stop();
        }
        self.panel = None;
        self.view_mode = ViewMode::default();
        self.oauth_error = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.sync.is_some()
    }
}

impl Default for AuthDomainState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AuthDomainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthDomainState")
            .field("panel", &self.panel.as_ref().map(|_| "AuthPanel(..)"))
            .field("sync", &self.sync)
            .field("view_mode", &self.view_mode)
            .field("oauth_error", &self.oauth_error)
            .finish()
    }
}
