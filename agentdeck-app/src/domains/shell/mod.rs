//! Dashboard shell domain
//!
//! The session-gated frame around the dashboard pages: navigation chrome,
//! the cached identity display, and sign-out. Page bodies are leaf
//! components out of this domain's scope.

pub mod messages;
pub mod routes;
pub mod update;

pub use routes::DashboardRoute;

use agentdeck_session::SessionIdentity;

/// Shell domain state.
#[derive(Debug, Clone, Default)]
pub struct ShellDomainState {
    /// Read-only identity copy, refreshed only when the shell mounts.
    pub identity: Option<SessionIdentity>,
    pub route: DashboardRoute,
    pub signing_out: bool,
}

impl ShellDomainState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the mount-time state (index route, identity pending).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
