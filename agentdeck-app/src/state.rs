//! Application state

use crate::app::bootstrap::AppConfig;
use crate::domains::auth::{AuthDomainState, PointerEvents};
use crate::domains::shell::ShellDomainState;
use agentdeck_session::SessionProvider;
use std::sync::Arc;

/// Top-level screen the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Public landing screen
    #[default]
    Landing,
    /// Sign-in screen (embedded panel + OAuth shortcut)
    Auth,
    /// Session-gated dashboard shell
    Dashboard,
}

/// Per-domain state containers.
#[derive(Debug, Default)]
pub struct Domains {
    pub auth: AuthDomainState,
    pub shell: ShellDomainState,
}

pub struct State {
    pub config: Arc<AppConfig>,
    pub session: Arc<dyn SessionProvider>,
    /// Application-wide pointer-press bus feeding the view synchronizer.
    pub pointer_events: PointerEvents,
    pub screen: Screen,
    pub domains: Domains,
}

impl State {
    pub fn new(config: Arc<AppConfig>, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            config,
            session,
            pointer_events: PointerEvents::new(),
            screen: Screen::default(),
            domains: Domains::default(),
        }
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("config", &self.config)
            .field("session", &"SessionProvider(..)")
            .field("screen", &self.screen)
            .field("domains", &self.domains)
            .finish()
    }
}
