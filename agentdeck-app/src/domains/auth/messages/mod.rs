use agentdeck_session::SessionIdentity;

use crate::domains::auth::types::ViewMode;

pub mod subscriptions;

#[derive(Debug, Clone)]
pub enum Message {
    // Boot-time session restore
    CheckSession,
    SessionChecked(Option<SessionIdentity>),

    // Auth screen lifecycle
    ShowAuthScreen,

    // Synchronizer triggers and results
    PointerPressed,
    ViewModeInferred(ViewMode),

    // Provider identity stream while the auth screen is mounted
    IdentityChanged(Option<SessionIdentity>),

    // Hand-built OAuth shortcut
    RequestOAuth,
    OAuthLaunched(Result<(), String>),
}
