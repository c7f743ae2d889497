use agentdeck_session::SessionIdentity;

use crate::domains::shell::routes::DashboardRoute;

#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the mount-time identity fetch
    IdentityLoaded(Result<Option<SessionIdentity>, String>),

    /// Switch the content area to another dashboard sub-view
    Navigate(DashboardRoute),

    // Sign-out flow
    SignOutRequested,
    SignOutFinished(Result<(), String>),
}
