//! Session provider trait and shared identity store
//!
//! Provides abstraction over session operations so the UI depends on a
//! trait seam rather than a concrete HTTP client.

use crate::error::SessionResult;
use crate::identity::SessionIdentity;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use url::Url;

/// Session provider operations consumed by the application.
///
/// The provider is opaque: it issues sessions, performs OAuth redirects and
/// terminates sessions. Implementations decide their own timeout and retry
/// behavior; callers only branch on the returned results.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Fetch the identity of the current session, if one exists.
    ///
    /// An absent session is `Ok(None)`, not an error.
    async fn current_identity(&self) -> SessionResult<Option<SessionIdentity>>;

    /// Sign in with email and password credentials.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> SessionResult<SessionIdentity>;

    /// Start an OAuth sign-in with the named third-party provider.
    ///
    /// Side effect: hands the authorize URL to the system browser. The
    /// provider completes the flow out-of-band and redirects to
    /// `redirect_to`.
    async fn sign_in_with_oauth(
        &self,
        provider: &str,
        redirect_to: Url,
    ) -> SessionResult<()>;

    /// Ask the provider to email password reset instructions.
    async fn request_password_reset(&self, email: &str) -> SessionResult<()>;

    /// Terminate the current session.
    async fn sign_out(&self) -> SessionResult<()>;

    /// Subscribe to identity changes (sign-in, sign-out).
    fn identity_changes(&self) -> watch::Receiver<Option<SessionIdentity>>;
}

/// Thread-safe identity store using a watch channel.
///
/// Read access never locks; observers wake only when the identity actually
/// changes.
#[derive(Clone, Debug)]
pub struct IdentityStore {
    sender: Arc<watch::Sender<Option<SessionIdentity>>>,
    receiver: watch::Receiver<Option<SessionIdentity>>,
}

impl IdentityStore {
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    /// Get the current identity.
    pub fn current(&self) -> Option<SessionIdentity> {
        self.receiver.borrow().clone()
    }

    /// Subscribe to identity changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<SessionIdentity>> {
        self.receiver.clone()
    }

    /// Record a signed-in identity.
    pub fn set(&self, identity: SessionIdentity) {
        // Ignore send errors (no receivers)
        let _ = self.sender.send(Some(identity));
    }

    /// Record session termination.
    pub fn clear(&self) {
        let _ = self.sender.send(None);
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn identity() -> SessionIdentity {
        SessionIdentity {
            id: Uuid::new_v4(),
            email: Some("ops@example.com".into()),
            created_at: None,
            last_sign_in_at: None,
        }
    }

    #[tokio::test]
    async fn store_notifies_subscribers_on_set_and_clear() {
        let store = IdentityStore::new();
        let mut rx = store.subscribe();
        assert!(store.current().is_none());

        store.set(identity());
        rx.changed().await.expect("set should notify");
        assert!(rx.borrow().is_some());

        store.clear();
        rx.changed().await.expect("clear should notify");
        assert!(rx.borrow().is_none());
    }
}
