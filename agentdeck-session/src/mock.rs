//! In-memory session provider for tests

use crate::error::{SessionError, SessionResult};
use crate::identity::SessionIdentity;
use crate::provider::{IdentityStore, SessionProvider};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::watch;
use url::Url;
use uuid::Uuid;

/// Mock implementation of [`SessionProvider`].
///
/// Holds one configurable account, records calls, and can be told to fail
/// specific operations.
#[derive(Debug)]
pub struct MockSessionProvider {
    account: Mutex<Option<SessionIdentity>>,
    signed_in: AtomicBool,
    store: IdentityStore,
    fail_identity_fetch: AtomicBool,
    fail_sign_out: AtomicBool,
    sign_out_calls: AtomicUsize,
    oauth_calls: Mutex<Vec<(String, Url)>>,
    reset_requests: Mutex<Vec<String>>,
}

impl MockSessionProvider {
    pub fn new() -> Self {
        Self {
            account: Mutex::new(None),
            signed_in: AtomicBool::new(false),
            store: IdentityStore::new(),
            fail_identity_fetch: AtomicBool::new(false),
            fail_sign_out: AtomicBool::new(false),
            sign_out_calls: AtomicUsize::new(0),
            oauth_calls: Mutex::new(Vec::new()),
            reset_requests: Mutex::new(Vec::new()),
        }
    }

    /// A provider with an account that is already signed in.
    pub fn signed_in_as(email: &str) -> Self {
        let provider = Self::new();
        let identity = SessionIdentity {
            id: Uuid::new_v4(),
            email: Some(email.to_string()),
            created_at: None,
            last_sign_in_at: None,
        };
        *provider.account.lock() = Some(identity.clone());
        provider.signed_in.store(true, Ordering::SeqCst);
        provider.store.set(identity);
        provider
    }

    /// A provider that knows an account but has no active session.
    pub fn with_account(email: &str) -> Self {
        let provider = Self::new();
        *provider.account.lock() = Some(SessionIdentity {
            id: Uuid::new_v4(),
            email: Some(email.to_string()),
            created_at: None,
            last_sign_in_at: None,
        });
        provider
    }

    pub fn fail_identity_fetch(&self) {
        self.fail_identity_fetch.store(true, Ordering::SeqCst);
    }

    pub fn fail_sign_out(&self) {
        self.fail_sign_out.store(true, Ordering::SeqCst);
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.load(Ordering::SeqCst)
    }

    pub fn oauth_calls(&self) -> Vec<(String, Url)> {
        self.oauth_calls.lock().clone()
    }

    pub fn reset_requests(&self) -> Vec<String> {
        self.reset_requests.lock().clone()
    }

    fn unavailable(what: &str) -> SessionError {
        SessionError::Provider {
            status: 503,
            message: format!("{what} unavailable"),
        }
    }
}

impl Default for MockSessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionProvider for MockSessionProvider {
    async fn current_identity(&self) -> SessionResult<Option<SessionIdentity>> {
        if self.fail_identity_fetch.load(Ordering::SeqCst) {
            return Err(Self::unavailable("identity fetch"));
        }
        if !self.signed_in.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self.account.lock().clone())
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        _password: &str,
    ) -> SessionResult<SessionIdentity> {
        let identity = match self.account.lock().clone() {
            Some(identity) if identity.email.as_deref() == Some(email) => identity,
            _ => {
                return Err(SessionError::Provider {
                    status: 400,
                    message: "Invalid login credentials".into(),
                });
            }
        };
        self.signed_in.store(true, Ordering::SeqCst);
        self.store.set(identity.clone());
        Ok(identity)
    }

    async fn sign_in_with_oauth(
        &self,
        provider: &str,
        redirect_to: Url,
    ) -> SessionResult<()> {
        self.oauth_calls
            .lock()
            .push((provider.to_string(), redirect_to));
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> SessionResult<()> {
        self.reset_requests.lock().push(email.to_string());
        Ok(())
    }

    async fn sign_out(&self) -> SessionResult<()> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.signed_in.store(false, Ordering::SeqCst);
        self.store.clear();
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(Self::unavailable("sign-out"));
        }
        Ok(())
    }

    fn identity_changes(&self) -> watch::Receiver<Option<SessionIdentity>> {
        self.store.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn password_sign_in_updates_identity_stream() {
        let provider = MockSessionProvider::with_account("ops@example.com");
        let mut changes = provider.identity_changes();

        provider
            .sign_in_with_password("ops@example.com", "hunter2")
            .await
            .expect("known account should sign in");

        changes.changed().await.expect("sign-in should notify");
        assert!(changes.borrow().is_some());
    }

    #[tokio::test]
    async fn sign_out_failure_still_clears_session() {
        let provider = MockSessionProvider::signed_in_as("ops@example.com");
        provider.fail_sign_out();

        assert!(provider.sign_out().await.is_err());
        assert_eq!(provider.sign_out_calls(), 1);
        assert!(provider.current_identity().await.expect("fetch").is_none());
    }
}
