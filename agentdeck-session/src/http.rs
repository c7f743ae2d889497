//! HTTP adapter for the hosted session provider
//!
//! Speaks the provider's auth REST API. Endpoints are collected in
//! [`routes`]; all of them live under the `/auth/v1` prefix.

use crate::error::{SessionError, SessionResult};
use crate::identity::SessionIdentity;
use crate::provider::{IdentityStore, SessionProvider};
use async_trait::async_trait;
use log::{info, warn};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::{RwLock, watch};
use url::Url;

/// Auth API endpoints exposed by the session provider
pub mod routes {
    /// Prefix for all auth endpoints
    pub const AUTH_BASE: &str = "/auth/v1";

    /// Current session's user
    pub const USER: &str = "/user";
    /// Token issuance (password grant)
    pub const TOKEN: &str = "/token";
    /// Session termination
    pub const LOGOUT: &str = "/logout";
    /// Password recovery email
    pub const RECOVER: &str = "/recover";
    /// Third-party OAuth entry point
    pub const AUTHORIZE: &str = "/authorize";
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: SessionIdentity,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(alias = "message", alias = "error_description")]
    msg: Option<String>,
}

/// Session provider client with bearer-token support.
#[derive(Clone)]
pub struct HttpSessionProvider {
    client: Client,
    base_url: Url,
    anon_key: Arc<str>,
    access_token: Arc<RwLock<Option<String>>>,
    identity: IdentityStore,
}

impl std::fmt::Debug for HttpSessionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSessionProvider")
            .field("base_url", &self.base_url.as_str())
            .field(
                "has_token",
                &self
                    .access_token
                    .try_read()
                    .map(|t| t.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

impl HttpSessionProvider {
    /// Create a new provider client.
    ///
    /// `anon_key` is the provider's public API key, sent with every request;
    /// per-session bearer tokens are layered on top after sign-in.
    pub fn new(base_url: Url, anon_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        info!(
            "[SessionProvider] Creating client for provider at {}",
            base_url
        );

        Self {
            client,
            base_url,
            anon_key: Arc::from(anon_key.into()),
            access_token: Arc::new(RwLock::new(None)),
            identity: IdentityStore::new(),
        }
    }

    /// Build a full URL for an auth endpoint.
    pub fn auth_url(&self, path: &str) -> SessionResult<Url> {
        let joined = format!("{}{}{}", self.base_url.as_str().trim_end_matches('/'), routes::AUTH_BASE, path);
        Ok(Url::parse(&joined)?)
    }

    /// The authorize URL handed to the system browser for an OAuth sign-in.
    pub fn authorize_url(&self, provider: &str, redirect_to: &Url) -> SessionResult<Url> {
        let mut url = self.auth_url(routes::AUTHORIZE)?;
        url.query_pairs_mut()
            .append_pair("provider", provider)
            .append_pair("redirect_to", redirect_to.as_str());
        Ok(url)
    }

    async fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("apikey", self.anon_key.as_ref());
        match self.access_token.read().await.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn adopt_session(&self, token: TokenResponse) -> SessionIdentity {
        *self.access_token.write().await = Some(token.access_token);
        self.identity.set(token.user.clone());
        token.user
    }

    async fn drop_session(&self) {
        self.access_token.write().await.take();
        self.identity.clear();
    }

    async fn reject(response: reqwest::Response) -> SessionError {
        let status = response.status().as_u16();
        let message = match response.json::<ProviderErrorBody>().await {
            Ok(body) => body.msg.unwrap_or_else(|| "no details".into()),
            Err(_) => "no details".into(),
        };
        SessionError::Provider { status, message }
    }
}

#[async_trait]
impl SessionProvider for HttpSessionProvider {
    async fn current_identity(&self) -> SessionResult<Option<SessionIdentity>> {
        if self.access_token.read().await.is_none() {
            return Ok(None);
        }

        let url = self.auth_url(routes::USER)?;
        let request = self.with_auth(self.client.get(url)).await;
        let response = request.send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                // Stale token; converge to signed-out rather than erroring
                warn!("[SessionProvider] Session token rejected, clearing local session");
                self.drop_session().await;
                Ok(None)
            }
            status if status.is_success() => {
                let identity: SessionIdentity = response
                    .json()
                    .await
                    .map_err(|e| SessionError::Malformed(e.to_string()))?;
                self.identity.set(identity.clone());
                Ok(Some(identity))
            }
            _ => Err(Self::reject(response).await),
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> SessionResult<SessionIdentity> {
        let mut url = self.auth_url(routes::TOKEN)?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let request = self
            .with_auth(self.client.post(url))
            .await
            .json(&serde_json::json!({ "email": email, "password": password }));
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SessionError::Malformed(e.to_string()))?;
        Ok(self.adopt_session(token).await)
    }

    async fn sign_in_with_oauth(
        &self,
        provider: &str,
        redirect_to: Url,
    ) -> SessionResult<()> {
        let url = self.authorize_url(provider, &redirect_to)?;
        info!("[SessionProvider] Launching '{provider}' OAuth flow");
        open::that(url.as_str()).map_err(|source| SessionError::BrowserLaunch {
            provider: provider.to_string(),
            source,
        })
    }

    async fn request_password_reset(&self, email: &str) -> SessionResult<()> {
        let url = self.auth_url(routes::RECOVER)?;
        let request = self
            .with_auth(self.client.post(url))
            .await
            .json(&serde_json::json!({ "email": email }));
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        Ok(())
    }

    async fn sign_out(&self) -> SessionResult<()> {
        let result = async {
            if self.access_token.read().await.is_none() {
                return Ok(());
            }
            let url = self.auth_url(routes::LOGOUT)?;
            let request = self.with_auth(self.client.post(url)).await;
            let response = request.send().await?;
            if !response.status().is_success() {
                return Err(Self::reject(response).await);
            }
            Ok(())
        }
        .await;

        // Local session state converges to signed-out even when the
        // termination call fails; the caller decides what to do with the
        // error.
        self.drop_session().await;
        result
    }

    fn identity_changes(&self) -> watch::Receiver<Option<SessionIdentity>> {
        self.identity.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> HttpSessionProvider {
        HttpSessionProvider::new(
            Url::parse("https://identity.example.com").expect("static url"),
            "anon-key",
        )
    }

    #[test]
    fn auth_urls_are_prefixed() {
        let url = provider().auth_url(routes::USER).expect("url");
        assert_eq!(url.as_str(), "https://identity.example.com/auth/v1/user");
    }

    #[test]
    fn authorize_url_carries_provider_and_redirect() {
        let redirect = Url::parse("https://app.example.com/dashboard").expect("static url");
        let url = provider()
            .authorize_url("slack_oidc", &redirect)
            .expect("url");

        assert!(url.as_str().starts_with("https://identity.example.com/auth/v1/authorize?"));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("provider".into(), "slack_oidc".into())));
        assert!(
            pairs.contains(&("redirect_to".into(), "https://app.example.com/dashboard".into()))
        );
    }

    #[tokio::test]
    async fn current_identity_without_token_is_absent_not_error() {
        let result = provider().current_identity().await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn sign_out_without_session_is_a_no_op() {
        let provider = provider();
        assert!(provider.sign_out().await.is_ok());
        assert!(provider.identity_changes().borrow().is_none());
    }
}
