//! Agentdeck session provider client
//!
//! This crate is the application's surface over the hosted identity
//! provider. It owns the identity model, the [`SessionProvider`] trait the
//! UI consumes, and the HTTP adapter speaking the provider's auth REST API.
//!
//! Notes
//! - The provider is an external service; everything here is client-side.
//! - The mock provider is available to downstream tests via the `testing`
//!   feature.

pub mod error;
pub mod http;
pub mod identity;
pub mod provider;

#[cfg(any(test, feature = "testing"))]
pub mod mock;

pub use error::{SessionError, SessionResult};
pub use http::HttpSessionProvider;
pub use identity::SessionIdentity;
pub use provider::{IdentityStore, SessionProvider};
