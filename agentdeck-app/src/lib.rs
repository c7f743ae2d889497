//! Agentdeck console library
//!
//! This crate contains the account console's surfaces used by the
//! executable in `src/main.rs`: the sign-in screen built around an embedded
//! auth panel, the view-inference synchronizer tracking the panel's
//! sub-view, and the session-gated dashboard shell.
//!
//! Notes
//! - Public items are subject to change while the UI stabilizes.
//! - The library is exposed mainly to enable testing and internal reuse.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
pub mod views;
pub mod widget;
