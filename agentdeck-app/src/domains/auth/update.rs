//! Auth domain update handlers

use crate::app::bootstrap;
use crate::common::messages::{CrossDomainEvent, DomainMessage, DomainUpdateResult};
use crate::domains::auth::OAUTH_SHORTCUT_PROVIDER;
use crate::domains::auth::messages as auth;
use crate::state::{Screen, State};
use iced::Task;
use log::{info, warn};
use std::sync::Arc;

pub fn update_auth(state: &mut State, message: auth::Message) -> DomainUpdateResult {
    match message {
        auth::Message::CheckSession => handle_check_session(state),
        auth::Message::SessionChecked(identity) => handle_session_checked(state, identity),
        auth::Message::ShowAuthScreen => handle_show_auth_screen(state),
        auth::Message::PointerPressed => handle_pointer_pressed(state),
        auth::Message::ViewModeInferred(mode) => handle_view_mode_inferred(state, mode),
        auth::Message::IdentityChanged(identity) => handle_identity_changed(state, identity),
        auth::Message::RequestOAuth => handle_request_oauth(state),
        auth::Message::OAuthLaunched(result) => handle_oauth_launched(state, result),
    }
}

/// Boot: ask the provider whether a session already exists.
fn handle_check_session(state: &mut State) -> DomainUpdateResult {
    let session = Arc::clone(&state.session);
    DomainUpdateResult::task(Task::perform(
        async move {
            match session.current_identity().await {
                Ok(identity) => identity,
                Err(e) => {
                    // Recovered by starting signed out; never surfaced
                    warn!("[Auth] Session restore failed: {e}");
                    None
                }
            }
        },
        |identity| DomainMessage::Auth(auth::Message::SessionChecked(identity)),
    ))
}

fn handle_session_checked(
    state: &mut State,
    identity: Option<agentdeck_session::SessionIdentity>,
) -> DomainUpdateResult {
    match identity {
        Some(identity) => {
            info!(
                "[Auth] Existing session for {}, entering dashboard",
                identity.display_label()
            );
            DomainUpdateResult::event(CrossDomainEvent::AuthenticationComplete)
        }
        None => {
            state.screen = Screen::Landing;
            DomainUpdateResult::none()
        }
    }
}

/// Mount the auth screen: build the configured panel and start the view
/// synchronizer against its rendered output.
fn handle_show_auth_screen(state: &mut State) -> DomainUpdateResult {
    let panel = bootstrap::hosted_panel(&state.config, Arc::clone(&state.session));
    state.domains.auth.mount(panel, &state.pointer_events);
    state.screen = Screen::Auth;
    DomainUpdateResult::none()
}

/// Document-level pointer press; fans out to the synchronizer's bus.
fn handle_pointer_pressed(state: &mut State) -> DomainUpdateResult {
    state.pointer_events.notify();
    DomainUpdateResult::none()
}

fn handle_view_mode_inferred(
    state: &mut State,
    mode: crate::domains::auth::ViewMode,
) -> DomainUpdateResult {
    state.domains.auth.view_mode = mode;
    DomainUpdateResult::none()
}

/// The provider reported an identity change while the auth screen was up; a
/// signed-in identity means the embedded panel completed a sign-in
/// internally.
fn handle_identity_changed(
    _state: &mut State,
    identity: Option<agentdeck_session::SessionIdentity>,
) -> DomainUpdateResult {
    match identity {
        Some(identity) => {
            info!("[Auth] Signed in as {}", identity.display_label());
            DomainUpdateResult::event(CrossDomainEvent::AuthenticationComplete)
        }
        None => DomainUpdateResult::none(),
    }
}

/// Launch the hand-built OAuth shortcut flow. The outcome is awaited and
/// branched on rather than dropped: a launch failure renders on the auth
/// screen.
fn handle_request_oauth(state: &mut State) -> DomainUpdateResult {
    let session = Arc::clone(&state.session);
    let redirect_to = state.config.dashboard_redirect();
    state.domains.auth.oauth_error = None;

    DomainUpdateResult::task(Task::perform(
        async move {
            session
                .sign_in_with_oauth(OAUTH_SHORTCUT_PROVIDER, redirect_to)
                .await
                .map_err(|e| e.to_string())
        },
        |result| DomainMessage::Auth(auth::Message::OAuthLaunched(result)),
    ))
}

fn handle_oauth_launched(state: &mut State, result: Result<(), String>) -> DomainUpdateResult {
    if let Err(error) = result {
        warn!("[Auth] OAuth launch failed: {error}");
        state.domains.auth.oauth_error = Some(error);
    }
    DomainUpdateResult::none()
}
