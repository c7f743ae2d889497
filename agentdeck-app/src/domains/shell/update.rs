//! Shell domain update handlers

use crate::common::messages::{CrossDomainEvent, DomainMessage, DomainUpdateResult};
use crate::domains::shell::messages as shell;
use crate::state::State;
use agentdeck_session::SessionIdentity;
use iced::Task;
use log::{info, warn};
use std::sync::Arc;

pub fn update_shell(state: &mut State, message: shell::Message) -> DomainUpdateResult {
    match message {
        shell::Message::IdentityLoaded(result) => handle_identity_loaded(state, result),
        shell::Message::Navigate(route) => handle_navigate(state, route),
        shell::Message::SignOutRequested => handle_sign_out_requested(state),
        shell::Message::SignOutFinished(result) => handle_sign_out_finished(state, result),
    }
}

/// The identity fetch resolved. Failure renders without identity; there is
/// no retry and nothing is surfaced to the user.
fn handle_identity_loaded(
    state: &mut State,
    result: Result<Option<SessionIdentity>, String>,
) -> DomainUpdateResult {
    state.domains.shell.identity = match result {
        Ok(identity) => identity,
        Err(error) => {
            warn!("[Shell] Identity fetch failed, rendering without identity: {error}");
            None
        }
    };
    DomainUpdateResult::none()
}

fn handle_navigate(
    state: &mut State,
    route: crate::domains::shell::routes::DashboardRoute,
) -> DomainUpdateResult {
    state.domains.shell.route = route;
    DomainUpdateResult::none()
}

fn handle_sign_out_requested(state: &mut State) -> DomainUpdateResult {
    if state.domains.shell.signing_out {
        return DomainUpdateResult::none();
    }
    state.domains.shell.signing_out = true;

    let session = Arc::clone(&state.session);
    DomainUpdateResult::task(Task::perform(
        async move { session.sign_out().await.map_err(|e| e.to_string()) },
        |result| DomainMessage::Shell(shell::Message::SignOutFinished(result)),
    ))
}

/// Navigation to the landing screen is sequenced strictly after the
/// termination call resolves and proceeds regardless of its outcome; a
/// dashboard must never trap a user who asked to leave.
fn handle_sign_out_finished(state: &mut State, result: Result<(), String>) -> DomainUpdateResult {
    state.domains.shell.signing_out = false;
    match result {
        Ok(()) => info!("[Shell] Signed out"),
        Err(error) => warn!("[Shell] Sign-out failed, navigating anyway: {error}"),
    }
    DomainUpdateResult::event(CrossDomainEvent::SignedOut)
}
