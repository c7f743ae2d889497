//! Cross-domain event coordination
//!
//! Screen transitions touch more than one domain (auth teardown, shell
//! mount); they are mediated here so the domains stay decoupled.

use crate::common::messages::{CrossDomainEvent, DomainMessage};
use crate::domains::shell;
use crate::state::{Screen, State};
use iced::Task;
use std::sync::Arc;

pub fn handle_event(state: &mut State, event: CrossDomainEvent) -> Task<DomainMessage> {
    log::debug!("[CrossDomain] Processing event: {:?}", event);

    match event {
        CrossDomainEvent::AuthenticationComplete => {
            // Unmounting the auth screen stops the view synchronizer and
            // drops the embedded panel.
            state.domains.auth.unmount();
            state.screen = Screen::Dashboard;
            state.domains.shell.reset();

            // The shell mounts with one identity fetch; rendering proceeds
            // without waiting for it.
            let session = Arc::clone(&state.session);
            Task::perform(
                async move { session.current_identity().await.map_err(|e| e.to_string()) },
                |result| DomainMessage::Shell(shell::messages::Message::IdentityLoaded(result)),
            )
        }

        CrossDomainEvent::SignedOut => {
            state.domains.shell.reset();
            state.screen = Screen::Landing;
            Task::none()
        }
    }
}
