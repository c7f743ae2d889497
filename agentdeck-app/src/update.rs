//! Root-level update dispatch
//!
//! Domain updates return a task plus any cross-domain events; events are
//! mediated synchronously here so screen transitions land within the same
//! update cycle.

use crate::common::messages::{DomainMessage, DomainUpdateResult, cross_domain};
use crate::domains::{auth, shell};
use crate::state::State;
use iced::Task;

pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    let result = match message {
        DomainMessage::Auth(message) => auth::update::update_auth(state, message),
        DomainMessage::Shell(message) => shell::update::update_shell(state, message),
        DomainMessage::Panel(interaction) => match state.domains.auth.panel.as_mut() {
            Some(panel) => {
                DomainUpdateResult::task(panel.update(interaction).map(DomainMessage::Panel))
            }
            // Interaction raced an unmount; nothing to route it to
            None => DomainUpdateResult::none(),
        },
    };

    let mut tasks = vec![result.task];
    for event in result.events {
        tasks.push(cross_domain::handle_event(state, event));
    }
    Task::batch(tasks)
}
