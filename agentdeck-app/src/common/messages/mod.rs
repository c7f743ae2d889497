pub mod cross_domain;

// Message types are defined in their respective domains
use crate::domains::auth;
use crate::domains::shell;
use crate::widget::PanelInteraction;

use iced::Task;

/// The main domain message router
#[derive(Debug, Clone)]
pub enum DomainMessage {
    /// Authentication domain
    Auth(auth::messages::Message),
    /// Dashboard shell domain
    Shell(shell::messages::Message),
    /// Opaque interactions routed back into the embedded auth panel
    Panel(PanelInteraction),
}

impl From<auth::messages::Message> for DomainMessage {
    fn from(message: auth::messages::Message) -> Self {
        DomainMessage::Auth(message)
    }
}

impl From<shell::messages::Message> for DomainMessage {
    fn from(message: shell::messages::Message) -> Self {
        DomainMessage::Shell(message)
    }
}

/// Events crossing domain boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossDomainEvent {
    /// A session now exists; the auth screen must unmount and the dashboard
    /// shell must mount.
    AuthenticationComplete,
    /// The session was terminated; the app returns to the public landing
    /// screen.
    SignedOut,
}

/// Result of a domain update that includes both a task and events to emit
pub struct DomainUpdateResult {
    /// The task to execute (may produce more messages)
    pub task: Task<DomainMessage>,
    /// Events to broadcast to other domains immediately
    pub events: Vec<CrossDomainEvent>,
}

impl DomainUpdateResult {
    /// Create an empty result
    pub fn none() -> Self {
        Self {
            task: Task::none(),
            events: Vec::new(),
        }
    }

    /// Create a result with just a task
    pub fn task(task: Task<DomainMessage>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Create a result with just an event
    pub fn event(event: CrossDomainEvent) -> Self {
        Self {
            task: Task::none(),
            events: vec![event],
        }
    }

    /// Create a result with task and events
    pub fn with_events(task: Task<DomainMessage>, events: Vec<CrossDomainEvent>) -> Self {
        Self { task, events }
    }
}

impl std::fmt::Debug for DomainUpdateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainUpdateResult")
            .field("task", &"Task(..)")
            .field("events", &self.events)
            .finish()
    }
}
