//! Auth screen subscriptions
//!
//! Three sources feed the auth screen while it is mounted: document-level
//! pointer presses (forwarded onto the synchronizer's bus), the
//! synchronizer's inferred view mode, and the provider's identity stream
//! (the embedded panel signs users in internally; the identity stream is
//! how the host finds out).

use super::Message;
use crate::common::messages::DomainMessage;
use crate::domains::auth::types::ViewMode;
use crate::state::State;
use agentdeck_session::SessionIdentity;
use futures::stream;
use iced::{Event, Subscription, event, mouse, touch, window};
use tokio::sync::watch;

/// Creates all auth-screen subscriptions
pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    let mut subscriptions = vec![event::listen_with(pointer_press_filter)];

    if let Some(sync) = &state.domains.auth.sync {
        subscriptions.push(view_mode_subscription(sync.subscribe()));
    }

    subscriptions.push(identity_subscription(state.session.identity_changes()));

    Subscription::batch(subscriptions)
}

/// Document-level press filter. Captured events count too: a press consumed
/// by a widget still re-renders the panel, which is exactly when re-probing
/// pays off.
fn pointer_press_filter(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<DomainMessage> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(_))
        | Event::Touch(touch::Event::FingerPressed { .. }) => {
            Some(DomainMessage::Auth(Message::PointerPressed))
        }
        _ => None,
    }
}

/// Stream of inferred view-mode changes out of the synchronizer's store.
fn view_mode_subscription(receiver: watch::Receiver<ViewMode>) -> Subscription<DomainMessage> {
    struct ViewModeChanges;

    Subscription::run_with_id(
        std::any::TypeId::of::<ViewModeChanges>(),
        stream::unfold(receiver, |mut receiver| async move {
            match receiver.changed().await {
                Ok(()) => {
                    let mode = *receiver.borrow_and_update();
                    Some((
                        DomainMessage::Auth(Message::ViewModeInferred(mode)),
                        receiver,
                    ))
                }
                // Synchronizer stopped; end the stream
                Err(_) => None,
            }
        }),
    )
}

/// Stream of identity changes from the session provider.
fn identity_subscription(
    receiver: watch::Receiver<Option<SessionIdentity>>,
) -> Subscription<DomainMessage> {
    struct IdentityChanges;

    Subscription::run_with_id(
        std::any::TypeId::of::<IdentityChanges>(),
        stream::unfold(receiver, |mut receiver| async move {
            match receiver.changed().await {
                Ok(()) => {
                    let identity = receiver.borrow_and_update().clone();
                    Some((
                        DomainMessage::Auth(Message::IdentityChanged(identity)),
                        receiver,
                    ))
                }
                // Provider dropped; end the stream
                Err(_) => None,
            }
        }),
    )
}
