//! Root-level subscription composition

use crate::common::messages::DomainMessage;
use crate::domains;
use crate::state::{Screen, State};
use iced::Subscription;

/// Composes all domain subscriptions into a single batch.
///
/// Auth subscriptions exist only while the auth screen is mounted; leaving
/// the screen drops them along with the synchronizer.
pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    let mut subscriptions = vec![];

    if matches!(state.screen, Screen::Auth) {
        subscriptions.push(domains::auth::messages::subscriptions::subscription(state));
    }

    Subscription::batch(subscriptions)
}
