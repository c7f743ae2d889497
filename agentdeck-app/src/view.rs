//! Root-level view composition

use crate::common::messages::DomainMessage;
use crate::state::{Screen, State};
use crate::views;
use iced::Element;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    match state.screen {
        Screen::Landing => views::view_landing(state),
        Screen::Auth => views::view_auth(state),
        Screen::Dashboard => views::view_shell(state),
    }
}
