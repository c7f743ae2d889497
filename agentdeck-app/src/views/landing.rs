//! Public landing screen

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::auth::messages as auth;
use crate::domains::ui::theme;
use crate::state::State;

pub fn view_landing(_state: &State) -> Element<'_, DomainMessage> {
    let content = column![
        text("Agentdeck").size(48).style(theme::brand_text),
        Space::with_height(12),
        text("Deploy, monitor and manage your AI agents")
            .size(18)
            .style(theme::secondary_text),
        Space::with_height(40),
        button(text("Sign in").size(16))
            .padding([12, 32])
            .style(theme::primary_button)
            .on_press(DomainMessage::Auth(auth::Message::ShowAuthScreen)),
    ]
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
