//! Sign-in screen
//!
//! Composes the inferred view mode with the local heading pair, the
//! hand-built OAuth shortcut, and the embedded auth panel.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::auth::messages as auth;
use crate::domains::auth::types::ViewMode;
use crate::domains::ui::theme;
use crate::state::State;

/// Heading and subtitle for the inferred panel sub-view.
pub fn headline(mode: ViewMode) -> (&'static str, &'static str) {
    match mode {
        ViewMode::SignIn => ("Welcome Back", "Sign in to continue to your dashboard"),
        ViewMode::ForgotPassword => (
            "Reset Password",
            "Enter your email to receive reset instructions",
        ),
    }
}

/// The OAuth shortcut renders only on the sign-in sub-view.
pub fn shows_oauth_shortcut(mode: ViewMode) -> bool {
    mode.is_sign_in()
}

pub fn view_auth(state: &State) -> Element<'_, DomainMessage> {
    let mode = state.domains.auth.view_mode;
    let (title, subtitle) = headline(mode);

    let mut content = column![
        text(title).size(36).style(theme::brand_text),
        Space::with_height(8),
        text(subtitle).size(16).style(theme::secondary_text),
        Space::with_height(28),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    if shows_oauth_shortcut(mode) {
        content = content
            .push(
                button(
                    text("Continue with Slack")
                        .size(16)
                        .width(Length::Fill)
                        .align_x(Alignment::Center),
                )
                .width(Length::Fill)
                .padding([12, 16])
                .style(theme::oauth_shortcut_button)
                .on_press(DomainMessage::Auth(auth::Message::RequestOAuth)),
            )
            .push(Space::with_height(16));
    }

    if let Some(error) = &state.domains.auth.oauth_error {
        content = content
            .push(
                container(text(error.as_str()).size(14))
                    .padding(12)
                    .width(Length::Fill)
                    .style(theme::error_box),
            )
            .push(Space::with_height(16));
    }

    if let Some(panel) = &state.domains.auth.panel {
        content = content.push(panel.view().map(DomainMessage::Panel));
    }

    let card = container(content)
        .width(Length::Fixed(420.0))
        .padding(32)
        .style(theme::card_container);

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_headline_welcomes_back() {
        let (title, subtitle) = headline(ViewMode::SignIn);
        assert_eq!(title, "Welcome Back");
        assert_eq!(subtitle, "Sign in to continue to your dashboard");
    }

    #[test]
    fn forgot_password_headline_offers_reset() {
        let (title, _) = headline(ViewMode::ForgotPassword);
        assert_eq!(title, "Reset Password");
    }

    #[test]
    fn oauth_shortcut_only_on_sign_in() {
        assert!(shows_oauth_shortcut(ViewMode::SignIn));
        assert!(!shows_oauth_shortcut(ViewMode::ForgotPassword));
    }
}
