//! Dashboard shell: navigation chrome around the routed pages

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::shell::ShellDomainState;
use crate::domains::shell::messages as shell;
use crate::domains::shell::routes::DashboardRoute;
use crate::domains::ui::theme;
use crate::state::State;
use crate::views::pages;

pub fn view_shell(state: &State) -> Element<'_, DomainMessage> {
    let shell_state = &state.domains.shell;

    column![
        view_nav(shell_state),
        scrollable(
            container(pages::view_page(shell_state.route))
                .width(Length::Fill)
                .padding([32, 48]),
        )
        .height(Length::Fill),
    ]
    .into()
}

fn view_nav(shell_state: &ShellDomainState) -> Element<'_, DomainMessage> {
    let brand = button(text("Agentdeck").size(22).style(theme::brand_text))
        .style(theme::nav_button)
        .on_press(DomainMessage::Shell(shell::Message::Navigate(
            DashboardRoute::AgentIndex,
        )));

    let mut right = row![].spacing(24).align_y(Alignment::Center);

    // Identity display is simply omitted until the mount-time fetch resolves
    if let Some(identity) = &shell_state.identity {
        right = right.push(
            text(identity.display_label())
                .size(14)
                .style(theme::secondary_text),
        );
    }

    right = right.push(
        button(text("Profile").size(14))
            .style(theme::nav_button)
            .on_press(DomainMessage::Shell(shell::Message::Navigate(
                DashboardRoute::Profile,
            ))),
    );

    let sign_out_caption = if shell_state.signing_out {
        "Signing out ..."
    } else {
        "Sign Out"
    };
    right = right.push(
        button(text(sign_out_caption).size(14))
            .style(theme::nav_button)
            .on_press_maybe(
                (!shell_state.signing_out)
                    .then_some(DomainMessage::Shell(shell::Message::SignOutRequested)),
            ),
    );

    container(
        row![brand, Space::with_width(Length::Fill), right].align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([16, 24])
    .style(theme::nav_container)
    .into()
}
