//! Dashboard page placeholders
//!
//! The shell only routes; page bodies are leaf components owned by their
//! own teams. Each placeholder renders the page header and a short blurb.

use iced::widget::{Space, column, text};
use iced::Element;
use uuid::Uuid;

use crate::common::messages::DomainMessage;
use crate::domains::shell::routes::DashboardRoute;
use crate::domains::ui::theme;

pub fn view_page(route: DashboardRoute) -> Element<'static, DomainMessage> {
    match route {
        DashboardRoute::AgentIndex => page(route, None, "Your deployed agents appear here."),
        DashboardRoute::AgentSettings { agent_id } => {
            page(route, Some(agent_id), "Configure this agent's behavior.")
        }
        DashboardRoute::AgentActivity { agent_id } => {
            page(route, Some(agent_id), "Recent conversations and events.")
        }
        DashboardRoute::AgentUsage { agent_id } => {
            page(route, Some(agent_id), "Token and request consumption for this agent.")
        }
        DashboardRoute::OverallUsage => {
            page(route, None, "Aggregate consumption across all agents.")
        }
        DashboardRoute::Profile => page(route, None, "Your account details."),
        DashboardRoute::Subscription => page(route, None, "Plan and billing."),
        DashboardRoute::SetupGuide { agent_id } => {
            page(route, Some(agent_id), "Connect this agent to your workspace.")
        }
    }
}

fn page(
    route: DashboardRoute,
    agent_id: Option<Uuid>,
    blurb: &'static str,
) -> Element<'static, DomainMessage> {
    let mut content = column![text(route.title()).size(28)].spacing(8);

    if let Some(agent_id) = agent_id {
        content = content.push(
            text(format!("Agent {agent_id}"))
                .size(14)
                .style(theme::dimmed_text),
        );
    }

    content
        .push(Space::with_height(8))
        .push(text(blurb).size(16).style(theme::secondary_text))
        .into()
}
