//! Dashboard route table
//!
//! Paths are relative to the dashboard mount point. Agent-scoped routes
//! carry the agent id as a path segment.

use uuid::Uuid;

/// Path patterns served under the dashboard.
pub mod patterns {
    pub const SETTINGS: &str = "settings";
    pub const ACTIVITY: &str = "activity";
    pub const USAGE: &str = "usage";
    pub const PROFILE: &str = "profile";
    pub const SUBSCRIPTION: &str = "subscription";
    pub const SETUP: &str = "setup";
}

/// One sub-view of the dashboard shell.
///
/// Page bodies are leaf components owned elsewhere; the shell only routes
/// between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardRoute {
    /// Index: the agents list
    #[default]
    AgentIndex,
    AgentSettings {
        agent_id: Uuid,
    },
    AgentActivity {
        agent_id: Uuid,
    },
    AgentUsage {
        agent_id: Uuid,
    },
    OverallUsage,
    Profile,
    Subscription,
    SetupGuide {
        agent_id: Uuid,
    },
}

impl DashboardRoute {
    /// Relative path for this route.
    pub fn path(&self) -> String {
        match self {
            DashboardRoute::AgentIndex => String::new(),
            DashboardRoute::AgentSettings { agent_id } => {
                format!("{}/{agent_id}", patterns::SETTINGS)
            }
            DashboardRoute::AgentActivity { agent_id } => {
                format!("{}/{agent_id}", patterns::ACTIVITY)
            }
            DashboardRoute::AgentUsage { agent_id } => {
                format!("{}/{agent_id}", patterns::USAGE)
            }
            DashboardRoute::OverallUsage => patterns::USAGE.to_string(),
            DashboardRoute::Profile => patterns::PROFILE.to_string(),
            DashboardRoute::Subscription => patterns::SUBSCRIPTION.to_string(),
            DashboardRoute::SetupGuide { agent_id } => {
                format!("{}/{agent_id}", patterns::SETUP)
            }
        }
    }

    /// Parse a relative path into a route. Unknown paths resolve to `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let mut segments = path.trim_matches('/').split('/').filter(|s| !s.is_empty());

        let route = match (segments.next(), segments.next()) {
            (None, _) => DashboardRoute::AgentIndex,
            (Some(patterns::USAGE), None) => DashboardRoute::OverallUsage,
            (Some(patterns::PROFILE), None) => DashboardRoute::Profile,
            (Some(patterns::SUBSCRIPTION), None) => DashboardRoute::Subscription,
            (Some(patterns::SETTINGS), Some(id)) => DashboardRoute::AgentSettings {
                agent_id: Uuid::parse_str(id).ok()?,
            },
            (Some(patterns::ACTIVITY), Some(id)) => DashboardRoute::AgentActivity {
                agent_id: Uuid::parse_str(id).ok()?,
            },
            (Some(patterns::USAGE), Some(id)) => DashboardRoute::AgentUsage {
                agent_id: Uuid::parse_str(id).ok()?,
            },
            (Some(patterns::SETUP), Some(id)) => DashboardRoute::SetupGuide {
                agent_id: Uuid::parse_str(id).ok()?,
            },
            _ => return None,
        };

        // Trailing segments make the path unrecognized
        if segments.next().is_some() {
            return None;
        }
        Some(route)
    }

    /// Page title shown in the content header.
    pub fn title(&self) -> &'static str {
        match self {
            DashboardRoute::AgentIndex => "AI Agents",
            DashboardRoute::AgentSettings { .. } => "Agent Settings",
            DashboardRoute::AgentActivity { .. } => "Agent Activity",
            DashboardRoute::AgentUsage { .. } => "Agent Usage",
            DashboardRoute::OverallUsage => "Usage",
            DashboardRoute::Profile => "Profile",
            DashboardRoute::Subscription => "Subscription",
            DashboardRoute::SetupGuide { .. } => "Setup Guide",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_parse() {
        let agent_id = Uuid::new_v4();
        let routes = [
            DashboardRoute::AgentIndex,
            DashboardRoute::AgentSettings { agent_id },
            DashboardRoute::AgentActivity { agent_id },
            DashboardRoute::AgentUsage { agent_id },
            DashboardRoute::OverallUsage,
            DashboardRoute::Profile,
            DashboardRoute::Subscription,
            DashboardRoute::SetupGuide { agent_id },
        ];

        for route in routes {
            assert_eq!(DashboardRoute::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn bare_usage_and_scoped_usage_are_distinct() {
        let agent_id = Uuid::new_v4();
        assert_eq!(
            DashboardRoute::parse("usage"),
            Some(DashboardRoute::OverallUsage)
        );
        assert_eq!(
            DashboardRoute::parse(&format!("usage/{agent_id}")),
            Some(DashboardRoute::AgentUsage { agent_id })
        );
    }

    #[test]
    fn unknown_or_malformed_paths_do_not_parse() {
        assert_eq!(DashboardRoute::parse("billing"), None);
        assert_eq!(DashboardRoute::parse("settings/not-a-uuid"), None);
        assert_eq!(
            DashboardRoute::parse("profile/extra-segment"),
            None
        );
    }

    #[test]
    fn empty_and_slash_paths_are_the_index() {
        assert_eq!(DashboardRoute::parse(""), Some(DashboardRoute::AgentIndex));
        assert_eq!(DashboardRoute::parse("/"), Some(DashboardRoute::AgentIndex));
    }
}
