//! Dashboard shell flow tests

use std::sync::Arc;

use agentdeck_app::app::bootstrap::AppConfig;
use agentdeck_app::common::messages::DomainMessage;
use agentdeck_app::domains::shell::messages as shell;
use agentdeck_app::domains::shell::routes::DashboardRoute;
use agentdeck_app::state::{Screen, State};
use agentdeck_app::update::update;
use agentdeck_session::mock::MockSessionProvider;
use agentdeck_session::{SessionIdentity, SessionProvider};
use url::Url;
use uuid::Uuid;

fn make_state_on_dashboard() -> (State, Arc<MockSessionProvider>) {
    let config = AppConfig::new(
        Url::parse("http://localhost:54321").expect("static url"),
        "anon-key",
        Url::parse("http://localhost:3000").expect("static url"),
    )
    .expect("valid config");

    let provider = Arc::new(MockSessionProvider::signed_in_as("ops@example.com"));
    let mut state = State::new(
        Arc::new(config),
        Arc::clone(&provider) as Arc<dyn SessionProvider>,
    );
    state.screen = Screen::Dashboard;
    (state, provider)
}

fn make_identity(email: &str) -> SessionIdentity {
    SessionIdentity {
        id: Uuid::new_v4(),
        email: Some(email.to_string()),
        created_at: None,
        last_sign_in_at: None,
    }
}

#[tokio::test]
async fn identity_loaded_success_caches_the_identity() {
    let (mut state, _provider) = make_state_on_dashboard();

    let _ = update(
        &mut state,
        DomainMessage::Shell(shell::Message::IdentityLoaded(Ok(Some(make_identity(
            "ops@example.com",
        ))))),
    );

    assert_eq!(
        state
            .domains
            .shell
            .identity
            .as_ref()
            .and_then(|identity| identity.email.as_deref()),
        Some("ops@example.com")
    );
}

#[tokio::test]
async fn identity_fetch_failure_renders_without_identity() {
    let (mut state, _provider) = make_state_on_dashboard();

    let _ = update(
        &mut state,
        DomainMessage::Shell(shell::Message::IdentityLoaded(Err(
            "provider timeout".to_string()
        ))),
    );

    // Recovered silently: no identity display, still on the dashboard
    assert!(state.domains.shell.identity.is_none());
    assert_eq!(state.screen, Screen::Dashboard);
}

#[tokio::test]
async fn navigate_switches_the_content_route() {
    let (mut state, _provider) = make_state_on_dashboard();
    let agent_id = Uuid::new_v4();

    let _ = update(
        &mut state,
        DomainMessage::Shell(shell::Message::Navigate(DashboardRoute::AgentSettings {
            agent_id,
        })),
    );

    assert_eq!(
        state.domains.shell.route,
        DashboardRoute::AgentSettings { agent_id }
    );
}

#[tokio::test]
async fn sign_out_request_marks_the_flow_in_flight() {
    let (mut state, _provider) = make_state_on_dashboard();

    let _ = update(
        &mut state,
        DomainMessage::Shell(shell::Message::SignOutRequested),
    );

    assert!(state.domains.shell.signing_out);
}

#[tokio::test]
async fn sign_out_success_navigates_to_landing() {
    let (mut state, _provider) = make_state_on_dashboard();

    let _ = update(
        &mut state,
        DomainMessage::Shell(shell::Message::SignOutFinished(Ok(()))),
    );

    assert_eq!(state.screen, Screen::Landing);
}

#[tokio::test]
async fn sign_out_failure_still_navigates_to_landing() {
    let (mut state, _provider) = make_state_on_dashboard();
    state.domains.shell.identity = Some(make_identity("ops@example.com"));

    let _ = update(
        &mut state,
        DomainMessage::Shell(shell::Message::SignOutFinished(Err(
            "termination failed".to_string()
        ))),
    );

    // Navigation proceeds regardless of the termination outcome, and the
    // shell forgets its cached identity
    assert_eq!(state.screen, Screen::Landing);
    assert!(state.domains.shell.identity.is_none());
    assert!(!state.domains.shell.signing_out);
}
