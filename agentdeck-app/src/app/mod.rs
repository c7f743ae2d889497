use std::sync::Arc;

use iced::{Settings, Theme};

use crate::domains::ui::theme::ConsoleTheme;
use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the Agentdeck application with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let config = Arc::new(config);

    iced::application("Agentdeck", update::update, view::view)
        .settings(default_settings())
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .window(iced::window::Settings {
            size: iced::Size::new(1280.0, 720.0),
            resizable: true,
            decorations: true,
            ..Default::default()
        })
        .run_with(move || bootstrap::runtime_boot(&config))
}

fn default_settings() -> Settings {
    Settings {
        id: Some("agentdeck".to_string()),
        antialiasing: true,
        ..Settings::default()
    }
}

fn app_theme(_state: &State) -> Theme {
    ConsoleTheme::theme()
}
