//! Application theme
//!
//! Dark surfaces with the brand's green/blue accent pair.

use iced::widget::{button, container, rule, text, text_input};
use iced::{Background, Border, Color, Shadow, Theme, theme};

/// Console palette and style functions.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleTheme;

impl ConsoleTheme {
    // Core colors
    pub const BACKGROUND: Color = Color::from_rgb(0.043, 0.055, 0.078); // #0B0E14
    pub const BACKGROUND_LIGHTER: Color = Color::from_rgb(0.078, 0.098, 0.133); // #141922
    pub const CARD_BG: Color = Color::from_rgb(0.106, 0.129, 0.173); // #1B212C
    pub const BORDER_COLOR: Color = Color::from_rgb(0.184, 0.224, 0.275); // #2F3946

    // Brand accents
    pub const BRAND: Color = Color::from_rgb(0.196, 1.0, 0.624); // #32FF9F
    pub const BRAND_HOVER: Color = Color::from_rgb(0.173, 0.886, 0.561); // #2CE28F
    pub const ACCENT: Color = Color::from_rgb(0.165, 0.769, 1.0); // #2AC4FF

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.58, 0.64, 0.72); // #94A3B8
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.42, 0.45, 0.50); // #6B7380

    // Status colors
    pub const ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2); // #FF3333

    // Neutral button surfaces (the Slack shortcut and social buttons)
    pub const NEUTRAL_BUTTON_BG: Color = Color::from_rgb(0.18, 0.18, 0.18); // #2E2E2E
    pub const NEUTRAL_BUTTON_HOVER: Color = Color::from_rgb(0.24, 0.24, 0.24); // #3D3D3D

    pub fn theme() -> Theme {
        Theme::custom(
            "agentdeck".to_string(),
            theme::Palette {
                background: Self::BACKGROUND,
                text: Self::TEXT_PRIMARY,
                primary: Self::BRAND,
                success: Self::BRAND,
                danger: Self::ERROR,
            },
        )
    }
}

fn flat(background: Color, text_color: Color, radius: f32) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Brand call-to-action button.
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => ConsoleTheme::BRAND_HOVER,
        _ => ConsoleTheme::BRAND,
    };
    flat(background, Color::BLACK, 12.0)
}

/// The hand-built OAuth shortcut button.
pub fn oauth_shortcut_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => ConsoleTheme::NEUTRAL_BUTTON_HOVER,
        _ => ConsoleTheme::NEUTRAL_BUTTON_BG,
    };
    flat(background, ConsoleTheme::TEXT_PRIMARY, 12.0)
}

/// Navigation chrome button: transparent until hovered.
pub fn nav_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => ConsoleTheme::ACCENT,
        _ => ConsoleTheme::TEXT_SECONDARY,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

/// Link-styled button (anchors inside forms).
pub fn anchor_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => ConsoleTheme::BRAND,
        _ => ConsoleTheme::ACCENT,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

/// Rounded card wrapping screen content.
pub fn card_container(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: None,
        background: Some(Background::Color(ConsoleTheme::CARD_BG)),
        border: Border {
            color: ConsoleTheme::BORDER_COLOR,
            width: 1.0,
            radius: 16.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Navigation bar strip.
pub fn nav_container(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: None,
        background: Some(Background::Color(ConsoleTheme::BACKGROUND_LIGHTER)),
        border: Border {
            color: ConsoleTheme::BORDER_COLOR,
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Inline error box.
pub fn error_box(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(ConsoleTheme::ERROR),
        background: Some(Background::Color(Color {
            a: 0.12,
            ..ConsoleTheme::ERROR
        })),
        border: Border {
            color: ConsoleTheme::ERROR,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
    }
}

pub fn secondary_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ConsoleTheme::TEXT_SECONDARY),
    }
}

pub fn dimmed_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ConsoleTheme::TEXT_DIMMED),
    }
}

pub fn brand_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ConsoleTheme::BRAND),
    }
}

pub fn error_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ConsoleTheme::ERROR),
    }
}

/// Horizontal divider between form sections.
pub fn divider(_theme: &Theme) -> rule::Style {
    rule::Style {
        color: ConsoleTheme::BORDER_COLOR,
        width: 1,
        radius: 0.0.into(),
        fill_mode: rule::FillMode::Full,
    }
}

/// Form input styling driven by the configured border colors.
pub fn form_input(
    background: Color,
    border: Color,
    border_hover: Color,
    border_focus: Color,
    border_width: f32,
    radius: f32,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |_theme, status| {
        let border_color = match status {
            text_input::Status::Focused => border_focus,
            text_input::Status::Hovered => border_hover,
            _ => border,
        };
        text_input::Style {
            background: Background::Color(background),
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius.into(),
            },
            icon: ConsoleTheme::TEXT_SECONDARY,
            placeholder: ConsoleTheme::TEXT_DIMMED,
            value: ConsoleTheme::TEXT_PRIMARY,
            selection: ConsoleTheme::ACCENT,
        }
    }
}
