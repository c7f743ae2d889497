//! Declarative configuration accepted by the embedded auth panel
//!
//! The panel is opaque; this is the full set of option groups it recognizes.
//! Defaults mirror the hosted panel's stock appearance and copy, so a host
//! only overrides what it cares about.

use iced::{Color, Padding};
use url::Url;

/// Named base palette for the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelTheme {
    #[default]
    Dark,
    Light,
}

/// Arrangement of third-party provider buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SocialLayout {
    #[default]
    Vertical,
    Horizontal,
}

/// Color variables consumed across panel elements.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorVariables {
    pub brand_button_text: Color,
    pub default_button_background: Color,
    pub default_button_background_hover: Color,
    pub input_background: Color,
    pub input_border: Color,
    pub input_border_hover: Color,
    pub input_border_focus: Color,
}

impl Default for ColorVariables {
    fn default() -> Self {
        Self {
            brand_button_text: Color::WHITE,
            default_button_background: Color::from_rgb8(0x44, 0x44, 0x4c),
            default_button_background_hover: Color::from_rgb8(0x52, 0x52, 0x5e),
            input_background: Color::TRANSPARENT,
            input_border: Color::from_rgb8(0x3e, 0x3e, 0x44),
            input_border_hover: Color::from_rgb8(0x55, 0x55, 0x5c),
            input_border_focus: Color::from_rgb8(0x8b, 0x8b, 0x94),
        }
    }
}

/// Spacing variables.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceVariables {
    pub button_padding: Padding,
    pub input_padding: Padding,
}

impl Default for SpaceVariables {
    fn default() -> Self {
        Self {
            button_padding: Padding::from([10, 15]),
            input_padding: Padding::from([10, 15]),
        }
    }
}

/// Border width variables.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderWidthVariables {
    pub button_border_width: f32,
    pub input_border_width: f32,
}

impl Default for BorderWidthVariables {
    fn default() -> Self {
        Self {
            button_border_width: 1.0,
            input_border_width: 1.0,
        }
    }
}

/// Corner radius variables.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusVariables {
    pub button_border_radius: f32,
    pub input_border_radius: f32,
}

impl Default for RadiusVariables {
    fn default() -> Self {
        Self {
            button_border_radius: 4.0,
            input_border_radius: 4.0,
        }
    }
}

/// The panel's theme variable groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeVariables {
    pub colors: ColorVariables,
    pub space: SpaceVariables,
    pub border_widths: BorderWidthVariables,
    pub radii: RadiusVariables,
}

/// Per-element style override; unset fields fall back to the theme
/// variables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementStyle {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub font_size: Option<u16>,
    pub gap: Option<u16>,
    pub height: Option<f32>,
    pub border_radius: Option<f32>,
}

/// Style overrides per rendered element class.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementStyles {
    pub button: ElementStyle,
    pub anchor: ElementStyle,
    pub container: ElementStyle,
    pub divider: ElementStyle,
    pub label: ElementStyle,
    pub input: ElementStyle,
    pub message: ElementStyle,
    pub social_button: ElementStyle,
}

/// Appearance option group: variables plus per-element overrides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Appearance {
    pub variables: ThemeVariables,
    pub style: ElementStyles,
}

/// Copy shown on the sign-in view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInCopy {
    pub email_label: String,
    pub password_label: String,
    pub email_input_placeholder: String,
    pub password_input_placeholder: String,
    pub button_label: String,
    pub loading_button_label: String,
    pub social_provider_text: String,
    pub link_text: String,
}

impl Default for SignInCopy {
    fn default() -> Self {
        Self {
            email_label: "Email address".into(),
            password_label: "Your Password".into(),
            email_input_placeholder: "Your email address".into(),
            password_input_placeholder: "Your password".into(),
            button_label: "Sign in".into(),
            loading_button_label: "Signing in ...".into(),
            social_provider_text: "Sign in with {{provider}}".into(),
            link_text: "Already have an account? Sign in".into(),
        }
    }
}

/// Copy shown on the password-reset request view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgotPasswordCopy {
    pub email_label: String,
    pub email_input_placeholder: String,
    pub button_label: String,
    pub loading_button_label: String,
    pub link_text: String,
    pub confirmation_text: String,
}

impl Default for ForgotPasswordCopy {
    fn default() -> Self {
        Self {
            email_label: "Email address".into(),
            email_input_placeholder: "Your email address".into(),
            button_label: "Send reset password instructions".into(),
            loading_button_label: "Sending reset instructions ...".into(),
            link_text: "Forgot your password?".into(),
            confirmation_text: "Check your email for the password reset link".into(),
        }
    }
}

/// Per-view copy overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizationVariables {
    pub sign_in: SignInCopy,
    pub forgot_password: ForgotPasswordCopy,
}

/// Localization option group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Localization {
    pub variables: LocalizationVariables,
}

/// Full configuration object handed to the panel on mount.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub appearance: Appearance,
    pub localization: Localization,
    pub theme: PanelTheme,
    /// Enabled third-party login methods, by provider id.
    pub providers: Vec<String>,
    pub social_layout: SocialLayout,
    /// Destination the provider redirects to after a completed sign-in.
    pub redirect_to: Url,
}

impl PanelConfig {
    pub fn new(redirect_to: Url) -> Self {
        Self {
            appearance: Appearance::default(),
            localization: Localization::default(),
            theme: PanelTheme::default(),
            providers: Vec::new(),
            social_layout: SocialLayout::default(),
            redirect_to,
        }
    }

    /// Provider button caption with the `{{provider}}` placeholder expanded.
    pub fn social_button_caption(&self, provider: &str) -> String {
        let mut label: Vec<char> = provider.chars().collect();
        if let Some(first) = label.first_mut() {
            *first = first.to_ascii_uppercase();
        }
        let display_name: String = label.into_iter().collect();
        self.localization
            .variables
            .sign_in
            .social_provider_text
            .replace("{{provider}}", &display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reset_button_copy_is_the_stock_phrase() {
        let copy = ForgotPasswordCopy::default();
        assert_eq!(copy.button_label, "Send reset password instructions");
    }

    #[test]
    fn social_caption_expands_provider_placeholder() {
        let mut config =
            PanelConfig::new(Url::parse("https://app.example.com/dashboard").expect("url"));
        config.localization.variables.sign_in.social_provider_text =
            "Continue with {{provider}}".into();
        assert_eq!(config.social_button_caption("google"), "Continue with Google");
    }
}
