//! Bundled embedded auth panel
//!
//! The hosted panel shipped with the console. It renders the sign-in and
//! password-reset forms, talks to the session provider internally, and
//! publishes its render tree after every change. Hosts interact with it
//! only through the [`AuthPanel`] boundary.

use std::sync::Arc;

use iced::widget::{button, column, container, horizontal_rule, row, text, text_input};
use iced::{Alignment, Color, Element, Length, Task};

use agentdeck_session::SessionProvider;

use crate::domains::ui::theme::{self, ConsoleTheme};
use crate::widget::rendered::{RenderNode, RenderSurface};
use crate::widget::{AuthPanel, PanelConfig, PanelInteraction, PanelSignal, SocialLayout};

/// Which of its own sub-views the panel is showing. Never reported to the
/// host; the host may only watch the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PanelView {
    #[default]
    SignIn,
    ForgotPassword,
}

pub struct HostedAuthPanel {
    session: Arc<dyn SessionProvider>,
    config: PanelConfig,
    view: PanelView,
    email: String,
    password: String,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
    surface: RenderSurface,
}

impl std::fmt::Debug for HostedAuthPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedAuthPanel")
            .field("view", &self.view)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish()
    }
}

impl HostedAuthPanel {
    pub fn new(session: Arc<dyn SessionProvider>, config: PanelConfig) -> Self {
        let panel = Self {
            session,
            config,
            view: PanelView::default(),
            email: String::new(),
            password: String::new(),
            loading: false,
            error: None,
            notice: None,
            surface: RenderSurface::new(),
        };
        panel.publish();
        panel
    }

    fn publish(&self) {
        self.surface.publish(self.render_tree());
    }

    /// The render tree mirroring the current sub-view.
    ///
    /// Buttons keep their configured captions here even while a request is
    /// in flight; the affordance is the same control either way.
    fn render_tree(&self) -> RenderNode {
        let copy = &self.config.localization.variables;
        let mut children = Vec::new();

        match self.view {
            PanelView::SignIn => {
                for provider in &self.config.providers {
                    children.push(RenderNode::social_button(
                        self.config.social_button_caption(provider),
                    ));
                }
                if !self.config.providers.is_empty() {
                    children.push(RenderNode::divider());
                }
                children.extend([
                    RenderNode::label(copy.sign_in.email_label.clone()),
                    RenderNode::input(copy.sign_in.email_input_placeholder.clone()),
                    RenderNode::label(copy.sign_in.password_label.clone()),
                    RenderNode::input(copy.sign_in.password_input_placeholder.clone()),
                    RenderNode::button(copy.sign_in.button_label.clone()),
                    RenderNode::anchor(copy.forgot_password.link_text.clone()),
                ]);
            }
            PanelView::ForgotPassword => {
                children.extend([
                    RenderNode::label(copy.forgot_password.email_label.clone()),
                    RenderNode::input(copy.forgot_password.email_input_placeholder.clone()),
                    RenderNode::button(copy.forgot_password.button_label.clone()),
                    RenderNode::anchor(copy.sign_in.link_text.clone()),
                ]);
            }
        }

        if let Some(error) = &self.error {
            children.push(RenderNode::message(error.clone()));
        }
        if let Some(notice) = &self.notice {
            children.push(RenderNode::message(notice.clone()));
        }

        RenderNode::container(children)
    }

    fn styled_label<'a>(&self, caption: &'a str) -> Element<'a, PanelInteraction> {
        let style = &self.config.appearance.style.label;
        let color = style.color.unwrap_or(ConsoleTheme::TEXT_SECONDARY);
        text(caption)
            .size(style.font_size.unwrap_or(14))
            .style(move |_| iced::widget::text::Style { color: Some(color) })
            .into()
    }

    fn styled_input<'a>(
        &self,
        placeholder: &'a str,
        value: &'a str,
        secure: bool,
        on_input: fn(String) -> PanelSignal,
    ) -> Element<'a, PanelInteraction> {
        let vars = &self.config.appearance.variables;
        let style = &self.config.appearance.style.input;
        let input = text_input(placeholder, value)
            .on_input(move |s| PanelInteraction(on_input(s)))
            .secure(secure)
            .padding(vars.space.input_padding)
            .size(style.font_size.unwrap_or(16))
            .style(theme::form_input(
                vars.colors.input_background,
                vars.colors.input_border,
                vars.colors.input_border_hover,
                vars.colors.input_border_focus,
                vars.border_widths.input_border_width,
                vars.radii.input_border_radius,
            ));
        input.into()
    }

    fn submit_button<'a>(
        &self,
        caption: String,
        enabled: bool,
        signal: PanelSignal,
    ) -> Element<'a, PanelInteraction> {
        let vars = &self.config.appearance.variables;
        let style = &self.config.appearance.style.button;
        let background = vars.colors.default_button_background;
        let background_hover = vars.colors.default_button_background_hover;
        let text_color = vars.colors.brand_button_text;
        let radius = style
            .border_radius
            .unwrap_or(vars.radii.button_border_radius);

        button(
            text(caption)
                .size(style.font_size.unwrap_or(16))
                .width(Length::Fill)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(vars.space.button_padding)
        .style(move |_theme, status| {
            let bg = match status {
                button::Status::Hovered | button::Status::Pressed => background_hover,
                _ => background,
            };
            button::Style {
                background: Some(iced::Background::Color(bg)),
                text_color,
                border: iced::Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: radius.into(),
                },
                shadow: iced::Shadow::default(),
            }
        })
        .on_press_maybe(enabled.then_some(PanelInteraction(signal)))
        .into()
    }

    fn social_button<'a>(&self, provider: &str) -> Element<'a, PanelInteraction> {
        let style = &self.config.appearance.style.social_button;
        let background = style.background.unwrap_or(ConsoleTheme::NEUTRAL_BUTTON_BG);
        let text_color = style.color.unwrap_or(ConsoleTheme::TEXT_PRIMARY);
        let radius = style
            .border_radius
            .unwrap_or(self.config.appearance.variables.radii.button_border_radius);
        let height = style.height.unwrap_or(44.0);

        button(
            text(self.config.social_button_caption(provider))
                .size(style.font_size.unwrap_or(16))
                .width(Length::Fill)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(move |_theme, status| {
            let bg = match status {
                button::Status::Hovered | button::Status::Pressed => Color {
                    r: (background.r + 0.06).min(1.0),
                    g: (background.g + 0.06).min(1.0),
                    b: (background.b + 0.06).min(1.0),
                    a: background.a,
                },
                _ => background,
            };
            button::Style {
                background: Some(iced::Background::Color(bg)),
                text_color,
                border: iced::Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: radius.into(),
                },
                shadow: iced::Shadow::default(),
            }
        })
        .on_press_maybe(
            (!self.loading).then(|| PanelInteraction(PanelSignal::SocialSignIn(provider.to_string()))),
        )
        .into()
    }

    fn anchor<'a>(&self, caption: &'a str, signal: PanelSignal) -> Element<'a, PanelInteraction> {
        let style = &self.config.appearance.style.anchor;
        let color = style.color.unwrap_or(ConsoleTheme::ACCENT);
        button(
            text(caption)
                .size(style.font_size.unwrap_or(14))
                .style(move |_| iced::widget::text::Style { color: Some(color) }),
        )
        .style(move |_theme, _status| button::Style {
            background: None,
            text_color: color,
            border: iced::Border::default(),
            shadow: iced::Shadow::default(),
        })
        .on_press(PanelInteraction(signal))
        .into()
    }

    fn footnotes<'a>(&'a self) -> Vec<Element<'a, PanelInteraction>> {
        let style = &self.config.appearance.style.message;
        let mut notes = Vec::new();
        if let Some(error) = &self.error {
            notes.push(
                text(error.as_str())
                    .size(style.font_size.unwrap_or(14))
                    .style(theme::error_text)
                    .into(),
            );
        }
        if let Some(notice) = &self.notice {
            let color = style.color.unwrap_or(ConsoleTheme::TEXT_SECONDARY);
            notes.push(
                text(notice.as_str())
                    .size(style.font_size.unwrap_or(14))
                    .style(move |_| iced::widget::text::Style { color: Some(color) })
                    .into(),
            );
        }
        notes
    }

    fn view_sign_in(&self) -> Element<'_, PanelInteraction> {
        let copy = &self.config.localization.variables;
        let gap = self.config.appearance.style.container.gap.unwrap_or(16);

        let mut content = column![].spacing(gap).width(Length::Fill);

        if !self.config.providers.is_empty() {
            let socials: Vec<Element<'_, PanelInteraction>> = self
                .config
                .providers
                .iter()
                .map(|provider| self.social_button(provider))
                .collect();
            content = match self.config.social_layout {
                SocialLayout::Vertical => {
                    content.push(column(socials).spacing(12).width(Length::Fill))
                }
                SocialLayout::Horizontal => {
                    content.push(row(socials).spacing(12).width(Length::Fill))
                }
            };
            content = content.push(horizontal_rule(1).style(theme::divider));
        }

        let submit_caption = if self.loading {
            copy.sign_in.loading_button_label.clone()
        } else {
            copy.sign_in.button_label.clone()
        };
        let can_submit =
            !self.loading && !self.email.is_empty() && !self.password.is_empty();

        content = content
            .push(self.styled_label(&copy.sign_in.email_label))
            .push(self.styled_input(
                &copy.sign_in.email_input_placeholder,
                &self.email,
                false,
                PanelSignal::EmailChanged,
            ))
            .push(self.styled_label(&copy.sign_in.password_label))
            .push(self.styled_input(
                &copy.sign_in.password_input_placeholder,
                &self.password,
                true,
                PanelSignal::PasswordChanged,
            ))
            .push(self.submit_button(submit_caption, can_submit, PanelSignal::SubmitSignIn))
            .push(self.anchor(
                &copy.forgot_password.link_text,
                PanelSignal::OpenForgotPassword,
            ));

        for note in self.footnotes() {
            content = content.push(note);
        }

        content.into()
    }

    fn view_forgot_password(&self) -> Element<'_, PanelInteraction> {
        let copy = &self.config.localization.variables;
        let gap = self.config.appearance.style.container.gap.unwrap_or(16);

        let submit_caption = if self.loading {
            copy.forgot_password.loading_button_label.clone()
        } else {
            copy.forgot_password.button_label.clone()
        };
        let can_submit = !self.loading && !self.email.is_empty();

        let mut content = column![
            self.styled_label(&copy.forgot_password.email_label),
            self.styled_input(
                &copy.forgot_password.email_input_placeholder,
                &self.email,
                false,
                PanelSignal::EmailChanged,
            ),
        ]
        .spacing(gap)
        .width(Length::Fill);

        content = content
            .push(self.submit_button(submit_caption, can_submit, PanelSignal::SubmitReset))
            .push(self.anchor(&copy.sign_in.link_text, PanelSignal::BackToSignIn));

        for note in self.footnotes() {
            content = content.push(note);
        }

        content.into()
    }
}

impl AuthPanel for HostedAuthPanel {
    fn configure(&mut self, config: PanelConfig) {
        self.config = config;
        self.publish();
    }

    fn update(&mut self, interaction: PanelInteraction) -> Task<PanelInteraction> {
        let task = match interaction.0 {
            PanelSignal::EmailChanged(value) => {
                self.email = value;
                Task::none()
            }
            PanelSignal::PasswordChanged(value) => {
                self.password = value;
                Task::none()
            }
            PanelSignal::SubmitSignIn => {
                self.loading = true;
                self.error = None;
                self.notice = None;
                let session = Arc::clone(&self.session);
                let email = self.email.clone();
                let password = self.password.clone();
                Task::perform(
                    async move {
                        session
                            .sign_in_with_password(&email, &password)
                            .await
                            .map(drop)
                            .map_err(|e| e.to_string())
                    },
                    |result| PanelInteraction(PanelSignal::SignInFinished(result)),
                )
            }
            PanelSignal::SignInFinished(result) => {
                self.loading = false;
                if let Err(error) = result {
                    self.error = Some(error);
                }
                // On success the provider's identity stream moves the host
                // off this screen; nothing to do here.
                Task::none()
            }
            PanelSignal::SocialSignIn(provider) => {
                self.error = None;
                let session = Arc::clone(&self.session);
                let redirect_to = self.config.redirect_to.clone();
                Task::perform(
                    async move {
                        session
                            .sign_in_with_oauth(&provider, redirect_to)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |result| PanelInteraction(PanelSignal::SocialLaunchFinished(result)),
                )
            }
            PanelSignal::SocialLaunchFinished(result) => {
                if let Err(error) = result {
                    self.error = Some(error);
                }
                Task::none()
            }
            PanelSignal::OpenForgotPassword => {
                self.view = PanelView::ForgotPassword;
                self.error = None;
                self.notice = None;
                Task::none()
            }
            PanelSignal::BackToSignIn => {
                self.view = PanelView::SignIn;
                self.error = None;
                self.notice = None;
                Task::none()
            }
            PanelSignal::SubmitReset => {
                self.loading = true;
                self.error = None;
                self.notice = None;
                let session = Arc::clone(&self.session);
                let email = self.email.clone();
                Task::perform(
                    async move {
                        session
                            .request_password_reset(&email)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    |result| PanelInteraction(PanelSignal::ResetFinished(result)),
                )
            }
            PanelSignal::ResetFinished(result) => {
                self.loading = false;
                match result {
                    Ok(()) => {
                        self.notice = Some(
                            self.config
                                .localization
                                .variables
                                .forgot_password
                                .confirmation_text
                                .clone(),
                        );
                    }
                    Err(error) => self.error = Some(error),
                }
                Task::none()
            }
        };

        self.publish();
        task
    }

    fn view(&self) -> Element<'_, PanelInteraction> {
        let body = match self.view {
            PanelView::SignIn => self.view_sign_in(),
            PanelView::ForgotPassword => self.view_forgot_password(),
        };
        container(body).width(Length::Fill).into()
    }

    fn surface(&self) -> RenderSurface {
        self.surface.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::probe::reset_affordance_present;
    use crate::widget::rendered::NodeRole;
    use agentdeck_session::mock::MockSessionProvider;
    use url::Url;

    fn panel() -> HostedAuthPanel {
        let config = PanelConfig::new(
            Url::parse("https://app.example.com/dashboard").expect("static url"),
        );
        HostedAuthPanel::new(Arc::new(MockSessionProvider::new()), config)
    }

    fn switch_to_reset(panel: &mut HostedAuthPanel) {
        let _ = panel.update(PanelInteraction(PanelSignal::OpenForgotPassword));
    }

    #[test]
    fn sign_in_tree_has_no_reset_affordance() {
        let panel = panel();
        assert!(!reset_affordance_present(&panel.surface().snapshot()));
    }

    #[test]
    fn reset_tree_exposes_the_affordance() {
        let mut panel = panel();
        switch_to_reset(&mut panel);
        assert!(reset_affordance_present(&panel.surface().snapshot()));
    }

    #[test]
    fn returning_to_sign_in_removes_the_affordance() {
        let mut panel = panel();
        switch_to_reset(&mut panel);
        let _ = panel.update(PanelInteraction(PanelSignal::BackToSignIn));
        assert!(!reset_affordance_present(&panel.surface().snapshot()));
    }

    #[test]
    fn configured_providers_render_social_buttons() {
        let mut config = PanelConfig::new(
            Url::parse("https://app.example.com/dashboard").expect("static url"),
        );
        config.providers = vec!["google".into()];
        config.localization.variables.sign_in.social_provider_text =
            "Continue with {{provider}}".into();
        let panel = HostedAuthPanel::new(Arc::new(MockSessionProvider::new()), config);

        let snapshot = panel.surface().snapshot();
        assert!(snapshot.any(&|node| {
            node.role() == NodeRole::SocialButton
                && node.text() == Some("Continue with Google")
        }));
    }

    #[test]
    fn localization_override_changes_reset_button_caption() {
        let mut config = PanelConfig::new(
            Url::parse("https://app.example.com/dashboard").expect("static url"),
        );
        config
            .localization
            .variables
            .forgot_password
            .button_label = "Email me a reset link".into();
        let mut panel = HostedAuthPanel::new(Arc::new(MockSessionProvider::new()), config);
        switch_to_reset(&mut panel);

        let snapshot = panel.surface().snapshot();
        assert!(snapshot.any(&|node| node.text() == Some("Email me a reset link")));
        // The stock phrase is gone, so the probe reads sign-in
        assert!(!reset_affordance_present(&snapshot));
    }
}
