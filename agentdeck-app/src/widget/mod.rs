//! Embedded auth panel boundary
//!
//! The sign-in screen embeds a third-party authentication panel. It is
//! opaque: it takes a declarative [`PanelConfig`], performs its network
//! calls internally, and its only observable output is the render tree it
//! publishes through a [`RenderSurface`]. There is no structured event
//! channel reporting which of its sub-views is showing.

pub mod config;
pub mod rendered;

pub use config::{
    Appearance, ElementStyle, ElementStyles, ForgotPasswordCopy, Localization,
    LocalizationVariables, PanelConfig, PanelTheme, SignInCopy, SocialLayout,
};
pub use rendered::{NodeRole, RenderNode, RenderSurface, RenderedOutput};

use iced::{Element, Task};

/// Interaction token emitted by a panel's view.
///
/// Hosts must treat these as opaque: route them back into
/// [`AuthPanel::update`] verbatim and never branch on their contents. The
/// panel's internal signal vocabulary is deliberately private to this
/// module tree.
#[derive(Debug, Clone)]
pub struct PanelInteraction(pub(crate) PanelSignal);

/// Internal panel signals. Not part of the host-facing contract.
#[derive(Debug, Clone)]
pub(crate) enum PanelSignal {
    EmailChanged(String),
    PasswordChanged(String),
    SubmitSignIn,
    SignInFinished(Result<(), String>),
    SocialSignIn(String),
    SocialLaunchFinished(Result<(), String>),
    OpenForgotPassword,
    BackToSignIn,
    SubmitReset,
    ResetFinished(Result<(), String>),
}

/// The embedded authentication panel, as seen by its host.
pub trait AuthPanel: std::fmt::Debug {
    /// Apply a declarative configuration.
    fn configure(&mut self, config: PanelConfig);

    /// Advance internal state. Returned tasks produce more interactions and
    /// must be routed back here as well.
    fn update(&mut self, interaction: PanelInteraction) -> Task<PanelInteraction>;

    /// Render the panel's current sub-view.
    fn view(&self) -> Element<'_, PanelInteraction>;

    /// Handle to the panel's published rendered output — the only channel a
    /// host may observe panel state through.
    fn surface(&self) -> RenderSurface;
}
