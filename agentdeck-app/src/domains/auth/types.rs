//! Auth domain types

/// The inferred sub-view the embedded auth panel is currently showing.
///
/// Always exactly one value; mutated only by the view synchronizer and
/// discarded with the auth screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    SignIn,
    ForgotPassword,
}

impl ViewMode {
    pub fn is_sign_in(self) -> bool {
        matches!(self, ViewMode::SignIn)
    }
}
