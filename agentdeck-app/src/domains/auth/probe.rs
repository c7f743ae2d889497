//! Reset-affordance probe
//!
//! The embedded panel never reports which sub-view it is showing. The one
//! reliable tell is the presence of its "send reset instructions" button, so
//! the probe samples the panel's rendered output for it. Anchors and labels
//! do not count: only actionable elements identify the reset view, matching
//! how the panel lays its views out.

use crate::widget::rendered::RenderNode;

/// Visible caption identifying the password-reset affordance.
pub const RESET_AFFORDANCE_PHRASE: &str = "Send reset password instructions";

/// Whether the reset-password affordance is present in the rendered tree.
///
/// Pure function of the snapshot. An empty or partially rendered tree is
/// indistinguishable from "not in reset view" and probes `false`; the
/// affordance being absent is the common case, never an error.
pub fn reset_affordance_present(root: &RenderNode) -> bool {
    root.any(&|node| {
        node.role().is_actionable()
            && node
                .text()
                .is_some_and(|text| text.contains(RESET_AFFORDANCE_PHRASE))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::rendered::RenderNode;

    fn sign_in_tree() -> RenderNode {
        RenderNode::container(vec![
            RenderNode::label("Email address"),
            RenderNode::input("name@example.com"),
            RenderNode::label("Password"),
            RenderNode::input("Your secure password"),
            RenderNode::button("Sign in"),
            RenderNode::divider(),
            RenderNode::social_button("Continue with Google"),
            RenderNode::anchor("Forgot your password?"),
        ])
    }

    fn reset_tree() -> RenderNode {
        RenderNode::container(vec![
            RenderNode::label("Email address"),
            RenderNode::input("Your email address"),
            RenderNode::button("Send reset password instructions"),
            RenderNode::anchor("Already have an account? Sign in"),
        ])
    }

    #[test]
    fn empty_tree_probes_false() {
        assert!(!reset_affordance_present(&RenderNode::empty()));
    }

    #[test]
    fn sign_in_view_probes_false() {
        assert!(!reset_affordance_present(&sign_in_tree()));
    }

    #[test]
    fn reset_view_probes_true() {
        assert!(reset_affordance_present(&reset_tree()));
    }

    #[test]
    fn affordance_found_when_nested() {
        let tree = RenderNode::container(vec![RenderNode::container(vec![reset_tree()])]);
        assert!(reset_affordance_present(&tree));
    }

    #[test]
    fn phrase_in_surrounding_caption_still_matches() {
        let tree = RenderNode::container(vec![RenderNode::button(
            "Send reset password instructions now",
        )]);
        assert!(reset_affordance_present(&tree));
    }

    #[test]
    fn phrase_on_non_actionable_node_does_not_match() {
        let tree = RenderNode::container(vec![
            RenderNode::message("Send reset password instructions"),
            RenderNode::anchor("Send reset password instructions"),
        ]);
        assert!(!reset_affordance_present(&tree));
    }
}
