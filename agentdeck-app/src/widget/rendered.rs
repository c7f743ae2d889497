//! Queryable render tree published by the embedded auth panel
//!
//! The panel exposes no structured event channel; its rendered output is the
//! only thing the rest of the application may observe. [`RenderSurface`] is
//! the shared handle the panel publishes into and observers sample from.

use parking_lot::RwLock;
use std::sync::Arc;

/// Role of a rendered element, mirroring the panel's recognized element
/// classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Container,
    Button,
    SocialButton,
    Anchor,
    Label,
    Input,
    Divider,
    Message,
}

impl NodeRole {
    /// Whether an element of this role responds to activation.
    pub fn is_actionable(self) -> bool {
        matches!(self, NodeRole::Button | NodeRole::SocialButton)
    }
}

/// One node of the panel's rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderNode {
    role: NodeRole,
    text: Option<String>,
    children: Vec<RenderNode>,
}

impl RenderNode {
    pub fn new(role: NodeRole, text: Option<String>, children: Vec<RenderNode>) -> Self {
        Self {
            role,
            text,
            children,
        }
    }

    /// An empty container; what a not-yet-rendered panel publishes.
    pub fn empty() -> Self {
        Self::container(Vec::new())
    }

    pub fn container(children: Vec<RenderNode>) -> Self {
        Self::new(NodeRole::Container, None, children)
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::new(NodeRole::Button, Some(text.into()), Vec::new())
    }

    pub fn social_button(text: impl Into<String>) -> Self {
        Self::new(NodeRole::SocialButton, Some(text.into()), Vec::new())
    }

    pub fn anchor(text: impl Into<String>) -> Self {
        Self::new(NodeRole::Anchor, Some(text.into()), Vec::new())
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(NodeRole::Label, Some(text.into()), Vec::new())
    }

    pub fn input(placeholder: impl Into<String>) -> Self {
        Self::new(NodeRole::Input, Some(placeholder.into()), Vec::new())
    }

    pub fn divider() -> Self {
        Self::new(NodeRole::Divider, None, Vec::new())
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self::new(NodeRole::Message, Some(text.into()), Vec::new())
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    /// Visible text content of this node, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[RenderNode] {
        &self.children
    }

    /// Depth-first search: does any node in this subtree satisfy the
    /// predicate?
    pub fn any<F>(&self, predicate: &F) -> bool
    where
        F: Fn(&RenderNode) -> bool,
    {
        predicate(self) || self.children.iter().any(|child| child.any(predicate))
    }
}

impl Default for RenderNode {
    fn default() -> Self {
        Self::empty()
    }
}

/// Source of rendered output that can be sampled at any time.
///
/// The synchronizer depends on this seam instead of a concrete surface so
/// tests can interpose (e.g. to count samples).
pub trait RenderedOutput: Send + Sync {
    fn snapshot(&self) -> RenderNode;
}

/// Shared handle over the panel's most recently rendered tree.
///
/// The panel publishes after every internal change; observers take cheap
/// snapshots. This is the explicit scoped root observers receive — nothing
/// outside the panel's own subtree is ever inspected.
#[derive(Clone, Debug, Default)]
pub struct RenderSurface {
    inner: Arc<RwLock<RenderNode>>,
}

impl RenderSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the published tree.
    pub fn publish(&self, root: RenderNode) {
        *self.inner.write() = root;
    }

    /// Current tree at call time.
    pub fn snapshot(&self) -> RenderNode {
        self.inner.read().clone()
    }
}

impl RenderedOutput for RenderSurface {
    fn snapshot(&self) -> RenderNode {
        RenderSurface::snapshot(self)
    }
}
