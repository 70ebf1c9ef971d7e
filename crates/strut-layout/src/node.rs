//! Layout node types.
//!
//! A [`LayoutNode`] pairs a [`Style`] with the computed layout, the solve
//! cache, the tree links (parent and child keys into the arena), an optional
//! measure callback for leaf content, and the dirty-tracking state machine.

use std::fmt;

use crate::computed::{CachedLayout, ComputedLayout};
use crate::math::UNDEFINED;
use crate::style::Style;
use crate::tree::NodeKey;

/// Dirty-tracking state of a node.
///
/// A node moves `Dirty → HasNewLayout` when the solver recomputes it, and
/// `HasNewLayout → UpToDate` when the host acknowledges the result with
/// [`mark_layout_seen`](crate::tree::LayoutTree::mark_layout_seen). Dirtying
/// a node whose fresh layout was never consumed is a protocol error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LayoutState {
    /// Some input changed since the cached layout was produced.
    #[default]
    Dirty,
    /// The last solve produced a result the host has not consumed yet.
    HasNewLayout,
    /// The cached layout matches the inputs and has been consumed.
    UpToDate,
}

/// Output buffer for a measure callback.
///
/// Either field may be left unset to signal "no intrinsic size" on that
/// axis. The engine owns one of these per layout pass and lends it to each
/// callback invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureOutput {
    /// Intrinsic width of the content.
    pub width: f32,
    /// Intrinsic height of the content.
    pub height: f32,
}

impl Default for MeasureOutput {
    fn default() -> Self {
        Self {
            width: UNDEFINED,
            height: UNDEFINED,
        }
    }
}

/// Leaf content sizer.
///
/// Called with the available content width (unset when unconstrained); the
/// callback writes its intrinsic size into the borrowed [`MeasureOutput`].
/// Callbacks run inline on the layout thread, one at a time, and must not
/// mutate the tree. Node-specific context travels in the closure's captures.
pub type MeasureFunc = Box<dyn FnMut(f32, &mut MeasureOutput)>;

/// A node in the layout tree.
pub struct LayoutNode {
    /// Input attributes.
    pub style: Style,
    /// Output of the last solve.
    pub layout: ComputedLayout,
    /// Solve memo for skip-reuse.
    pub(crate) cache: CachedLayout,
    /// Parent key, if attached.
    pub(crate) parent: Option<NodeKey>,
    /// Child keys in layout order.
    pub(crate) children: Vec<NodeKey>,
    /// Optional leaf content sizer.
    pub(crate) measure: Option<MeasureFunc>,
    /// Dirty-tracking state.
    pub(crate) state: LayoutState,
    /// Line this node landed on during its parent's last solve.
    pub(crate) line_index: usize,
}

impl LayoutNode {
    /// Creates a detached node with the given style.
    #[must_use]
    pub(crate) fn new(style: Style) -> Self {
        Self {
            style,
            layout: ComputedLayout::new(),
            cache: CachedLayout::default(),
            parent: None,
            children: Vec::new(),
            measure: None,
            state: LayoutState::Dirty,
            line_index: 0,
        }
    }

    /// Returns true if this node has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if a measure callback is configured.
    #[must_use]
    pub fn is_measure_defined(&self) -> bool {
        self.measure.is_some()
    }
}

impl fmt::Debug for LayoutNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutNode")
            .field("style", &self.style)
            .field("layout", &self.layout)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("measure", &self.measure.as_ref().map(|_| "fn"))
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_detached_and_dirty() {
        let node = LayoutNode::new(Style::default());
        assert!(node.is_root());
        assert!(node.is_leaf());
        assert_eq!(node.child_count(), 0);
        assert_eq!(node.state, LayoutState::Dirty);
        assert!(!node.is_measure_defined());
    }

    #[test]
    fn test_measure_output_default_is_unset() {
        let output = MeasureOutput::default();
        assert!(output.width.is_nan());
        assert!(output.height.is_nan());
    }
}
